//! Settings for the `stats` command.
//!
//! Evaluation order:
//! 1) an explicit `--config` path,
//! 2) `$REELSTATS_CONFIG_PATH` (TOML or JSON file),
//! 3) `$REELSTATS_CONFIG_JSON` (inline JSON),
//! 4) the first existing default file in the working directory,
//! 5) built-in defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use reelstats_core::DisplayCaps;
use serde::{Deserialize, Serialize};

use crate::error::ConfigLoadError;

pub const CONFIG_PATH_ENV: &str = "REELSTATS_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "REELSTATS_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "reelstats.toml",
    "reelstats.json",
    "config/reelstats.toml",
    "config/reelstats.json",
];

/// How `stats` prints its result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Source that produced the stats configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Flag(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Row limits of the ranked actor, director/creator and genre lists.
    pub caps: DisplayCaps,
    pub format: OutputFormat,
}

impl StatsConfig {
    /// Resolve the configuration, preferring `explicit` over the environment.
    pub fn load(
        explicit: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigLoadError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            return Ok((config, ConfigSource::Flag(path.to_path_buf())));
        }
        Self::load_from_env()
    }

    pub fn load_from_env() -> Result<(Self, ConfigSource), ConfigLoadError> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, CONFIG_JSON_ENV)?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(Path::new("")) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                Self::parse_json(&contents, &path.display().to_string())
            }
            Some("toml") | Some("tml") => toml::from_str(&contents).map_err(
                |source| ConfigLoadError::Toml {
                    path: path.to_path_buf(),
                    source,
                },
            ),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file(base: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = StatsConfig::parse_from_str(
            "format = \"json\"\n[caps]\nactors = 5\n",
            "inline",
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.caps.actors, 5);
        assert_eq!(config.caps.directors, 20);
        assert_eq!(config.caps.genres, 10);
    }

    #[test]
    fn json_is_accepted_without_extension() {
        let config =
            StatsConfig::parse_from_str(r#"{"caps":{"genres":3}}"#, "inline")
                .unwrap();
        assert_eq!(config.caps.genres, 3);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = StatsConfig::parse_from_str("{{ nope", "inline").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("toml error"), "{message}");
        assert!(message.contains("json error"), "{message}");
    }

    #[test]
    fn loads_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("stats.toml");
        fs::write(&toml_path, "[caps]\ndirectors = 2\n").unwrap();
        let json_path = dir.path().join("stats.json");
        fs::write(&json_path, r#"{"format":"json"}"#).unwrap();

        let from_toml = StatsConfig::load_from_file(&toml_path).unwrap();
        let from_json = StatsConfig::load_from_file(&json_path).unwrap();

        assert_eq!(from_toml.caps.directors, 2);
        assert_eq!(from_json.format, OutputFormat::Json);
    }

    #[test]
    fn bad_toml_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.toml");
        fs::write(&path, "caps = 3").unwrap();

        let err = StatsConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Toml { .. }));
        assert!(err.to_string().contains("stats.toml"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = StatsConfig::load_from_file(Path::new("/nonexistent/x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.toml");
        fs::write(&path, "format = \"json\"").unwrap();

        let (config, source) = StatsConfig::load(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(source, ConfigSource::Flag(path));
    }

    #[test]
    fn default_candidates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(StatsConfig::find_default_file(dir.path()), None);

        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/reelstats.json"), "{}").unwrap();
        assert_eq!(
            StatsConfig::find_default_file(dir.path()),
            Some(dir.path().join("config/reelstats.json"))
        );

        fs::write(dir.path().join("reelstats.toml"), "").unwrap();
        assert_eq!(
            StatsConfig::find_default_file(dir.path()),
            Some(dir.path().join("reelstats.toml"))
        );
    }
}
