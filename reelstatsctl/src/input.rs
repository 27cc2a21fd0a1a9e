//! Reading the JSON files produced by the page parser and ratings export.

use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use reelstats_model::{TitleId, TitleRecord};
use tracing::{info, warn};

/// Read a JSON array of title records.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<TitleRecord>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read title records from {}", path.display())
    })?;
    let records: Vec<TitleRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid title records {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "loaded title records");
    Ok(records)
}

/// Read a JSON object mapping title ids to personal ratings.
///
/// Keys that are not usable ids are logged and skipped.
pub fn load_user_ratings(
    path: &Path,
) -> anyhow::Result<HashMap<TitleId, f64>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read user ratings from {}", path.display())
    })?;
    let raw: HashMap<String, f64> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid user ratings {}", path.display()))?;

    let ratings = raw
        .into_iter()
        .filter_map(|(key, value)| match TitleId::new(key.as_str()) {
            Ok(id) => Some((id, value)),
            Err(err) => {
                warn!(key = %key, %err, "skipping user rating");
                None
            }
        })
        .collect();

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_and_ratings() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("titles.json");
        fs::write(
            &records,
            r#"[{"id":"tt0090756","title":"Blue Velvet","title_type":"movie"}]"#,
        )
        .unwrap();
        let ratings = dir.path().join("ratings.json");
        fs::write(&ratings, r#"{"tt0090756": 9, " ": 4}"#).unwrap();

        let records = load_records(&records).unwrap();
        let ratings = load_user_ratings(&ratings).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Blue Velvet");
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[&TitleId::new("tt0090756").unwrap()], 9.0);
    }

    #[test]
    fn errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.json");
        fs::write(&path, "not json").unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(format!("{err:#}").contains("titles.json"));

        let missing = load_user_ratings(&dir.path().join("nope.json"));
        assert!(missing.is_err());
    }
}
