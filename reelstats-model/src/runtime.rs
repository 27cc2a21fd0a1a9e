//! Conversion between runtime text (`1h 55min`, `30min`, `2h`) and minutes.
//!
//! Pages only ever express runtimes with an hour and/or a minute component,
//! so those are the only units accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ModelError;

static RUNTIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*min)?\s*$")
        .expect("runtime pattern is valid")
});

/// Parse a runtime description into a total number of minutes.
pub fn parse_runtime(raw: &str) -> Result<u32, ModelError> {
    let invalid = || ModelError::InvalidRuntime(raw.to_string());

    let caps = RUNTIME_RE.captures(raw).ok_or_else(invalid)?;
    let hours = caps.get(1);
    let minutes = caps.get(2);
    if hours.is_none() && minutes.is_none() {
        return Err(invalid());
    }

    let parse = |m: Option<regex::Match<'_>>| -> Result<u32, ModelError> {
        match m {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| invalid()),
            None => Ok(0),
        }
    };

    parse(hours)?
        .checked_mul(60)
        .and_then(|h| h.checked_add(parse(minutes).ok()?))
        .ok_or_else(invalid)
}

/// Render minutes the way runtimes are displayed: `30min`, `2h`, `1h 55min`.
pub fn format_runtime(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}min");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}min")
    }
}
