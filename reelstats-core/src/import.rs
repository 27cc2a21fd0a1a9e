//! Conversion of parsed page records into validated titles.
//!
//! Upstream parsing is best effort: any field may be missing or malformed.
//! A bad optional field is logged and left absent, a bad credit is logged
//! and skipped, and only a record without a usable id is rejected.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use reelstats_model::{
    EpisodeInfo, Person, PersonId, PersonRecord, Title, TitleDetails, TitleId,
    TitleKind, TitleRecord, parse_runtime,
};
use tracing::{debug, warn};

use crate::error::{ImportError, Result};

/// Separators accepted between ids in a single-line id list.
static ID_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%20| |\+|,").expect("separator pattern is valid")
});

/// Years outside of this open interval are scraping noise.
const YEAR_BOUNDS: (i32, i32) = (1500, 5000);

fn person_from_record(record: &PersonRecord) -> Option<Person> {
    let id = match record.id.as_deref() {
        Some(id) => PersonId::new(id).ok(),
        None => record.href.as_deref().and_then(PersonId::from_url),
    }?;
    Person::with_id(id, record.name.as_str()).ok()
}

fn people(
    title_id: &TitleId,
    records: &[PersonRecord],
    role: &str,
) -> Vec<Person> {
    records
        .iter()
        .filter_map(|record| {
            let person = person_from_record(record);
            if person.is_none() {
                warn!(
                    title = %title_id,
                    role,
                    name = %record.name,
                    "skipping credit with invalid id or name"
                );
            }
            person
        })
        .collect()
}

fn year(title_id: &TitleId, raw: Option<i32>) -> Option<u16> {
    let year = raw?;
    if year > YEAR_BOUNDS.0 && year < YEAR_BOUNDS.1 {
        u16::try_from(year).ok()
    } else {
        warn!(title = %title_id, year, "ignoring implausible year of release");
        None
    }
}

fn rating(title_id: &TitleId, raw: Option<f64>, field: &str) -> Option<f64> {
    let value = raw?;
    if (0.0..=10.0).contains(&value) {
        Some(value)
    } else {
        warn!(title = %title_id, field, value, "ignoring out of range rating");
        None
    }
}

/// Validate one record and build its title.
pub fn import_title(record: TitleRecord) -> Result<Title> {
    if record.id.trim().is_empty() {
        return Err(ImportError::MissingField("id"));
    }
    let id = TitleId::new(record.id.as_str())?;

    let kind = TitleKind::from_description(&record.title_type);
    let details = match kind {
        TitleKind::Movie => TitleDetails::Movie {
            year_of_release: year(&id, record.year),
        },
        TitleKind::Episode => TitleDetails::Episode(EpisodeInfo {
            series_id: record.series_id.as_deref().and_then(|raw| {
                TitleId::from_url(raw).or_else(|| TitleId::new(raw).ok())
            }),
            series_name: record.series_name.clone().unwrap_or_default(),
            season_and_episode: record
                .season_and_episode
                .clone()
                .unwrap_or_default(),
            year_of_release: year(&id, record.year),
        }),
        TitleKind::Series => TitleDetails::Series,
    };

    let runtime_minutes = match record.runtime.as_deref() {
        Some(raw) => match parse_runtime(raw) {
            Ok(minutes) => Some(minutes),
            Err(err) => {
                warn!(title = %id, %err, "could not parse runtime");
                None
            }
        },
        None => {
            debug!(title = %id, "no runtime found");
            None
        }
    };

    let actors = people(&id, &record.actors, "actor");
    let directors = people(&id, &record.directors, "director");
    let rating_value = rating(&id, record.rating, "rating");
    let user_rating = rating(&id, record.user_rating, "user_rating");

    let title = Title::builder(id, record.title, details)
        .genres(record.genres)
        .rating(rating_value)
        .user_rating(user_rating)
        .runtime_minutes(runtime_minutes)
        .summary(record.summary)
        .actors(actors)
        .directors(directors)
        .build()?;

    Ok(title)
}

/// Import every record that can be imported, keeping input order.
pub fn import_titles(
    records: impl IntoIterator<Item = TitleRecord>,
) -> Vec<Title> {
    records
        .into_iter()
        .filter_map(|record| {
            let raw_id = record.id.clone();
            match import_title(record) {
                Ok(title) => Some(title),
                Err(err) => {
                    warn!(id = %raw_id, %err, "skipping record");
                    None
                }
            }
        })
        .collect()
}

/// Split a single line of title ids (`tt1 tt2,tt3+tt4%20tt5`).
///
/// Tokens that are not title ids are skipped, as are repeats of an id that
/// was already listed.
pub fn split_title_ids(raw: &str) -> Vec<TitleId> {
    let mut seen = HashSet::new();
    ID_SEPARATOR_RE
        .split(raw.trim())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            if !token.starts_with("tt") {
                warn!(token, "not a title id, skipping");
                return None;
            }
            let id = TitleId::new(token).ok()?;
            if seen.insert(id.clone()) {
                Some(id)
            } else {
                debug!(%id, "skipping duplicate id");
                None
            }
        })
        .collect()
}

/// Attach personal ratings from an exported ratings file to matching titles.
///
/// Returns how many titles received a rating.
pub fn merge_user_ratings(
    titles: &mut [Title],
    ratings: &HashMap<TitleId, f64>,
) -> usize {
    let mut applied = 0;
    for title in titles.iter_mut() {
        let Some(&value) = ratings.get(title.id()) else {
            continue;
        };
        match title.set_user_rating(Some(value)) {
            Ok(()) => applied += 1,
            Err(err) => warn!(title = %title.id(), %err, "ignoring user rating"),
        }
    }
    applied
}
