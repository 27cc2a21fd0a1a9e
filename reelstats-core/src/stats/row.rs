use reelstats_model::{Person, Title, format_runtime};
use serde::Serialize;

use super::accumulator::Accumulator;

/// Statistics accumulated for one group: an actor, a director/creator, a
/// genre, or every analyzed title together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRow {
    name: Option<String>,
    url: Option<String>,
    occurrences: u32,
    ratings: Accumulator<f64>,
    user_ratings: Accumulator<f64>,
    runtimes: Accumulator<i64>,
    years: Accumulator<i64>,
}

impl StatRow {
    /// Unnamed row covering all titles of a pass.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn for_person(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            url: Some(person.url()),
            ..Self::default()
        }
    }

    /// Count the title and accumulate each of its statistics that is present.
    pub fn add_title(&mut self, title: &Title) {
        self.occurrences += 1;

        if let Some(rating) = title.rating() {
            self.ratings.push(rating);
        }
        if let Some(rating) = title.user_rating() {
            self.user_ratings.push(rating);
        }
        if let Some(minutes) = title.runtime_minutes() {
            self.runtimes.push(i64::from(minutes));
        }
        if let Some(year) = title.year_of_release() {
            self.years.push(i64::from(year));
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    pub fn ratings(&self) -> &Accumulator<f64> {
        &self.ratings
    }

    pub fn user_ratings(&self) -> &Accumulator<f64> {
        &self.user_ratings
    }

    pub fn runtimes(&self) -> &Accumulator<i64> {
        &self.runtimes
    }

    pub fn years(&self) -> &Accumulator<i64> {
        &self.years
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.ratings.mean()
    }

    pub fn average_user_rating(&self) -> Option<f64> {
        self.user_ratings.mean()
    }

    pub fn average_runtime_minutes(&self) -> Option<u32> {
        self.runtimes.mean().and_then(|m| u32::try_from(m).ok())
    }

    /// Average runtime rendered as `1h 55min`, `30min` or `2h`.
    pub fn average_runtime(&self) -> Option<String> {
        self.average_runtime_minutes().map(format_runtime)
    }

    pub fn average_year_of_release(&self) -> Option<i32> {
        self.years.mean().and_then(|y| i32::try_from(y).ok())
    }

    pub fn formatted_average_rating(&self) -> Option<String> {
        self.average_rating().map(|r| format!("{r:.2}"))
    }

    pub fn formatted_average_user_rating(&self) -> Option<String> {
        self.average_user_rating().map(|r| format!("{r:.2}"))
    }

    pub fn summary(&self) -> StatRowSummary {
        StatRowSummary {
            name: self.name.clone(),
            url: self.url.clone(),
            occurrences: self.occurrences,
            average_rating: self.average_rating(),
            average_user_rating: self.average_user_rating(),
            average_runtime_minutes: self.average_runtime_minutes(),
            average_runtime: self.average_runtime(),
            average_year_of_release: self.average_year_of_release(),
        }
    }
}

/// Read-only snapshot of a [`StatRow`] with every average resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRowSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub occurrences: u32,
    pub average_rating: Option<f64>,
    pub average_user_rating: Option<f64>,
    pub average_runtime_minutes: Option<u32>,
    pub average_runtime: Option<String>,
    pub average_year_of_release: Option<i32>,
}
