//! Descriptive statistics over a set of titles.
//!
//! This module provides:
//! - [`StatRow`]: per-group occurrence counts and running sums
//! - [`compute_statistics`]: the single-pass grouping by actor,
//!   director/creator and genre
//! - ranking and truncation of the grouped rows to their display caps

pub mod accumulator;
pub mod caps;
pub mod engine;
pub mod ranking;
pub mod row;

#[cfg(test)]
mod tests;

pub use accumulator::Accumulator;
pub use caps::DisplayCaps;
pub use engine::{compute_statistics, compute_statistics_with};
pub use row::{StatRow, StatRowSummary};

use reelstats_model::Title;
use serde::Serialize;

/// Number of analyzed titles per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub movies: usize,
    pub episodes: usize,
    pub series: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.movies + self.episodes + self.series
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    titles: Vec<Title>,
    global: StatRow,
    actors: Vec<StatRow>,
    directors: Vec<StatRow>,
    genres: Vec<StatRow>,
    counts: CategoryCounts,
}

impl Statistics {
    /// Same as [`compute_statistics`].
    pub fn compute(titles: Vec<Title>) -> Self {
        compute_statistics(titles)
    }

    /// The titles this analysis is based on, in input order.
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Stats for all titles together.
    pub fn global(&self) -> &StatRow {
        &self.global
    }

    /// Most frequently cast actors, capped.
    pub fn actors(&self) -> &[StatRow] {
        &self.actors
    }

    /// Most frequent directors (movies, episodes) and creators (series), capped.
    pub fn directors(&self) -> &[StatRow] {
        &self.directors
    }

    /// Most frequent genres, capped.
    pub fn genres(&self) -> &[StatRow] {
        &self.genres
    }

    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            analyzed_titles: self.titles.len(),
            counts: self.counts,
            global: self.global.summary(),
            actors: self.actors.iter().map(StatRow::summary).collect(),
            directors: self.directors.iter().map(StatRow::summary).collect(),
            genres: self.genres.iter().map(StatRow::summary).collect(),
        }
    }
}

/// Serializable view of [`Statistics`] for rendering layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub analyzed_titles: usize,
    pub counts: CategoryCounts,
    pub global: StatRowSummary,
    pub actors: Vec<StatRowSummary>,
    pub directors: Vec<StatRowSummary>,
    pub genres: Vec<StatRowSummary>,
}
