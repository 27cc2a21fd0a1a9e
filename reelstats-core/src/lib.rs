//! # reelstats core
//!
//! Aggregation of parsed film/TV title records into descriptive statistics.
//!
//! ## Overview
//!
//! - **Record import**: turn the page parser's plain records into validated
//!   titles, skipping malformed credits and absent fields
//! - **Statistics**: one pass over a set of titles, grouped by actor,
//!   director/creator and genre, with occurrence counts and averages for
//!   rating, personal rating, runtime and year of release
//!
//! ## Examples
//!
//! ```
//! use reelstats_core::{compute_statistics, import_titles};
//! use reelstats_model::TitleRecord;
//!
//! let records = vec![TitleRecord {
//!     id: "tt0090756".to_string(),
//!     title: "Blue Velvet".to_string(),
//!     title_type: "movie".to_string(),
//!     rating: Some(7.7),
//!     runtime: Some("2h".to_string()),
//!     ..TitleRecord::default()
//! }];
//!
//! let stats = compute_statistics(import_titles(records));
//! assert_eq!(stats.counts().movies, 1);
//! assert_eq!(stats.global().average_runtime().as_deref(), Some("2h"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Error types for record import
pub mod error;

/// Validation of parsed page records, id lists and personal ratings
pub mod import;

/// Grouping, averaging and ranking of titles
pub mod stats;

pub use error::{ImportError, Result};
pub use import::{
    import_title, import_titles, merge_user_ratings, split_title_ids,
};
pub use stats::{
    CategoryCounts, DisplayCaps, StatRow, StatRowSummary, Statistics,
    StatisticsReport, compute_statistics, compute_statistics_with,
};
