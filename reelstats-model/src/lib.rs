//! Core record definitions shared across reelstats crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod person;
pub mod record;
pub mod runtime;
pub mod title;
pub mod title_kind;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{PersonId, TitleId};
pub use person::Person;
pub use record::{PersonRecord, TitleRecord};
pub use runtime::{format_runtime, parse_runtime};
pub use title::{
    EpisodeInfo, MAX_PRIMARY_ACTORS, Title, TitleBuilder, TitleDetails,
};
pub use title_kind::TitleKind;
