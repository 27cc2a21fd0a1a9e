//! Library side of `reelstatsctl`: configuration, input files and output
//! rendering for the `stats` command.

#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use config::{ConfigSource, OutputFormat, StatsConfig};
pub use error::ConfigLoadError;
pub use render::{TableView, render_json};
