use std::fmt::{Display, Formatter};

/// Discriminator for the three title variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TitleKind {
    /// Feature film, short, TV movie, ...
    Movie,
    /// Single episode of a series
    Episode,
    /// Whole TV series or mini-series
    Series,
}

impl TitleKind {
    /// Resolve a free-text type description ("TV Series", "TV Episode",
    /// "movie", ...) the way both scraped pages and rating exports label
    /// titles. Anything that is neither a series nor an episode is a movie.
    pub fn from_description(description: &str) -> Self {
        if description.contains("Series") {
            TitleKind::Series
        } else if description.contains("Episode") {
            TitleKind::Episode
        } else {
            TitleKind::Movie
        }
    }
}

impl Display for TitleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleKind::Movie => write!(f, "Movie"),
            TitleKind::Episode => write!(f, "Episode"),
            TitleKind::Series => write!(f, "Series"),
        }
    }
}
