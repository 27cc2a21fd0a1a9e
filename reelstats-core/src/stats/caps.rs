use serde::{Deserialize, Serialize};

pub const ACTORS_TO_DISPLAY: usize = 50;
pub const DIRECTORS_TO_DISPLAY: usize = 20;
pub const GENRES_TO_DISPLAY: usize = 10;

/// Maximum number of ranked rows kept per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayCaps {
    pub actors: usize,
    /// Directors for movies/episodes and creators for series share one list.
    pub directors: usize,
    pub genres: usize,
}

impl Default for DisplayCaps {
    fn default() -> Self {
        Self {
            actors: ACTORS_TO_DISPLAY,
            directors: DIRECTORS_TO_DISPLAY,
            genres: GENRES_TO_DISPLAY,
        }
    }
}
