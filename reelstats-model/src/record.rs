//! Plain, unvalidated shapes handed over by the page-parsing layer.
//!
//! Every field is exactly as it was found on the page (or absent). Turning a
//! record into a [`crate::Title`] is where validation happens.

/// Credited person as it appears in a cast or credit list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    /// Link to the person's page; used when `id` is missing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub href: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// One parsed title page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Free-text type label, e.g. `TV Series`, `TV Episode`, `movie`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_rating: Option<f64>,
    /// Runtime text such as `1h 55min`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub runtime: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Vec<PersonRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directors: Vec<PersonRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub series_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub series_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub season_and_episode: Option<String>,
}
