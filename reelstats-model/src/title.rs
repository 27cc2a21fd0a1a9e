use std::collections::BTreeSet;
use std::fmt;

use crate::error::ModelError;
use crate::ids::TitleId;
use crate::person::Person;
use crate::title_kind::TitleKind;

/// Upper bound on the number of billed actors kept per title.
pub const MAX_PRIMARY_ACTORS: usize = 15;

/// Episode-only data: where the episode sits in its parent series.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EpisodeInfo {
    pub series_id: Option<TitleId>,
    pub series_name: String,
    /// Free-text descriptor as shown on the page, e.g. `Season 1 | Episode 3`.
    pub season_and_episode: String,
    pub year_of_release: Option<u16>,
}

/// Variant-specific part of a title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum TitleDetails {
    Movie { year_of_release: Option<u16> },
    Episode(EpisodeInfo),
    /// Series span several years and carry no single year of release.
    Series,
}

impl TitleDetails {
    pub fn kind(&self) -> TitleKind {
        match self {
            TitleDetails::Movie { .. } => TitleKind::Movie,
            TitleDetails::Episode(_) => TitleKind::Episode,
            TitleDetails::Series => TitleKind::Series,
        }
    }
}

/// A movie, episode or series together with its scraped metadata.
///
/// Titles are immutable once built, except for the personal user rating
/// which may be merged in later from an exported ratings file.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Title {
    id: TitleId,
    name: String,
    details: TitleDetails,
    genres: BTreeSet<String>,
    rating: Option<f64>,
    user_rating: Option<f64>,
    runtime_minutes: Option<u32>,
    summary: String,
    primary_actors: Vec<Person>,
    directors_or_creators: Vec<Person>,
}

fn check_rating(value: Option<f64>) -> Result<Option<f64>, ModelError> {
    match value {
        Some(v) if !(0.0..=10.0).contains(&v) => {
            Err(ModelError::InvalidRating(v))
        }
        other => Ok(other),
    }
}

impl Title {
    pub fn builder(
        id: TitleId,
        name: impl Into<String>,
        details: TitleDetails,
    ) -> TitleBuilder {
        TitleBuilder::new(id, name, details)
    }

    pub fn id(&self) -> &TitleId {
        &self.id
    }

    pub fn url(&self) -> String {
        self.id.url()
    }

    /// Display title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &TitleDetails {
        &self.details
    }

    pub fn kind(&self) -> TitleKind {
        self.details.kind()
    }

    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    /// Genres as a single comma separated string.
    pub fn genres_joined(&self) -> String {
        self.genres
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn user_rating(&self) -> Option<f64> {
        self.user_rating
    }

    /// Attach (or clear) the personal rating from an exported ratings file.
    pub fn set_user_rating(
        &mut self,
        rating: Option<f64>,
    ) -> Result<(), ModelError> {
        self.user_rating = check_rating(rating)?;
        Ok(())
    }

    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_minutes
    }

    pub fn year_of_release(&self) -> Option<u16> {
        match &self.details {
            TitleDetails::Movie { year_of_release } => *year_of_release,
            TitleDetails::Episode(info) => info.year_of_release,
            TitleDetails::Series => None,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn primary_actors(&self) -> &[Person] {
        &self.primary_actors
    }

    /// Directors for movies and episodes, creators for series.
    pub fn directors_or_creators(&self) -> &[Person] {
        &self.directors_or_creators
    }

    /// Label for [`Title::directors_or_creators`].
    pub fn director_role(&self) -> &'static str {
        match self.kind() {
            TitleKind::Series => "Creator",
            TitleKind::Movie | TitleKind::Episode => "Director",
        }
    }

    /// Extra context line; only episodes have one (`Series, Season 1, Episode 3`).
    pub fn subtitle(&self) -> Option<String> {
        match &self.details {
            TitleDetails::Episode(info) => Some(format!(
                "{}, {}",
                info.series_name,
                info.season_and_episode.replace(" |", ",")
            )),
            _ => None,
        }
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Title")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("rating", &self.rating)
            .field("user_rating", &self.user_rating)
            .field("runtime_minutes", &self.runtime_minutes)
            .field("year_of_release", &self.year_of_release())
            .field("genre_count", &self.genres.len())
            .field("actor_count", &self.primary_actors.len())
            .field("director_count", &self.directors_or_creators.len())
            .finish()
    }
}

/// Step-wise construction of a [`Title`]; validation happens in `build`.
#[derive(Debug, Clone)]
pub struct TitleBuilder {
    id: TitleId,
    name: String,
    details: TitleDetails,
    genres: BTreeSet<String>,
    rating: Option<f64>,
    user_rating: Option<f64>,
    runtime_minutes: Option<u32>,
    summary: String,
    primary_actors: Vec<Person>,
    directors_or_creators: Vec<Person>,
}

impl TitleBuilder {
    pub fn new(
        id: TitleId,
        name: impl Into<String>,
        details: TitleDetails,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            details,
            genres: BTreeSet::new(),
            rating: None,
            user_rating: None,
            runtime_minutes: None,
            summary: String::new(),
            primary_actors: Vec::new(),
            directors_or_creators: Vec::new(),
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        let genre = genre.trim();
        if !genre.is_empty() {
            self.genres.insert(genre.to_string());
        }
        self
    }

    pub fn genres<I, S>(self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        genres.into_iter().fold(self, |b, g| b.genre(g))
    }

    pub fn rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    pub fn user_rating(mut self, rating: Option<f64>) -> Self {
        self.user_rating = rating;
        self
    }

    pub fn runtime_minutes(mut self, minutes: Option<u32>) -> Self {
        self.runtime_minutes = minutes;
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Append a billed actor; anything past [`MAX_PRIMARY_ACTORS`] is dropped.
    pub fn actor(mut self, person: Person) -> Self {
        if self.primary_actors.len() < MAX_PRIMARY_ACTORS {
            self.primary_actors.push(person);
        }
        self
    }

    pub fn actors(self, people: impl IntoIterator<Item = Person>) -> Self {
        people.into_iter().fold(self, |b, p| b.actor(p))
    }

    pub fn director(mut self, person: Person) -> Self {
        self.directors_or_creators.push(person);
        self
    }

    pub fn directors(self, people: impl IntoIterator<Item = Person>) -> Self {
        people.into_iter().fold(self, |b, p| b.director(p))
    }

    pub fn build(self) -> Result<Title, ModelError> {
        let rating = check_rating(self.rating)?;
        let user_rating = check_rating(self.user_rating)?;

        Ok(Title {
            id: self.id,
            name: self.name,
            details: self.details,
            genres: self.genres,
            rating,
            user_rating,
            runtime_minutes: self.runtime_minutes,
            summary: self.summary,
            primary_actors: self.primary_actors,
            directors_or_creators: self.directors_or_creators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> TitleBuilder {
        Title::builder(
            TitleId::new(id).unwrap(),
            "Some Movie",
            TitleDetails::Movie {
                year_of_release: Some(1986),
            },
        )
    }

    fn person(n: usize) -> Person {
        Person::new(format!("nm{n:07}"), format!("Actor {n}")).unwrap()
    }

    #[test]
    fn actor_list_is_capped() {
        let title = movie("tt0000001")
            .actors((0..20).map(person))
            .build()
            .unwrap();

        assert_eq!(title.primary_actors().len(), MAX_PRIMARY_ACTORS);
        assert_eq!(title.primary_actors()[0], person(0));
        assert_eq!(title.primary_actors()[14], person(14));
    }

    #[test]
    fn genres_are_unique_and_trimmed() {
        let title = movie("tt0000001")
            .genres(["Drama", " Drama ", "Crime", ""])
            .build()
            .unwrap();

        assert_eq!(title.genres().len(), 2);
        assert_eq!(title.genres_joined(), "Crime, Drama");
    }

    #[test]
    fn ratings_must_be_in_range() {
        let err = movie("tt0000001").rating(Some(10.5)).build().unwrap_err();
        assert_eq!(err, ModelError::InvalidRating(10.5));

        let mut title = movie("tt0000001").rating(Some(10.0)).build().unwrap();
        assert!(title.set_user_rating(Some(-1.0)).is_err());
        assert_eq!(title.user_rating(), None);

        title.set_user_rating(Some(7.0)).unwrap();
        assert_eq!(title.user_rating(), Some(7.0));
    }

    #[test]
    fn series_have_no_year_and_credit_creators() {
        let series = Title::builder(
            TitleId::new("tt0098936").unwrap(),
            "Twin Peaks",
            TitleDetails::Series,
        )
        .build()
        .unwrap();

        assert_eq!(series.kind(), TitleKind::Series);
        assert_eq!(series.year_of_release(), None);
        assert_eq!(series.director_role(), "Creator");
        assert_eq!(series.subtitle(), None);
    }

    #[test]
    fn episode_subtitle_mentions_series() {
        let episode = Title::builder(
            TitleId::new("tt0720034").unwrap(),
            "Pilot",
            TitleDetails::Episode(EpisodeInfo {
                series_id: TitleId::new("tt0098936").ok(),
                series_name: "Twin Peaks".to_string(),
                season_and_episode: "Season 1 | Episode 1".to_string(),
                year_of_release: Some(1990),
            }),
        )
        .build()
        .unwrap();

        assert_eq!(episode.kind(), TitleKind::Episode);
        assert_eq!(episode.year_of_release(), Some(1990));
        assert_eq!(episode.director_role(), "Director");
        assert_eq!(
            episode.subtitle().as_deref(),
            Some("Twin Peaks, Season 1, Episode 1")
        );
    }
}
