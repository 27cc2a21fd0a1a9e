use crate::error::ModelError;

const TITLE_BASE_URL: &str = "https://www.imdb.com/title/";
const PERSON_BASE_URL: &str = "https://www.imdb.com/name/";

/// Pull the id segment out of a link such as `/title/tt0000186?ref_=tt_ov_dr`.
fn id_from_link<'a>(link: &'a str, marker: &str) -> Option<&'a str> {
    let mut parts = link.split(marker);
    let _prefix = parts.next()?;
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let id = rest.split('?').next().unwrap_or_default();
    let id = id.trim_end_matches('/');
    if id.is_empty() { None } else { Some(id) }
}

fn validated(raw: impl Into<String>, what: &str) -> Result<String, ModelError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::InvalidId(format!("{what} id cannot be empty")));
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Strongly typed external id of a movie, episode or series (`tt0090756`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TitleId(String);

impl TitleId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        validated(id, "title").map(TitleId)
    }

    /// Extract the id from a title link, or `None` when the link is not one.
    pub fn from_url(link: &str) -> Option<Self> {
        id_from_link(link, "/title/").map(|id| TitleId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!("{TITLE_BASE_URL}{}/", self.0)
    }
}

impl AsRef<str> for TitleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TitleId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TitleId::new(value)
    }
}

impl From<TitleId> for String {
    fn from(id: TitleId) -> Self {
        id.0
    }
}

/// Strongly typed external id of an actor, director or creator (`nm0000186`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        validated(id, "person").map(PersonId)
    }

    /// Extract the id from a `/name/...` link.
    pub fn from_url(link: &str) -> Option<Self> {
        id_from_link(link, "/name/").map(|id| PersonId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!("{PERSON_BASE_URL}{}/", self.0)
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PersonId::new(value)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}
