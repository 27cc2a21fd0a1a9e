use std::hash::{Hash, Hasher};

use crate::error::ModelError;
use crate::ids::PersonId;

/// Actor, director or creator credited on a title.
///
/// Two people are the same entity when their ids match, regardless of the
/// display name they were scraped with.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Person {
    id: PersonId,
    name: String,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let id = PersonId::new(id)?;
        Self::with_id(id, name)
    }

    pub fn with_id(
        id: PersonId,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::InvalidName(format!(
                "person {id} has no name"
            )));
        }

        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> String {
        self.id.url()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
