use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::types::EntityId;

/// Movie as listed by the `/movies` collection endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    pub id: EntityId,
    pub title: String,
}

/// Full movie record returned by `/movies/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    /// Running time in minutes.
    pub time: u32,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Movie {
    /// Projects the movie onto its list representation.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

impl Entity for MovieSummary {
    fn id(&self) -> EntityId {
        self.id
    }

    fn labels(&self) -> &[String] {
        &[]
    }
}

impl Entity for Movie {
    fn id(&self) -> EntityId {
        self.id
    }

    fn labels(&self) -> &[String] {
        &self.genres
    }
}
