use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::types::EntityId;

/// Actor or director together with the titles they are credited on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub movies: Vec<String>,
}

impl Entity for Person {
    fn id(&self) -> EntityId {
        self.id
    }

    fn labels(&self) -> &[String] {
        &self.movies
    }
}

/// Which people collection a page shows.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    Actor,
    Director,
}

impl PersonRole {
    /// Path segment of the remote collection for this role.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Actor => "actors",
            Self::Director => "directors",
        }
    }
}
