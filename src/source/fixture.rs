//! In-memory catalog used for tests, offline setups and as a local fallback.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::domain::types::EntityId;
use crate::source::{CatalogSource, SourceError, SourceResult};

/// Errors raised while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog backed by a fixed dataset.
///
/// The JSON layout mirrors the remote collections:
/// `{ "movies": [...], "actors": [...], "directors": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FixtureCatalog {
    #[serde(default)]
    movies: Vec<Movie>,
    #[serde(default)]
    actors: Vec<Person>,
    #[serde(default)]
    directors: Vec<Person>,
}

impl FixtureCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dataset shipped with the application.
    #[must_use]
    pub fn built_in() -> Self {
        Self::new().with_movie(Movie {
            id: EntityId::from_raw(1),
            title: "Doctor Strange".to_string(),
            time: 115,
            genres: vec![
                "Action".to_string(),
                "Adventure".to_string(),
                "Fantasy".to_string(),
            ],
        })
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dataset.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    #[must_use]
    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.movies.push(movie);
        self
    }

    #[must_use]
    pub fn with_person(mut self, role: PersonRole, person: Person) -> Self {
        match role {
            PersonRole::Actor => self.actors.push(person),
            PersonRole::Director => self.directors.push(person),
        }
        self
    }

    fn people(&self, role: PersonRole) -> &[Person] {
        match role {
            PersonRole::Actor => &self.actors,
            PersonRole::Director => &self.directors,
        }
    }
}

impl CatalogSource for FixtureCatalog {
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
        Ok(self.movies.iter().map(Movie::summary).collect())
    }

    async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie> {
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(SourceError::NotFound)
    }

    async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>> {
        Ok(self.people(role).to_vec())
    }
}
