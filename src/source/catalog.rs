//! Catalog selected from the server configuration.

use thiserror::Error;
use url::Url;

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::domain::types::EntityId;
use crate::models::config::{ServerConfig, SourceKind};
use crate::source::fallback::FallbackCatalog;
use crate::source::fixture::{FixtureCatalog, FixtureError};
use crate::source::http::HttpCatalog;
use crate::source::{CatalogSource, SourceError, SourceResult};

#[derive(Debug, Error)]
pub enum CatalogSetupError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// The concrete source handed to the page handlers.
#[derive(Clone, Debug)]
pub enum Catalog {
    Http(HttpCatalog),
    Fixtures(FixtureCatalog),
    HttpWithFallback(FallbackCatalog<HttpCatalog, FixtureCatalog>),
}

impl Catalog {
    /// Builds the catalog described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid, the HTTP client cannot be
    /// built or the fixture file cannot be loaded.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CatalogSetupError> {
        let fixtures = || match &config.fixtures_path {
            Some(path) => FixtureCatalog::from_path(path),
            None => Ok(FixtureCatalog::built_in()),
        };

        if config.source == SourceKind::Fixtures {
            return Ok(Self::Fixtures(fixtures()?));
        }

        let base_url = Url::parse(&config.api_base_url).map_err(SourceError::from)?;
        let mut builder = HttpCatalog::builder().base_url(base_url);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder.build()?;

        if config.fixture_fallback {
            Ok(Self::HttpWithFallback(FallbackCatalog::new(http, fixtures()?)))
        } else {
            Ok(Self::Http(http))
        }
    }
}

impl CatalogSource for Catalog {
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
        match self {
            Self::Http(source) => source.fetch_movies().await,
            Self::Fixtures(source) => source.fetch_movies().await,
            Self::HttpWithFallback(source) => source.fetch_movies().await,
        }
    }

    async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie> {
        match self {
            Self::Http(source) => source.fetch_movie(id).await,
            Self::Fixtures(source) => source.fetch_movie(id).await,
            Self::HttpWithFallback(source) => source.fetch_movie(id).await,
        }
    }

    async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>> {
        match self {
            Self::Http(source) => source.fetch_people(role).await,
            Self::Fixtures(source) => source.fetch_people(role).await,
            Self::HttpWithFallback(source) => source.fetch_people(role).await,
        }
    }
}
