//! `HttpCatalog` - client for the remote catalog API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::domain::types::EntityId;
use crate::source::{CatalogSource, SourceError, SourceResult};

/// Local development API used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Remote catalog client.
///
/// Sends plain `GET` requests: no auth headers, no query string, no body.
/// There is no timeout and no retry.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    http_client: Client,
    base_url: Url,
}

/// Builder for `HttpCatalog`.
#[derive(Debug, Default)]
pub struct HttpCatalogBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl HttpCatalogBuilder {
    /// Overrides the API base URL (a wiremock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL is invalid or the
    /// `reqwest::Client` cannot be built.
    pub fn build(self) -> SourceResult<HttpCatalog> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http_client = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()?;

        Ok(HttpCatalog {
            http_client,
            base_url: with_trailing_slash(base_url),
        })
    }
}

impl HttpCatalog {
    #[must_use]
    pub fn builder() -> HttpCatalogBuilder {
        HttpCatalogBuilder::default()
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> SourceResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SourceResult<T> {
        let url = self.endpoint(path)?;
        log::debug!("Catalog API request: GET {url}");

        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
        self.get_json("movies").await
    }

    async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie> {
        self.get_json(&format!("movies/{id}")).await
    }

    async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>> {
        self.get_json(role.collection()).await
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
