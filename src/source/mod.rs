//! Catalog data sources.
//!
//! Pages never talk to the network directly: they are handed a
//! [`CatalogSource`] and issue exactly one call per render.

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::domain::types::EntityId;

#[cfg(feature = "server")]
pub mod catalog;
pub mod errors;
pub mod fallback;
pub mod fixture;
#[cfg(feature = "server")]
pub mod http;

pub use errors::{SourceError, SourceResult};

/// Read access to the movie catalog.
///
/// Abstracts the remote API so that tests and offline setups can substitute
/// a fixture-backed implementation.
/// Futures are not required to be `Send`: every page runs on a single
/// actix worker.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetches the full movie collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>>;

    /// Fetches a single movie with its genres and running time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails, or the movie is unknown.
    async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie>;

    /// Fetches the actors or directors collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>>;
}
