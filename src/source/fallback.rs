//! Primary source with a local fallback for movie details.

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::domain::types::EntityId;
use crate::source::{CatalogSource, SourceResult};

/// Delegates to `primary`; a failed movie lookup is retried against
/// `fallback`. Collections are never substituted.
#[derive(Clone, Debug)]
pub struct FallbackCatalog<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackCatalog<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> CatalogSource for FallbackCatalog<P, F>
where
    P: CatalogSource,
    F: CatalogSource,
{
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
        self.primary.fetch_movies().await
    }

    async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie> {
        match self.primary.fetch_movie(id).await {
            Ok(movie) => Ok(movie),
            Err(err) => match self.fallback.fetch_movie(id).await {
                Ok(movie) => {
                    log::warn!("Serving movie {id} from local fallback: {err}");
                    Ok(movie)
                }
                Err(_) => Err(err),
            },
        }
    }

    async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>> {
        self.primary.fetch_people(role).await
    }
}
