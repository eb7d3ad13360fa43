//! Page loaders sitting between the routes and the catalog source.
//!
//! Each loader mounts a fresh view, performs its single fetch and returns the
//! view ready to render.

use crate::domain::movie::{Movie, MovieSummary};
use crate::domain::person::{Person, PersonRole};
use crate::source::CatalogSource;
use crate::views::{DetailPage, EntityDetailView, EntityListView, ListPage};

/// Loads the movie collection for the home page.
pub async fn load_movies_page<S>(source: &S) -> EntityListView<MovieSummary>
where
    S: CatalogSource,
{
    let mut view = EntityListView::mount(ListPage::MOVIES);
    view.load(source.fetch_movies()).await;
    view
}

/// Loads the actors or directors page.
pub async fn load_people_page<S>(source: &S, role: PersonRole) -> EntityListView<Person>
where
    S: CatalogSource,
{
    let mut view = EntityListView::mount(ListPage::people(role));
    view.load(source.fetch_people(role)).await;
    view
}

/// Loads the movie detail page for the raw route id.
pub async fn load_movie_page<S>(source: &S, raw_id: &str) -> EntityDetailView<Movie>
where
    S: CatalogSource,
{
    let mut view = EntityDetailView::mount(DetailPage::MOVIE, raw_id);
    view.load(|id| source.fetch_movie(id)).await;
    view
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::types::EntityId;
    use crate::source::fixture::FixtureCatalog;
    use crate::source::{SourceError, SourceResult};

    /// Wraps a source and counts the requests issued through it.
    struct CountingCatalog<S> {
        inner: S,
        calls: Cell<usize>,
    }

    impl<S> CountingCatalog<S> {
        fn new(inner: S) -> Self {
            Self {
                inner,
                calls: Cell::new(0),
            }
        }

        fn bump(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    impl<S: CatalogSource> CatalogSource for CountingCatalog<S> {
        async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
            self.bump();
            self.inner.fetch_movies().await
        }

        async fn fetch_movie(&self, id: EntityId) -> SourceResult<Movie> {
            self.bump();
            self.inner.fetch_movie(id).await
        }

        async fn fetch_people(&self, role: PersonRole) -> SourceResult<Vec<Person>> {
            self.bump();
            self.inner.fetch_people(role).await
        }
    }

    /// Source that fails every request.
    struct DownCatalog;

    impl CatalogSource for DownCatalog {
        async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
            Err(SourceError::Request("connection refused".to_string()))
        }

        async fn fetch_movie(&self, _id: EntityId) -> SourceResult<Movie> {
            Err(SourceError::Request("connection refused".to_string()))
        }

        async fn fetch_people(&self, _role: PersonRole) -> SourceResult<Vec<Person>> {
            Err(SourceError::Decode("expected value at line 1".to_string()))
        }
    }

    fn bob() -> Person {
        Person {
            id: EntityId::new(2).expect("valid id"),
            name: "Bob".to_string(),
            movies: vec!["A".to_string(), "B".to_string()],
        }
    }

    #[tokio::test]
    async fn movies_page_issues_exactly_one_request() {
        let source = CountingCatalog::new(FixtureCatalog::built_in());

        let view = load_movies_page(&source).await;

        assert_eq!(source.calls.get(), 1);
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].title, "Doctor Strange");
    }

    #[tokio::test]
    async fn people_page_uses_role_collection() {
        let source = FixtureCatalog::new().with_person(PersonRole::Actor, bob());

        let actors = load_people_page(&source, PersonRole::Actor).await;
        let directors = load_people_page(&source, PersonRole::Director).await;

        assert_eq!(actors.items(), [bob()]);
        assert_eq!(actors.page(), ListPage::people(PersonRole::Actor));
        assert!(directors.items().is_empty());
        assert!(!directors.state().is_failed());
    }

    #[tokio::test]
    async fn failed_pages_render_empty() {
        let movies = load_movies_page(&DownCatalog).await;
        let people = load_people_page(&DownCatalog, PersonRole::Director).await;
        let movie = load_movie_page(&DownCatalog, "1").await;

        assert!(movies.items().is_empty());
        assert!(people.items().is_empty());
        assert!(movie.entity().is_none());
        assert!(movies.state().is_failed() && people.state().is_failed());
    }

    #[tokio::test]
    async fn movie_page_reads_fixture_without_network() {
        let source = CountingCatalog::new(FixtureCatalog::built_in());

        let view = load_movie_page(&source, "1").await;

        let movie = view.entity().expect("fixture movie");
        assert_eq!(movie.time, 115);
        assert_eq!(movie.genres, ["Action", "Adventure", "Fantasy"]);
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn malformed_movie_id_skips_the_source() {
        let source = CountingCatalog::new(FixtureCatalog::built_in());

        let view = load_movie_page(&source, "-1").await;

        assert_eq!(source.calls.get(), 0);
        assert!(view.entity().is_none());
    }
}
