#![allow(dead_code)]

use film_browser::domain::movie::{Movie, MovieSummary};
use film_browser::domain::person::{Person, PersonRole};
use film_browser::domain::types::EntityId;
use film_browser::source::{CatalogSource, SourceError, SourceResult};
use tera::Tera;

/// Builds the test service for a catalog source type.
macro_rules! init_app {
    ($source:expr, $source_ty:ty) => {
        init_app!($source, $source_ty, film_browser::views::RenderOptions::default())
    };
    ($source:expr, $source_ty:ty, $options:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($source))
                .app_data(actix_web::web::Data::new(common::templates()))
                .app_data(actix_web::web::Data::new($options))
                .configure(film_browser::routes::configure::<$source_ty>),
        )
        .await
    };
}

/// Issues a GET and returns the status with the body as text.
macro_rules! get_body {
    ($app:expr, $uri:expr) => {{
        let req = actix_web::test::TestRequest::get().uri($uri).to_request();
        let resp = actix_web::test::call_service($app, req).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }};
}

pub fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates parse")
}

pub fn id(value: i64) -> EntityId {
    EntityId::new(value).expect("valid id")
}

pub fn person(value: i64, name: &str, movies: &[&str]) -> Person {
    Person {
        id: id(value),
        name: name.to_string(),
        movies: movies.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn movie(value: i64, title: &str, time: u32, genres: &[&str]) -> Movie {
    Movie {
        id: id(value),
        title: title.to_string(),
        time,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// Source standing in for an unreachable API.
#[derive(Debug)]
pub struct DownCatalog;

impl CatalogSource for DownCatalog {
    async fn fetch_movies(&self) -> SourceResult<Vec<MovieSummary>> {
        Err(SourceError::Request("connection refused".to_string()))
    }

    async fn fetch_movie(&self, _id: EntityId) -> SourceResult<Movie> {
        Err(SourceError::Request("connection refused".to_string()))
    }

    async fn fetch_people(&self, _role: PersonRole) -> SourceResult<Vec<Person>> {
        Err(SourceError::Request("connection refused".to_string()))
    }
}

/// Position of `needle` in `body`, panicking with context when missing.
pub fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in:\n{body}"))
}
