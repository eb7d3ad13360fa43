//! HTTP routes of the catalog front-end.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::source::CatalogSource;

pub mod main;
pub mod movie;
pub mod people;

/// Registers every page route for the catalog source `S`.
///
/// The source, a `tera::Tera` and a `RenderOptions` must be registered as
/// app data.
pub fn configure<S>(cfg: &mut web::ServiceConfig)
where
    S: CatalogSource + 'static,
{
    cfg.route("/", web::get().to(main::show_index::<S>))
        .route("/movie/{id}", web::get().to(movie::show_movie::<S>))
        .route("/actors", web::get().to(people::show_actors::<S>))
        .route("/directors", web::get().to(people::show_directors::<S>));
}

/// Turns a rendered page into a response, answering 500 on template errors.
pub fn render_page(template: &str, rendered: tera::Result<String>) -> HttpResponse {
    match rendered {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
