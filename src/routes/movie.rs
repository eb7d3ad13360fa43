use actix_web::{Responder, web};
use tera::Tera;

use crate::routes::render_page;
use crate::services::load_movie_page;
use crate::source::CatalogSource;
use crate::views::{DetailPage, RenderOptions};

pub async fn show_movie<S>(
    movie_id: web::Path<String>,
    source: web::Data<S>,
    tera: web::Data<Tera>,
    options: web::Data<RenderOptions>,
) -> impl Responder
where
    S: CatalogSource + 'static,
{
    let view = load_movie_page(source.get_ref(), &movie_id).await;
    render_page(DetailPage::MOVIE.template, view.render(&tera, **options))
}
