use actix_web::{Responder, web};
use tera::Tera;

use crate::routes::render_page;
use crate::services::load_movies_page;
use crate::source::CatalogSource;
use crate::views::RenderOptions;

pub async fn show_index<S>(
    source: web::Data<S>,
    tera: web::Data<Tera>,
    options: web::Data<RenderOptions>,
) -> impl Responder
where
    S: CatalogSource + 'static,
{
    let view = load_movies_page(source.get_ref()).await;
    render_page(view.page().template, view.render(&tera, **options))
}
