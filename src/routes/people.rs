use actix_web::{HttpResponse, Responder, web};
use tera::Tera;

use crate::domain::person::PersonRole;
use crate::routes::render_page;
use crate::services::load_people_page;
use crate::source::CatalogSource;
use crate::views::RenderOptions;

pub async fn show_actors<S>(
    source: web::Data<S>,
    tera: web::Data<Tera>,
    options: web::Data<RenderOptions>,
) -> impl Responder
where
    S: CatalogSource + 'static,
{
    show_people(PersonRole::Actor, source.get_ref(), tera.get_ref(), **options).await
}

pub async fn show_directors<S>(
    source: web::Data<S>,
    tera: web::Data<Tera>,
    options: web::Data<RenderOptions>,
) -> impl Responder
where
    S: CatalogSource + 'static,
{
    show_people(PersonRole::Director, source.get_ref(), tera.get_ref(), **options).await
}

async fn show_people<S>(
    role: PersonRole,
    source: &S,
    tera: &Tera,
    options: RenderOptions,
) -> HttpResponse
where
    S: CatalogSource,
{
    let view = load_people_page(source, role).await;
    render_page(view.page().template, view.render(tera, options))
}
