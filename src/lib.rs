//! Server-rendered browser front-end for a movie catalog API.
//!
//! Every page follows the same lifecycle: mount a view with an empty state,
//! fetch its collection (or single movie) once from the injected catalog
//! source, and render one keyed card per entity.

pub mod domain;
pub mod source;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod views;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::routes;
    use crate::source::catalog::Catalog;
    use crate::views::RenderOptions;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog source or templates cannot be set up,
    /// or the server fails to bind.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let catalog = Catalog::from_config(&server_config).map_err(|e| {
            std::io::Error::other(format!("Failed to set up catalog source: {e}"))
        })?;
        let catalog = web::Data::new(catalog);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let options = RenderOptions {
            show_load_errors: server_config.show_load_errors,
        };

        let assets_dir = server_config.assets_dir.clone();
        let bind_address = (server_config.address.clone(), server_config.port);

        log::info!(
            "Serving catalog from {} ({:?} source) on {}:{}",
            server_config.api_base_url,
            server_config.source,
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &assets_dir))
                .app_data(catalog.clone())
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(options))
                .configure(routes::configure::<Catalog>)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
