//! Event management service: centres, events and tickets behind a paginated
//! JSON API.
//!
//! The `data` feature builds the domain, persistence and pagination layers on
//! their own; `server` adds services, routes and the Actix-Web entry point.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure_api, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool_with;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::event_centres::{add_centre, list_centres, show_centre};
    use crate::routes::events::{add_event, book_centre, list_events, show_event};
    use crate::routes::tickets::{
        issue_ticket, list_event_tickets, list_organizer_tickets, show_ticket,
    };

    /// Registers every `/api` endpoint. The application must provide a
    /// `web::Data<DieselRepository>`.
    pub fn configure_api(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api")
                .service(list_centres)
                .service(add_centre)
                .service(show_centre)
                .service(list_events)
                .service(add_event)
                .service(show_event)
                .service(book_centre)
                .service(list_event_tickets)
                .service(issue_ticket)
                .service(show_ticket)
                .service(list_organizer_tickets),
        );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool_with(
            &server_config.database_url,
            &server_config.pool_options(),
        )
        .map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);
        let bind_address = (server_config.address.clone(), server_config.port);

        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(repo.clone()))
                .configure(configure_api)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
