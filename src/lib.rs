#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::repository::memory::DossierStore;
    use crate::routes::assistant::api_v1_assistant;
    use crate::routes::client::{api_v1_clients, show_clients};
    use crate::routes::dossier::{api_v1_delete_dossier, api_v1_dossiers, delete_dossier};
    use crate::routes::local::{
        api_v1_add_local_dossier, api_v1_local_dossier, api_v1_local_dossiers,
    };
    use crate::routes::main::show_index;
    use crate::routes::planning::{api_v1_planning_drop, show_planning};
    use crate::services::relay::WorkflowRelay;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);
        let store = DossierStore::new();
        let relay = WorkflowRelay::new(server_config.webhook_url.clone());

        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;
        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{}, relaying assistant to {}",
            bind_address.0,
            bind_address.1,
            relay.webhook_url()
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(
                    web::scope("/api")
                        .service(api_v1_dossiers)
                        .service(api_v1_delete_dossier)
                        .service(api_v1_clients)
                        .service(api_v1_planning_drop)
                        .service(api_v1_assistant)
                        .service(api_v1_local_dossiers)
                        .service(api_v1_local_dossier)
                        .service(api_v1_add_local_dossier),
                )
                .service(show_index)
                .service(delete_dossier)
                .service(show_clients)
                .service(show_planning)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(store.clone()))
                .app_data(web::Data::new(relay.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
