//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// SQLite database holding garages, clients, vehicles and dossiers.
    pub database_url: String,
    /// Outbound workflow-automation webhook used by the assistant relay.
    pub webhook_url: String,
    pub templates_dir: String,
    /// Flash-message cookie key material, at least 64 bytes.
    pub secret: String,
}
