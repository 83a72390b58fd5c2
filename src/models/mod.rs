//! Diesel models mapping database rows to domain entities.

pub mod client;
pub mod config;
pub mod dossier;
pub mod garage;
pub mod vehicle;
