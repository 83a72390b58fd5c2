//! DTO modules that bridge services with templates and APIs.

pub mod client;
pub mod dossier;
pub mod planning;
pub mod relay;
