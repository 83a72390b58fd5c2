//! Domain aggregates exposed by the garage service layer.

pub mod client;
pub mod dossier;
pub mod garage;
pub mod planning;
pub mod types;
pub mod vehicle;
