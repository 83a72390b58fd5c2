//! Client views with their derived statistics.

use serde::Serialize;

use crate::domain::client::{Client, ClientStats};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientSummary {
    #[serde(flatten)]
    pub client: Client,
    pub stats: ClientStats,
}
