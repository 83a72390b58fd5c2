use chrono::NaiveDateTime;

use crate::domain::client::{Client, ClientStats};
use crate::domain::types::GarageId;
use crate::dto::client::ClientSummary;
use crate::repository::ClientReader;
use crate::services::ServiceResult;

/// Lists the garage's clients with dossier count and last activity.
pub fn list_clients<R>(repo: &R, garage_id: GarageId) -> ServiceResult<Vec<ClientSummary>>
where
    R: ClientReader + ?Sized,
{
    let activity = repo.list_client_activity(garage_id).map_err(|err| {
        log::error!("Failed to list clients of garage {garage_id}: {err}");
        err
    })?;

    Ok(activity.into_iter().map(summarize).collect())
}

fn summarize((client, dates): (Client, Vec<NaiveDateTime>)) -> ClientSummary {
    ClientSummary {
        stats: ClientStats::from_dossier_dates(&dates),
        client,
    }
}
