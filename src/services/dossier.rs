//! Dossier listing and deletion.
//!
//! The repository hands back dossiers in the shape of a relational join: a
//! list of vehicles per dossier and a list of clients per vehicle. Callers of
//! this module only ever see [`DossierListItem`] values where both relations
//! have been collapsed to at most one record.

use crate::domain::dossier::{DossierListItem, DossierRow, DossierStatus};
use crate::domain::types::DossierId;
use crate::dto::dossier::{DossierCard, IndexPageData};
use crate::repository::{DossierListQuery, DossierReader, DossierWriter};
use crate::services::ServiceResult;

/// Returns the flattened dossiers matching `query`, most recent first.
pub fn list_dossiers<R>(repo: &R, query: &DossierListQuery) -> ServiceResult<Vec<DossierListItem>>
where
    R: DossierReader + ?Sized,
{
    let rows = repo.list_dossier_rows(query).map_err(|err| {
        log::error!("Failed to list dossiers: {err}");
        err
    })?;

    Ok(rows.into_iter().map(flatten_row).collect())
}

/// Deletes one dossier. `Ok(true)` means the store reported no error.
pub fn delete_dossier<R>(repo: &R, id: DossierId) -> ServiceResult<bool>
where
    R: DossierWriter + ?Sized,
{
    repo.delete_dossier(id).map_err(|err| {
        log::error!("Failed to delete dossier {id}: {err}");
        err
    })?;

    Ok(true)
}

/// Projects the listing into display cards, skipping incomplete dossiers.
pub fn list_dossier_cards<R>(repo: &R, query: &DossierListQuery) -> ServiceResult<IndexPageData>
where
    R: DossierReader + ?Sized,
{
    let items = list_dossiers(repo, query)?;
    let cards: Vec<DossierCard> = items.iter().filter_map(DossierCard::from_item).collect();
    let incomplete = items.len() - cards.len();

    Ok(IndexPageData { cards, incomplete })
}

/// Collapses the joined relations of a row into a flat list item.
pub fn flatten_row(row: DossierRow) -> DossierListItem {
    let DossierRow {
        id,
        problem,
        status,
        estimated_price,
        scheduled_on,
        created_at,
        vehicles,
    } = row;

    if vehicles.len() > 1 {
        log::warn!(
            "Dossier {id} joined {} vehicles; keeping the first one",
            vehicles.len()
        );
    }

    let (vehicle, client) = match vehicles.into_iter().next() {
        Some(joined) => {
            if joined.clients.len() > 1 {
                log::warn!(
                    "Vehicle {} of dossier {id} joined {} clients; keeping the first one",
                    joined.vehicle.id,
                    joined.clients.len()
                );
            }
            let client = joined.clients.into_iter().next();
            (Some(joined.vehicle), client)
        }
        None => (None, None),
    };

    let status = status.parse::<DossierStatus>().unwrap_or_else(|err| {
        log::warn!("Dossier {id} has {err}; treating it as pending");
        DossierStatus::default()
    });

    DossierListItem {
        id,
        problem,
        status,
        estimated_price,
        scheduled_on,
        created_at,
        vehicle,
        client,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::client::Client;
    use crate::domain::dossier::VehicleRow;
    use crate::domain::types::{ClientId, GarageId, VehicleId};
    use crate::domain::vehicle::Vehicle;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn client(id: i32, name: &str) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            garage_id: GarageId::new(1).unwrap(),
            name: name.to_string(),
            phone: None,
            email: None,
            created_at: at(1),
        }
    }

    fn vehicle(id: i32, client_id: i32) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id).unwrap(),
            client_id: ClientId::new(client_id).unwrap(),
            brand: "Ford".to_string(),
            model: "Fiesta".to_string(),
            plate: None,
        }
    }

    fn row(id: i32, status: &str, vehicles: Vec<VehicleRow>) -> DossierRow {
        DossierRow {
            id: DossierId::new(id).unwrap(),
            problem: "check engine light".to_string(),
            status: status.to_string(),
            estimated_price: Some(90.0),
            scheduled_on: None,
            created_at: at(12),
            vehicles,
        }
    }

    #[test]
    fn flatten_keeps_single_vehicle_and_client() {
        let item = flatten_row(row(
            1,
            "in_progress",
            vec![VehicleRow {
                vehicle: vehicle(4, 7),
                clients: vec![client(7, "Ana")],
            }],
        ));

        assert_eq!(item.status, DossierStatus::InProgress);
        assert_eq!(item.vehicle.map(|v| v.id.get()), Some(4));
        assert_eq!(item.client.map(|c| c.name), Some("Ana".to_string()));
        assert_eq!(item.estimated_price, Some(90.0));
    }

    #[test]
    fn flatten_without_vehicle_yields_null_relations() {
        let item = flatten_row(row(2, "pending", vec![]));

        assert_eq!(item.vehicle, None);
        assert_eq!(item.client, None);
    }

    #[test]
    fn flatten_vehicle_without_client_keeps_vehicle() {
        let item = flatten_row(row(
            3,
            "done",
            vec![VehicleRow {
                vehicle: vehicle(4, 7),
                clients: vec![],
            }],
        ));

        assert!(item.vehicle.is_some());
        assert_eq!(item.client, None);
    }

    #[test]
    fn flatten_takes_first_of_many() {
        let item = flatten_row(row(
            4,
            "done",
            vec![
                VehicleRow {
                    vehicle: vehicle(4, 7),
                    clients: vec![client(7, "Ana"), client(8, "Bruno")],
                },
                VehicleRow {
                    vehicle: vehicle(5, 8),
                    clients: vec![client(8, "Bruno")],
                },
            ],
        ));

        assert_eq!(item.vehicle.map(|v| v.id.get()), Some(4));
        assert_eq!(item.client.map(|c| c.name), Some("Ana".to_string()));
    }

    #[test]
    fn flatten_maps_unknown_status_to_pending() {
        let item = flatten_row(row(5, "waiting_parts", vec![]));
        assert_eq!(item.status, DossierStatus::Pending);
    }
}
