//! Dossier view models rendered by the pages and the JSON API.

use serde::Serialize;

use crate::domain::dossier::{DossierListItem, DossierStatus};
use crate::domain::types::DossierId;

/// Flat card shown on the dossier list and the planning board.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DossierCard {
    pub id: DossierId,
    pub client_name: String,
    pub vehicle_label: String,
    pub problem: String,
    pub status: DossierStatus,
    pub progress: Option<String>,
}

impl DossierCard {
    /// Builds a card when both the vehicle and its owner are known.
    pub fn from_item(item: &DossierListItem) -> Option<Self> {
        let vehicle = item.vehicle.as_ref()?;
        let client = item.client.as_ref()?;

        Some(Self {
            id: item.id,
            client_name: client.name.clone(),
            vehicle_label: vehicle.label(),
            problem: item.problem.clone(),
            status: item.status,
            progress: progress_label(item.status).map(str::to_string),
        })
    }
}

fn progress_label(status: DossierStatus) -> Option<&'static str> {
    match status {
        DossierStatus::InProgress => Some("Repair underway"),
        DossierStatus::Done => Some("Ready for pickup"),
        DossierStatus::Pending => None,
    }
}

/// Context of the dossier index page.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub cards: Vec<DossierCard>,
    /// Dossiers that could not be shown as a card for lack of a vehicle/client.
    pub incomplete: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::client::Client;
    use crate::domain::types::{ClientId, GarageId, VehicleId};
    use crate::domain::vehicle::Vehicle;

    fn item(with_vehicle: bool, with_client: bool, status: DossierStatus) -> DossierListItem {
        let created_at = NaiveDate::from_ymd_opt(2026, 2, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        DossierListItem {
            id: DossierId::new(11).unwrap(),
            problem: "noisy gearbox".to_string(),
            status,
            estimated_price: Some(300.0),
            scheduled_on: None,
            created_at,
            vehicle: with_vehicle.then(|| Vehicle {
                id: VehicleId::new(2).unwrap(),
                client_id: ClientId::new(3).unwrap(),
                brand: "Citroen".to_string(),
                model: "C3".to_string(),
                plate: Some("XY-987-ZT".to_string()),
            }),
            client: with_client.then(|| Client {
                id: ClientId::new(3).unwrap(),
                garage_id: GarageId::new(1).unwrap(),
                name: "Paul Durand".to_string(),
                phone: None,
                email: None,
                created_at,
            }),
        }
    }

    #[test]
    fn card_flattens_vehicle_and_client() {
        let card = DossierCard::from_item(&item(true, true, DossierStatus::InProgress)).unwrap();
        assert_eq!(card.client_name, "Paul Durand");
        assert_eq!(card.vehicle_label, "Citroen C3 (XY-987-ZT)");
        assert_eq!(card.problem, "noisy gearbox");
        assert_eq!(card.progress.as_deref(), Some("Repair underway"));
    }

    #[test]
    fn card_requires_full_chain() {
        assert!(DossierCard::from_item(&item(false, false, DossierStatus::Pending)).is_none());
        assert!(DossierCard::from_item(&item(true, false, DossierStatus::Pending)).is_none());
    }

    #[test]
    fn pending_cards_have_no_progress_label() {
        let card = DossierCard::from_item(&item(true, true, DossierStatus::Pending)).unwrap();
        assert_eq!(card.progress, None);
    }
}
