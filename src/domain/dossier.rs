use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::types::{DossierId, TypeConstraintError, VehicleId};
use crate::domain::vehicle::Vehicle;

/// Workflow state of a repair dossier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DossierStatus {
    InProgress,
    #[default]
    Pending,
    Done,
}

impl DossierStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            DossierStatus::InProgress => "in_progress",
            DossierStatus::Pending => "pending",
            DossierStatus::Done => "done",
        }
    }
}

impl Display for DossierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DossierStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(DossierStatus::InProgress),
            "pending" => Ok(DossierStatus::Pending),
            "done" => Ok(DossierStatus::Done),
            other => Err(TypeConstraintError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "partial" => Ok(PaymentStatus::Partial),
            "paid" => Ok(PaymentStatus::Paid),
            other => Err(TypeConstraintError::InvalidPaymentStatus(other.to_string())),
        }
    }
}

/// A repair case tracked for a vehicle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dossier {
    pub id: DossierId,
    pub vehicle_id: Option<VehicleId>,
    pub problem: String,
    pub status: DossierStatus,
    pub estimated_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
    pub scheduled_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDossier {
    pub vehicle_id: VehicleId,
    pub problem: String,
    pub status: DossierStatus,
    pub estimated_price: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl NewDossier {
    #[must_use]
    pub fn new(
        vehicle_id: VehicleId,
        problem: impl Into<String>,
        status: DossierStatus,
        estimated_price: Option<f64>,
    ) -> Self {
        Self {
            vehicle_id,
            problem: problem.into().trim().to_string(),
            status,
            estimated_price: estimated_price.filter(|p| p.is_finite()),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Overrides the creation timestamp, mostly for imports and tests.
    #[must_use]
    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Vehicle side of a joined dossier query, together with its joined clients.
///
/// The relational join may hand back several clients even though a vehicle
/// has exactly one owner; the list is kept as-is here and collapsed by the
/// service layer.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRow {
    pub vehicle: Vehicle,
    pub clients: Vec<Client>,
}

/// Dossier exactly as returned by the joined query, status still unparsed.
#[derive(Clone, Debug, PartialEq)]
pub struct DossierRow {
    pub id: DossierId,
    pub problem: String,
    pub status: String,
    pub estimated_price: Option<f64>,
    pub scheduled_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub vehicles: Vec<VehicleRow>,
}

/// Flattened dossier record handed to callers of the listing.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DossierListItem {
    pub id: DossierId,
    pub problem: String,
    pub status: DossierStatus,
    pub estimated_price: Option<f64>,
    pub scheduled_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub vehicle: Option<Vehicle>,
    pub client: Option<Client>,
}
