use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, GarageId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub garage_id: GarageId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Figures derived from a client's dossiers. Never persisted.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct ClientStats {
    pub dossier_count: usize,
    pub last_activity: Option<NaiveDateTime>,
}

impl ClientStats {
    pub fn from_dossier_dates(dates: &[NaiveDateTime]) -> Self {
        Self {
            dossier_count: dates.len(),
            last_activity: dates.iter().max().copied(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub garage_id: GarageId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl NewClient {
    pub fn try_new(
        garage_id: GarageId,
        name: impl Into<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            garage_id,
            name,
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
