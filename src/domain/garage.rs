use serde::{Deserialize, Serialize};

use crate::domain::types::{GarageId, TypeConstraintError};

/// Workshop owning clients, vehicles and dossiers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Garage {
    pub id: GarageId,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewGarage {
    pub name: String,
}

impl NewGarage {
    pub fn try_new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self { name })
    }
}
