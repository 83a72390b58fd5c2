use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TypeConstraintError, VehicleId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub client_id: ClientId,
    pub brand: String,
    pub model: String,
    pub plate: Option<String>,
}

impl Vehicle {
    /// Human readable label, e.g. `Renault Clio (AB-123-CD)`.
    pub fn label(&self) -> String {
        let name = format!("{} {}", self.brand, self.model);
        let name = name.trim();
        match self.plate.as_deref() {
            Some(plate) => format!("{name} ({plate})"),
            None => name.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVehicle {
    pub client_id: ClientId,
    pub brand: String,
    pub model: String,
    pub plate: Option<String>,
}

impl NewVehicle {
    pub fn try_new(
        client_id: ClientId,
        brand: impl Into<String>,
        model: impl Into<String>,
        plate: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let brand = brand.into().trim().to_string();
        if brand.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            client_id,
            brand,
            model: model.into().trim().to_string(),
            plate: plate
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
        })
    }
}
