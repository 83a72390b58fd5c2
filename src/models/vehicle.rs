use diesel::prelude::*;

use crate::domain::{
    types::{ClientId, TypeConstraintError, VehicleId},
    vehicle::{NewVehicle as DomainNewVehicle, Vehicle as DomainVehicle},
};
use crate::models::client::Client;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Client, foreign_key = client_id))]
#[diesel(table_name = crate::schema::vehicles)]
/// Diesel model for [`crate::domain::vehicle::Vehicle`].
pub struct Vehicle {
    pub id: i32,
    pub client_id: i32,
    pub brand: String,
    pub model: String,
    pub plate: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vehicles)]
pub struct NewVehicle<'a> {
    pub client_id: i32,
    pub brand: &'a str,
    pub model: &'a str,
    pub plate: Option<&'a str>,
}

impl TryFrom<Vehicle> for DomainVehicle {
    type Error = TypeConstraintError;

    fn try_from(vehicle: Vehicle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VehicleId::new(vehicle.id)?,
            client_id: ClientId::new(vehicle.client_id)?,
            brand: vehicle.brand,
            model: vehicle.model,
            plate: vehicle.plate,
        })
    }
}

impl<'a> From<&'a DomainNewVehicle> for NewVehicle<'a> {
    fn from(vehicle: &'a DomainNewVehicle) -> Self {
        Self {
            client_id: vehicle.client_id.get(),
            brand: vehicle.brand.as_str(),
            model: vehicle.model.as_str(),
            plate: vehicle.plate.as_deref(),
        }
    }
}
