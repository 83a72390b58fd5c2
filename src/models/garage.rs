use diesel::prelude::*;

use crate::domain::{
    garage::{Garage as DomainGarage, NewGarage as DomainNewGarage},
    types::{GarageId, TypeConstraintError},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::garages)]
/// Diesel model for [`crate::domain::garage::Garage`].
pub struct Garage {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::garages)]
pub struct NewGarage<'a> {
    pub name: &'a str,
}

impl TryFrom<Garage> for DomainGarage {
    type Error = TypeConstraintError;

    fn try_from(garage: Garage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GarageId::new(garage.id)?,
            name: garage.name,
        })
    }
}

impl<'a> From<&'a DomainNewGarage> for NewGarage<'a> {
    fn from(garage: &'a DomainNewGarage) -> Self {
        Self {
            name: garage.name.as_str(),
        }
    }
}
