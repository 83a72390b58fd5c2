//! Diesel models for repair dossiers.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::{
    dossier::{
        Dossier as DomainDossier, DossierStatus, NewDossier as DomainNewDossier, PaymentStatus,
    },
    types::{DossierId, TypeConstraintError, VehicleId},
};
use crate::models::vehicle::Vehicle;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Vehicle, foreign_key = vehicle_id))]
#[diesel(table_name = crate::schema::dossiers)]
pub struct Dossier {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    pub problem: String,
    pub status: String, // unknown literals read back as pending
    pub estimated_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_status: Option<String>,
    pub scheduled_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dossiers)]
pub struct NewDossier<'a> {
    pub vehicle_id: Option<i32>,
    pub problem: &'a str,
    pub status: &'a str,
    pub estimated_price: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Dossier> for DomainDossier {
    type Error = TypeConstraintError;

    fn try_from(dossier: Dossier) -> Result<Self, Self::Error> {
        let status = dossier.status.parse::<DossierStatus>().unwrap_or_else(|err| {
            log::warn!("Dossier {} has {err}; reading it as pending", dossier.id);
            DossierStatus::default()
        });
        let payment_status = dossier.payment_status.as_deref().and_then(|raw| {
            raw.parse::<PaymentStatus>()
                .inspect_err(|err| log::warn!("Dossier {} has {err}; dropping it", dossier.id))
                .ok()
        });

        Ok(Self {
            id: DossierId::new(dossier.id)?,
            vehicle_id: dossier.vehicle_id.map(VehicleId::new).transpose()?,
            problem: dossier.problem,
            status,
            estimated_price: dossier.estimated_price,
            final_price: dossier.final_price,
            payment_status,
            scheduled_on: dossier.scheduled_on,
            created_at: dossier.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewDossier> for NewDossier<'a> {
    fn from(dossier: &'a DomainNewDossier) -> Self {
        Self {
            vehicle_id: Some(dossier.vehicle_id.get()),
            problem: dossier.problem.as_str(),
            status: dossier.status.as_str(),
            estimated_price: dossier.estimated_price,
            created_at: dossier.created_at,
        }
    }
}
