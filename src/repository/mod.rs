use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        client::{Client, NewClient},
        dossier::{Dossier, DossierRow, NewDossier},
        garage::{Garage, NewGarage},
        types::{DossierId, GarageId},
        vehicle::{NewVehicle, Vehicle},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod dossier;
pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Filters applied to the joined dossier listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DossierListQuery {
    pub garage_id: Option<GarageId>,
    /// Inclusive range of `scheduled_on` dates.
    pub scheduled_between: Option<(NaiveDate, NaiveDate)>,
}

impl DossierListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn garage(mut self, garage_id: GarageId) -> Self {
        self.garage_id = Some(garage_id);
        self
    }

    pub fn scheduled_between(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        self.scheduled_between = Some((first, last));
        self
    }
}

pub trait DossierReader {
    /// Dossiers joined with their vehicles and clients, most recent first.
    fn list_dossier_rows(&self, query: &DossierListQuery) -> RepositoryResult<Vec<DossierRow>>;
    fn get_dossier_by_id(&self, id: DossierId) -> RepositoryResult<Option<Dossier>>;
}

pub trait DossierWriter {
    fn create_dossier(&self, new_dossier: &NewDossier) -> RepositoryResult<Dossier>;
    fn delete_dossier(&self, id: DossierId) -> RepositoryResult<()>;
    fn schedule_dossier(&self, id: DossierId, day: Option<NaiveDate>) -> RepositoryResult<Dossier>;
}

pub trait ClientReader {
    /// Clients of a garage paired with the creation dates of their dossiers.
    fn list_client_activity(
        &self,
        garage_id: GarageId,
    ) -> RepositoryResult<Vec<(Client, Vec<NaiveDateTime>)>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

pub trait GarageWriter {
    fn create_garage(&self, new_garage: &NewGarage) -> RepositoryResult<Garage>;
}

pub trait VehicleWriter {
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
}

/// Diesel-backed repository shared by every handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
