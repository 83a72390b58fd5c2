//! Mock repository implementations for isolating services in tests.

use chrono::{NaiveDate, NaiveDateTime};
use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::dossier::{Dossier, DossierRow, NewDossier};
use crate::domain::garage::{Garage, NewGarage};
use crate::domain::types::{DossierId, GarageId};
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, DossierListQuery, DossierReader, DossierWriter, GarageWriter,
    VehicleWriter,
};

mock! {
    pub Repository {}

    impl DossierReader for Repository {
        fn list_dossier_rows(&self, query: &DossierListQuery) -> RepositoryResult<Vec<DossierRow>>;
        fn get_dossier_by_id(&self, id: DossierId) -> RepositoryResult<Option<Dossier>>;
    }

    impl DossierWriter for Repository {
        fn create_dossier(&self, new_dossier: &NewDossier) -> RepositoryResult<Dossier>;
        fn delete_dossier(&self, id: DossierId) -> RepositoryResult<()>;
        fn schedule_dossier(
            &self,
            id: DossierId,
            day: Option<NaiveDate>,
        ) -> RepositoryResult<Dossier>;
    }

    impl ClientReader for Repository {
        fn list_client_activity(
            &self,
            garage_id: GarageId,
        ) -> RepositoryResult<Vec<(Client, Vec<NaiveDateTime>)>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }

    impl GarageWriter for Repository {
        fn create_garage(&self, new_garage: &NewGarage) -> RepositoryResult<Garage>;
    }

    impl VehicleWriter for Repository {
        fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
    }
}
