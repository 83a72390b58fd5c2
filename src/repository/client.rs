use std::collections::HashMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient},
        garage::{Garage, NewGarage},
        types::GarageId,
        vehicle::{NewVehicle, Vehicle},
    },
    models::{
        client::{Client as DbClient, NewClient as DbNewClient},
        garage::{Garage as DbGarage, NewGarage as DbNewGarage},
        vehicle::{NewVehicle as DbNewVehicle, Vehicle as DbVehicle},
    },
    repository::{
        ClientReader, ClientWriter, DieselRepository, GarageWriter, VehicleWriter,
        errors::RepositoryResult,
    },
    schema::{clients, dossiers, garages, vehicles},
};

impl ClientReader for DieselRepository {
    fn list_client_activity(
        &self,
        garage_id: GarageId,
    ) -> RepositoryResult<Vec<(Client, Vec<NaiveDateTime>)>> {
        let mut conn = self.conn()?;

        let client_rows = clients::table
            .filter(clients::garage_id.eq(garage_id.get()))
            .order(clients::name.asc())
            .load::<DbClient>(&mut conn)?;

        // (client_id, dossier created_at) for every dossier of the garage.
        let activity: Vec<(i32, NaiveDateTime)> = dossiers::table
            .inner_join(vehicles::table.inner_join(clients::table))
            .filter(clients::garage_id.eq(garage_id.get()))
            .select((clients::id, dossiers::created_at))
            .load(&mut conn)?;

        let mut dates_by_client: HashMap<i32, Vec<NaiveDateTime>> = HashMap::new();
        for (client_id, created_at) in activity {
            dates_by_client.entry(client_id).or_default().push(created_at);
        }

        client_rows
            .into_iter()
            .map(|client| -> RepositoryResult<(Client, Vec<NaiveDateTime>)> {
                let dates = dates_by_client.remove(&client.id).unwrap_or_default();
                Ok((Client::try_from(client)?, dates))
            })
            .collect()
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(created)?)
    }
}

impl GarageWriter for DieselRepository {
    fn create_garage(&self, new_garage: &NewGarage) -> RepositoryResult<Garage> {
        let mut conn = self.conn()?;

        let insertable: DbNewGarage = new_garage.into();
        let created = diesel::insert_into(garages::table)
            .values(&insertable)
            .get_result::<DbGarage>(&mut conn)?;

        Ok(Garage::try_from(created)?)
    }
}

impl VehicleWriter for DieselRepository {
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle> {
        let mut conn = self.conn()?;

        let insertable: DbNewVehicle = new_vehicle.into();
        let created = diesel::insert_into(vehicles::table)
            .values(&insertable)
            .get_result::<DbVehicle>(&mut conn)?;

        Ok(Vehicle::try_from(created)?)
    }
}
