use std::collections::HashMap;

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    domain::{
        client::Client,
        dossier::{Dossier, DossierRow, NewDossier, VehicleRow},
        types::DossierId,
        vehicle::Vehicle,
    },
    models::{
        client::Client as DbClient,
        dossier::{Dossier as DbDossier, NewDossier as DbNewDossier},
        vehicle::Vehicle as DbVehicle,
    },
    repository::{
        DieselRepository, DossierListQuery, DossierReader, DossierWriter,
        errors::RepositoryResult,
    },
    schema::{clients, dossiers, vehicles},
};

impl DossierReader for DieselRepository {
    fn list_dossier_rows(&self, query: &DossierListQuery) -> RepositoryResult<Vec<DossierRow>> {
        let mut conn = self.conn()?;

        let mut items = dossiers::table.into_boxed();

        if let Some(garage_id) = query.garage_id {
            let garage_vehicle_ids: Vec<i32> = vehicles::table
                .inner_join(clients::table)
                .filter(clients::garage_id.eq(garage_id.get()))
                .select(vehicles::id)
                .load(&mut conn)?;
            items = items.filter(
                dossiers::vehicle_id
                    .assume_not_null()
                    .eq_any(garage_vehicle_ids),
            );
        }

        if let Some((first, last)) = query.scheduled_between {
            items = items.filter(
                dossiers::scheduled_on
                    .assume_not_null()
                    .between(first, last),
            );
        }

        let dossier_rows = items
            .order((dossiers::created_at.desc(), dossiers::id.desc()))
            .load::<DbDossier>(&mut conn)?;

        let vehicle_ids: Vec<i32> = dossier_rows.iter().filter_map(|d| d.vehicle_id).collect();
        let vehicle_rows = vehicles::table
            .filter(vehicles::id.eq_any(vehicle_ids))
            .select(DbVehicle::as_select())
            .load::<DbVehicle>(&mut conn)?;

        let client_ids: Vec<i32> = vehicle_rows.iter().map(|v| v.client_id).collect();
        let client_rows = clients::table
            .filter(clients::id.eq_any(client_ids))
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        let mut clients_by_id: HashMap<i32, Vec<Client>> = HashMap::new();
        for client in client_rows {
            let id = client.id;
            clients_by_id
                .entry(id)
                .or_default()
                .push(Client::try_from(client)?);
        }

        let mut vehicles_by_id: HashMap<i32, Vec<VehicleRow>> = HashMap::new();
        for vehicle in vehicle_rows {
            let id = vehicle.id;
            let clients = clients_by_id
                .get(&vehicle.client_id)
                .cloned()
                .unwrap_or_default();
            vehicles_by_id.entry(id).or_default().push(VehicleRow {
                vehicle: Vehicle::try_from(vehicle)?,
                clients,
            });
        }

        dossier_rows
            .into_iter()
            .map(|dossier| -> RepositoryResult<DossierRow> {
                let vehicles = dossier
                    .vehicle_id
                    .and_then(|id| vehicles_by_id.get(&id).cloned())
                    .unwrap_or_default();
                Ok(DossierRow {
                    id: DossierId::new(dossier.id)?,
                    problem: dossier.problem,
                    status: dossier.status,
                    estimated_price: dossier.estimated_price,
                    scheduled_on: dossier.scheduled_on,
                    created_at: dossier.created_at,
                    vehicles,
                })
            })
            .collect()
    }

    fn get_dossier_by_id(&self, id: DossierId) -> RepositoryResult<Option<Dossier>> {
        let mut conn = self.conn()?;

        let dossier = dossiers::table
            .find(id.get())
            .select(DbDossier::as_select())
            .first::<DbDossier>(&mut conn)
            .optional()?;

        Ok(dossier.map(Dossier::try_from).transpose()?)
    }
}

impl DossierWriter for DieselRepository {
    fn create_dossier(&self, new_dossier: &NewDossier) -> RepositoryResult<Dossier> {
        let mut conn = self.conn()?;

        let insertable: DbNewDossier = new_dossier.into();
        let created = diesel::insert_into(dossiers::table)
            .values(&insertable)
            .get_result::<DbDossier>(&mut conn)?;

        Ok(Dossier::try_from(created)?)
    }

    fn delete_dossier(&self, id: DossierId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::delete(dossiers::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }

    fn schedule_dossier(&self, id: DossierId, day: Option<NaiveDate>) -> RepositoryResult<Dossier> {
        let mut conn = self.conn()?;

        let updated = diesel::update(dossiers::table.find(id.get()))
            .set(dossiers::scheduled_on.eq(day))
            .get_result::<DbDossier>(&mut conn)?;

        Ok(Dossier::try_from(updated)?)
    }
}
