#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use garage_desk::db::{DbPool, establish_connection_pool};
use garage_desk::domain::client::{Client, NewClient};
use garage_desk::domain::garage::{Garage, NewGarage};
use garage_desk::domain::vehicle::{NewVehicle, Vehicle};
use garage_desk::repository::{ClientWriter, DieselRepository, GarageWriter, VehicleWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Temporary SQLite database with every migration applied.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

/// A garage with one client owning one vehicle.
pub struct Fixture {
    pub garage: Garage,
    pub client: Client,
    pub vehicle: Vehicle,
}

pub fn seed(repo: &DieselRepository, garage_name: &str, client_name: &str) -> Fixture {
    let garage = repo
        .create_garage(&NewGarage::try_new(garage_name).unwrap())
        .unwrap();
    let client = repo
        .create_client(
            &NewClient::try_new(garage.id, client_name, Some("0102030405".into()), None).unwrap(),
        )
        .unwrap();
    let vehicle = repo
        .create_vehicle(
            &NewVehicle::try_new(client.id, "Renault", "Clio", Some("AB-123-CD".into())).unwrap(),
        )
        .unwrap();

    Fixture {
        garage,
        client,
        vehicle,
    }
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
