//! Integration tests for SeaOrmSensorRepository
//!
//! Each test runs against its own in-memory SQLite database created with the
//! same schema routine the server uses at startup.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use domain::sensor::{NewSensorReading, SensorKind, SensorRepository};
use domain::{VehicleSerial, VehicleStatusRepository};
use infrastructure::config::DatabaseConfig;
use infrastructure::database;
use infrastructure::{SeaOrmSensorRepository, SeaOrmVehicleStatusRepository};
use sea_orm::DatabaseConnection;

/// Helper to create an isolated test database
async fn create_test_db() -> DatabaseConnection {
    database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database")
}

fn serial(s: &str) -> VehicleSerial {
    VehicleSerial::new(s).unwrap()
}

fn at(offset_us: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap() + TimeDelta::microseconds(offset_us)
}

fn new_reading(vehicle: &str, kind: SensorKind, value: f64, offset_us: i64) -> NewSensorReading {
    NewSensorReading::new(serial(vehicle), kind, value, at(offset_us))
}

#[tokio::test]
async fn test_insert_and_get_all_returns_exact_record() {
    let repo = SeaOrmSensorRepository::new(create_test_db().await);
    let reading = new_reading("V123", SensorKind::Temperature, 23.5, 123_456);

    let stored = repo.insert(reading.clone()).await.expect("Failed to insert");
    assert!(stored.id > 0);
    assert!(stored.matches(&reading));

    let all = repo
        .get_all_for_vehicle(&serial("V123"))
        .await
        .expect("Failed to fetch");

    assert_eq!(all.len(), 1);
    assert_eq!(all[0], stored);
    assert_eq!(all[0].timestamp, at(123_456));
}

#[tokio::test]
async fn test_unregistered_vehicle_can_report() {
    let db = create_test_db().await;
    let sensors = SeaOrmSensorRepository::new(db.clone());
    let statuses = SeaOrmVehicleStatusRepository::new(db);

    sensors
        .insert(new_reading("GHOST", SensorKind::Fuel, 12.0, 0))
        .await
        .expect("Insert should not require registration");

    assert!(!statuses.exists(&serial("GHOST")).await.unwrap());
    assert_eq!(
        sensors.get_all_for_vehicle(&serial("GHOST")).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_duplicate_readings_are_all_kept() {
    let repo = SeaOrmSensorRepository::new(create_test_db().await);
    let reading = new_reading("V1", SensorKind::Weight, 700.0, 0);

    let first = repo.insert(reading.clone()).await.unwrap();
    let second = repo.insert(reading.clone()).await.unwrap();
    assert_ne!(first.id, second.id);

    let all = repo.get_all_for_vehicle(&serial("V1")).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|r| r.matches(&reading)));
}

#[tokio::test]
async fn test_get_all_is_in_insertion_order_and_scoped_to_vehicle() {
    let repo = SeaOrmSensorRepository::new(create_test_db().await);

    repo.insert(new_reading("V1", SensorKind::Temperature, 1.0, 30)).await.unwrap();
    repo.insert(new_reading("V2", SensorKind::Temperature, 2.0, 20)).await.unwrap();
    repo.insert(new_reading("V1", SensorKind::Fuel, 3.0, 10)).await.unwrap();

    let values: Vec<f64> = repo
        .get_all_for_vehicle(&serial("V1"))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.value)
        .collect();

    assert_eq!(values, vec![1.0, 3.0]);
}

#[tokio::test]
async fn test_filter_by_kind_never_returns_other_kinds() {
    let repo = SeaOrmSensorRepository::new(create_test_db().await);

    for (i, kind) in SensorKind::ALL.iter().cycle().take(9).enumerate() {
        repo.insert(new_reading("V1", *kind, i as f64, i as i64))
            .await
            .unwrap();
    }

    for kind in SensorKind::ALL {
        let readings = repo
            .get_for_vehicle_and_kind(&serial("V1"), kind)
            .await
            .unwrap();
        assert_eq!(readings.len(), 3);
        assert!(readings.iter().all(|r| r.sensor_kind == kind));
    }
}

#[tokio::test]
async fn test_unknown_vehicle_yields_empty_results() {
    let repo = SeaOrmSensorRepository::new(create_test_db().await);

    let all = repo.get_all_for_vehicle(&serial("NEVER")).await.unwrap();
    assert!(all.is_empty());

    let some = repo
        .get_for_vehicle_and_kind(&serial("NEVER"), SensorKind::Fuel)
        .await
        .unwrap();
    assert!(some.is_empty());
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let db = create_test_db().await;
    let repo = SeaOrmSensorRepository::new(db.clone());
    repo.insert(new_reading("V1", SensorKind::Fuel, 50.0, 0)).await.unwrap();

    database::create_schema(&db).await.expect("Second schema run failed");

    assert_eq!(repo.get_all_for_vehicle(&serial("V1")).await.unwrap().len(), 1);
}
