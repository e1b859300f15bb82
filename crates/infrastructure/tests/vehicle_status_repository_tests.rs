//! Integration tests for SeaOrmVehicleStatusRepository

use chrono::{TimeZone, Utc};
use domain::sensor::{NewSensorReading, SensorKind, SensorRepository};
use domain::{DomainError, VehicleSerial, VehicleStatus, VehicleStatusRepository};
use infrastructure::config::DatabaseConfig;
use infrastructure::database;
use infrastructure::{SeaOrmSensorRepository, SeaOrmVehicleStatusRepository};
use sea_orm::DatabaseConnection;

async fn create_test_db() -> DatabaseConnection {
    database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database")
}

fn serial(s: &str) -> VehicleSerial {
    VehicleSerial::new(s).unwrap()
}

#[tokio::test]
async fn test_register_creates_inactive_vehicle() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);

    assert!(!repo.exists(&serial("V1")).await.unwrap());

    let record = repo.register(&serial("V1")).await.expect("Failed to register");
    assert_eq!(record.vehicle_serial, serial("V1"));
    assert_eq!(record.status, VehicleStatus::Inactive);

    assert!(repo.exists(&serial("V1")).await.unwrap());
    let fetched = repo.get_status(&serial("V1")).await.unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn test_register_twice_is_a_duplicate() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);

    repo.register(&serial("V1")).await.expect("First registration failed");
    let second = repo.register(&serial("V1")).await;

    assert_eq!(
        second,
        Err(DomainError::VehicleAlreadyRegistered("V1".to_string()))
    );
    assert_eq!(repo.list_all_serials().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_then_get_returns_new_status_with_later_timestamp() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);
    let before = repo.register(&serial("V1")).await.unwrap();

    let updated = repo
        .update_status(&serial("V1"), VehicleStatus::Active)
        .await
        .expect("Failed to update");
    assert_eq!(updated.id, before.id);

    let fetched = repo.get_status(&serial("V1")).await.unwrap();
    assert_eq!(fetched.status, VehicleStatus::Active);
    assert!(fetched.timestamp > before.timestamp);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_back_to_back_updates_keep_timestamps_increasing() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);
    let mut last = repo.register(&serial("V1")).await.unwrap().timestamp;

    for status in [
        VehicleStatus::Maintenance,
        VehicleStatus::Error,
        VehicleStatus::Error,
        VehicleStatus::Inactive,
    ] {
        let record = repo.update_status(&serial("V1"), status).await.unwrap();
        assert!(record.timestamp > last);
        last = record.timestamp;
    }

    let fetched = repo.get_status(&serial("V1")).await.unwrap();
    assert_eq!(fetched.status, VehicleStatus::Inactive);
    assert_eq!(fetched.timestamp, last);
}

#[tokio::test]
async fn test_update_unregistered_vehicle_is_not_found() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);

    let result = repo
        .update_status(&serial("NOPE"), VehicleStatus::Active)
        .await;

    assert_eq!(result, Err(DomainError::VehicleNotFound("NOPE".to_string())));
    assert!(!repo.exists(&serial("NOPE")).await.unwrap());
}

#[tokio::test]
async fn test_get_status_of_unknown_vehicle_is_not_found() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);

    assert!(matches!(
        repo.get_status(&serial("NOPE")).await,
        Err(DomainError::VehicleNotFound(_))
    ));
}

#[tokio::test]
async fn test_list_all_serials_is_sorted() {
    let repo = SeaOrmVehicleStatusRepository::new(create_test_db().await);
    assert!(repo.list_all_serials().await.unwrap().is_empty());

    for s in ["DEF456", "ABC123", "cpp_tc"] {
        repo.register(&serial(s)).await.unwrap();
    }

    let serials: Vec<String> = repo
        .list_all_serials()
        .await
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(serials, vec!["ABC123", "DEF456", "cpp_tc"]);
}

#[tokio::test]
async fn test_register_update_and_report_scenario() {
    let db = create_test_db().await;
    let statuses = SeaOrmVehicleStatusRepository::new(db.clone());
    let sensors = SeaOrmSensorRepository::new(db);
    let v1 = serial("V1");

    statuses.register(&v1).await.unwrap();
    assert_eq!(
        statuses.get_status(&v1).await.unwrap().status,
        VehicleStatus::Inactive
    );

    statuses.update_status(&v1, VehicleStatus::Active).await.unwrap();
    assert_eq!(
        statuses.get_status(&v1).await.unwrap().status,
        VehicleStatus::Active
    );

    let t1 = Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 11, 2, 12, 5, 0).unwrap();

    sensors
        .insert(NewSensorReading::new(v1.clone(), SensorKind::Temperature, 23.5, t1))
        .await
        .unwrap();
    let all = sensors.get_all_for_vehicle(&v1).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].value, 23.5);

    sensors
        .insert(NewSensorReading::new(v1.clone(), SensorKind::Fuel, 75.0, t2))
        .await
        .unwrap();
    let temperature = sensors
        .get_for_vehicle_and_kind(&v1, SensorKind::Temperature)
        .await
        .unwrap();
    assert_eq!(temperature.len(), 1);
    assert_eq!(sensors.get_all_for_vehicle(&v1).await.unwrap().len(), 2);
}
