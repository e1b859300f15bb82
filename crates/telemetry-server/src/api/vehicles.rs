use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use domain::vehicle::{VehicleSerial, VehicleStatus, VehicleStatusRecord};

use super::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VehicleSerialQuery {
    pub vehicle_serial: VehicleSerial,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub vehicle_serial: VehicleSerial,
    pub vehicle_status: VehicleStatus,
}

/// Public view of a vehicle status row
#[derive(Debug, Serialize)]
pub struct VehicleStatusContent {
    pub vehicle_serial: VehicleSerial,
    pub status: VehicleStatus,
    #[serde(with = "domain::timestamp::iso_micros")]
    pub timestamp: DateTime<Utc>,
}

impl From<VehicleStatusRecord> for VehicleStatusContent {
    fn from(record: VehicleStatusRecord) -> Self {
        Self {
            vehicle_serial: record.vehicle_serial,
            status: record.status,
            timestamp: record.timestamp,
        }
    }
}

pub async fn register_new_vehicle(
    State(state): State<Arc<AppState>>,
    query: Result<Query<VehicleSerialQuery>, QueryRejection>,
) -> Result<Json<Envelope<VehicleStatusContent>>, ApiError> {
    let Query(VehicleSerialQuery { vehicle_serial }) = query?;

    let record = state.monitoring.register_vehicle(&vehicle_serial).await?;

    Ok(Json(Envelope::message(
        format!("Registered new vehicle with serial number {}.", vehicle_serial),
        record.into(),
    )))
}

pub async fn update_vehicle_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateVehicleStatusRequest>, JsonRejection>,
) -> Result<Json<Envelope<VehicleStatusContent>>, ApiError> {
    let Json(request) = payload?;

    let record = state
        .monitoring
        .update_vehicle_status(&request.vehicle_serial, request.vehicle_status)
        .await?;

    Ok(Json(Envelope::message(
        format!(
            "Status updated for vehicle with serial number {} to {}.",
            record.vehicle_serial, record.status
        ),
        record.into(),
    )))
}

pub async fn get_all_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<VehicleSerial>>>, ApiError> {
    let serials = state.monitoring.list_vehicles().await?;
    Ok(Json(Envelope::content(serials)))
}

pub async fn get_vehicle_status(
    State(state): State<Arc<AppState>>,
    query: Result<Query<VehicleSerialQuery>, QueryRejection>,
) -> Result<Json<Envelope<VehicleStatusContent>>, ApiError> {
    let Query(VehicleSerialQuery { vehicle_serial }) = query?;

    let record = state
        .monitoring
        .vehicle_status(&vehicle_serial)
        .await
        .map_err(ApiError::not_found_if_missing)?;

    Ok(Json(Envelope::message(
        format!(
            "Vehicle status for vehicle with serial number {} is {}",
            record.vehicle_serial, record.status
        ),
        record.into(),
    )))
}
