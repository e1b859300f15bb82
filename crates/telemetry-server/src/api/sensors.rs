use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use domain::sensor::{NewSensorReading, SensorKind, SensorReading, SensorSeries};
use domain::vehicle::VehicleSerial;

use super::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /add-sensor-data/`
#[derive(Debug, Deserialize)]
pub struct AddSensorDataRequest {
    pub vehicle_serial: VehicleSerial,
    pub sensor_type: SensorKind,
    pub sensor_data: f64,
    #[serde(with = "domain::timestamp::iso_micros")]
    pub timestamp: DateTime<Utc>,
}

impl From<AddSensorDataRequest> for NewSensorReading {
    fn from(request: AddSensorDataRequest) -> Self {
        NewSensorReading::new(
            request.vehicle_serial,
            request.sensor_type,
            request.sensor_data,
            request.timestamp,
        )
    }
}

pub async fn add_sensor_data(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddSensorDataRequest>, JsonRejection>,
) -> Result<Json<Envelope<SensorReading>>, ApiError> {
    let Json(request) = payload?;

    let reading = state.monitoring.record_sensor_data(request.into()).await?;
    debug!(id = reading.id, vehicle_serial = %reading.vehicle_serial, "Sensor reading stored");

    Ok(Json(Envelope::message("Sensor data recorded.", reading)))
}

pub async fn get_sensor_data(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<Vec<SensorReading>>>, ApiError> {
    let Path(raw_serial) = path?;
    let serial = VehicleSerial::new(raw_serial)?;

    let readings = state.monitoring.sensor_readings(&serial, None).await?;
    if readings.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No sensor data found for vehicle with serial {}",
            serial
        )));
    }

    Ok(Json(Envelope::content(readings)))
}

pub async fn get_sensor_data_by_type(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Envelope<Vec<SensorReading>>>, ApiError> {
    let Path((raw_serial, raw_kind)) = path?;
    let serial = VehicleSerial::new(raw_serial)?;
    let kind: SensorKind = raw_kind.parse()?;

    let readings = state.monitoring.sensor_readings(&serial, Some(kind)).await?;
    if readings.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No {} data found for vehicle with serial {}",
            kind, serial
        )));
    }

    Ok(Json(Envelope::content(readings)))
}

/// All readings of a vehicle grouped into one time series per sensor type
pub async fn get_sensor_summary(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<SensorSeries>>, ApiError> {
    let Path(raw_serial) = path?;
    let serial = VehicleSerial::new(raw_serial)?;

    let series = state.monitoring.sensor_series(&serial).await?;
    if series.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No sensor data found for vehicle with serial {}",
            serial
        )));
    }

    Ok(Json(Envelope::content(series)))
}
