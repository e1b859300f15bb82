use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod sensors;
mod vehicles;

pub use sensors::AddSensorDataRequest;
pub use vehicles::{UpdateVehicleStatusRequest, VehicleStatusContent};

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/register-new-vehicle/", post(vehicles::register_new_vehicle))
        .route("/update-vehicle-status/", post(vehicles::update_vehicle_status))
        .route("/get-all-vehicles", get(vehicles::get_all_vehicles))
        .route("/get-vehicle-status/", get(vehicles::get_vehicle_status))
        .route("/add-sensor-data/", post(sensors::add_sensor_data))
        .route("/get-sensor-data/{vehicle_serial}", get(sensors::get_sensor_data))
        .route(
            "/get-sensor-data/{vehicle_serial}/{sensor_type}",
            get(sensors::get_sensor_data_by_type),
        )
        .route(
            "/get-sensor-summary/{vehicle_serial}",
            get(sensors::get_sensor_summary),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Success body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<T>,
}

impl<T> Envelope<T> {
    pub fn content(content: T) -> Self {
        Self {
            status: "success",
            message: None,
            content: Some(content),
        }
    }

    pub fn message(message: impl Into<String>, content: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            content: Some(content),
        }
    }
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "success", "version": state.version }))
}
