use super::entities::vehicle_status_data;
use super::storage_error;
use async_trait::async_trait;
use domain::vehicle::{VehicleSerial, VehicleStatus, VehicleStatusRecord, VehicleStatusRepository};
use domain::{DomainError, timestamp};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use tracing::{debug, info};

pub struct SeaOrmVehicleStatusRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleStatusRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_record(
        model: vehicle_status_data::Model,
    ) -> Result<VehicleStatusRecord, DomainError> {
        let status = model.status.parse::<VehicleStatus>().map_err(|_| {
            DomainError::Storage(format!(
                "Unknown vehicle status '{}' for {}",
                model.status, model.vehicle_serial
            ))
        })?;

        Ok(VehicleStatusRecord {
            id: model.id,
            vehicle_serial: VehicleSerial::new(model.vehicle_serial)?,
            status,
            timestamp: model.timestamp,
        })
    }

    async fn find_model(
        &self,
        serial: &VehicleSerial,
    ) -> Result<Option<vehicle_status_data::Model>, DomainError> {
        vehicle_status_data::Entity::find()
            .filter(vehicle_status_data::Column::VehicleSerial.eq(serial.as_str()))
            .one(&self.db)
            .await
            .map_err(storage_error)
    }

    fn insert_error(serial: &VehicleSerial, e: DbErr) -> DomainError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::VehicleAlreadyRegistered(serial.to_string())
            }
            _ => storage_error(e),
        }
    }
}

#[async_trait]
impl VehicleStatusRepository for SeaOrmVehicleStatusRepository {
    async fn exists(&self, serial: &VehicleSerial) -> Result<bool, DomainError> {
        let count = vehicle_status_data::Entity::find()
            .filter(vehicle_status_data::Column::VehicleSerial.eq(serial.as_str()))
            .count(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(count > 0)
    }

    async fn register(&self, serial: &VehicleSerial) -> Result<VehicleStatusRecord, DomainError> {
        if self.find_model(serial).await?.is_some() {
            return Err(DomainError::VehicleAlreadyRegistered(serial.to_string()));
        }

        let active_model = vehicle_status_data::ActiveModel {
            vehicle_serial: Set(serial.as_str().to_string()),
            status: Set(VehicleStatus::default().as_str().to_string()),
            timestamp: Set(timestamp::now()),
            ..Default::default()
        };

        // A concurrent registration can still win between the check and the
        // insert; the unique index turns that into a duplicate as well.
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| Self::insert_error(serial, e))?;

        info!(vehicle_serial = %serial, "Registered vehicle");
        Self::model_to_record(model)
    }

    async fn update_status(
        &self,
        serial: &VehicleSerial,
        status: VehicleStatus,
    ) -> Result<VehicleStatusRecord, DomainError> {
        let existing = self
            .find_model(serial)
            .await?
            .ok_or_else(|| DomainError::VehicleNotFound(serial.to_string()))?;

        let refreshed_at = timestamp::refreshed(existing.timestamp);

        let active_model = vehicle_status_data::ActiveModel {
            vehicle_serial: Set(serial.as_str().to_string()),
            status: Set(status.as_str().to_string()),
            timestamp: Set(refreshed_at),
            ..Default::default()
        };

        // Upsert on the unique serial; concurrent writers resolve to last write wins.
        vehicle_status_data::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(vehicle_status_data::Column::VehicleSerial)
                    .update_columns([
                        vehicle_status_data::Column::Status,
                        vehicle_status_data::Column::Timestamp,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(vehicle_serial = %serial, status = %status, "Updated vehicle status");

        Ok(VehicleStatusRecord {
            id: existing.id,
            vehicle_serial: serial.clone(),
            status,
            timestamp: refreshed_at,
        })
    }

    async fn get_status(&self, serial: &VehicleSerial) -> Result<VehicleStatusRecord, DomainError> {
        let model = self
            .find_model(serial)
            .await?
            .ok_or_else(|| DomainError::VehicleNotFound(serial.to_string()))?;

        Self::model_to_record(model)
    }

    async fn list_all_serials(&self) -> Result<Vec<VehicleSerial>, DomainError> {
        let serials: Vec<String> = vehicle_status_data::Entity::find()
            .select_only()
            .column(vehicle_status_data::Column::VehicleSerial)
            .order_by_asc(vehicle_status_data::Column::VehicleSerial)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        serials.into_iter().map(VehicleSerial::new).collect()
    }
}
