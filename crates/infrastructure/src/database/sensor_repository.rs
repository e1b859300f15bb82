use super::entities::sensor_data;
use super::storage_error;
use async_trait::async_trait;
use domain::sensor::{NewSensorReading, SensorKind, SensorReading, SensorRepository};
use domain::{DomainError, VehicleSerial};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

pub struct SeaOrmSensorRepository {
    db: DatabaseConnection,
}

impl SeaOrmSensorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_reading(model: sensor_data::Model) -> Result<SensorReading, DomainError> {
        let sensor_kind = model.sensor_type.parse::<SensorKind>().map_err(|_| {
            DomainError::Storage(format!(
                "Unknown sensor type '{}' in row {}",
                model.sensor_type, model.id
            ))
        })?;

        Ok(SensorReading {
            id: model.id,
            vehicle_serial: VehicleSerial::new(model.vehicle_serial)?,
            sensor_kind,
            value: model.value,
            timestamp: model.timestamp,
        })
    }

    fn models_to_readings(
        models: Vec<sensor_data::Model>,
    ) -> Result<Vec<SensorReading>, DomainError> {
        models.into_iter().map(Self::model_to_reading).collect()
    }
}

#[async_trait]
impl SensorRepository for SeaOrmSensorRepository {
    async fn insert(&self, reading: NewSensorReading) -> Result<SensorReading, DomainError> {
        debug!(
            vehicle_serial = %reading.vehicle_serial,
            sensor_type = %reading.sensor_kind,
            value = reading.value,
            "Recording sensor reading"
        );

        let active_model = sensor_data::ActiveModel {
            vehicle_serial: Set(reading.vehicle_serial.as_str().to_string()),
            sensor_type: Set(reading.sensor_kind.as_str().to_string()),
            value: Set(reading.value),
            timestamp: Set(reading.timestamp),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;
        Self::model_to_reading(model)
    }

    async fn get_all_for_vehicle(
        &self,
        serial: &VehicleSerial,
    ) -> Result<Vec<SensorReading>, DomainError> {
        let models = sensor_data::Entity::find()
            .filter(sensor_data::Column::VehicleSerial.eq(serial.as_str()))
            .order_by_asc(sensor_data::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(vehicle_serial = %serial, count = models.len(), "Fetched sensor readings");
        Self::models_to_readings(models)
    }

    async fn get_for_vehicle_and_kind(
        &self,
        serial: &VehicleSerial,
        kind: SensorKind,
    ) -> Result<Vec<SensorReading>, DomainError> {
        let models = sensor_data::Entity::find()
            .filter(sensor_data::Column::VehicleSerial.eq(serial.as_str()))
            .filter(sensor_data::Column::SensorType.eq(kind.as_str()))
            .order_by_asc(sensor_data::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(
            vehicle_serial = %serial,
            sensor_type = %kind,
            count = models.len(),
            "Fetched sensor readings"
        );
        Self::models_to_readings(models)
    }
}
