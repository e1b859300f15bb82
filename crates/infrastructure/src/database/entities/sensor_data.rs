use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only reading log. No relation to `vehicle_status_data`: the two
/// tables only share the serial string.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensor_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub vehicle_serial: String,
    pub sensor_type: String, // temperature | weight | fuel
    pub value: f64,
    pub timestamp: DateTimeUtc, // capture time, caller supplied
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
