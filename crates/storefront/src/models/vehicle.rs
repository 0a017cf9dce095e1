//! Reference data: categories and vehicle compatibility records.
//!
//! These are read-mostly tables created once at seed time.

use serde::{Deserialize, Serialize};

use lumenparts_core::{CategoryId, VehicleMakeId, VehicleModelId};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Number of products whose category label matches this category's name.
    /// Derived at read time, never stored.
    pub product_count: i64,
}

/// A vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VehicleMake {
    pub id: VehicleMakeId,
    pub name: String,
}

/// A vehicle model, weakly owned by a make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub id: VehicleModelId,
    pub make_id: VehicleMakeId,
    pub name: String,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_model_wire_format() {
        let model = VehicleModel {
            id: VehicleModelId::new(1),
            make_id: VehicleMakeId::new(2),
            name: "Civic".into(),
            year_start: Some(2016),
            year_end: Some(2021),
        };

        let json = serde_json::to_value(&model).expect("serialize");
        assert_eq!(json["makeId"], 2);
        assert_eq!(json["yearStart"], 2016);
    }
}
