//! Vehicle compatibility reference handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use lumenparts_core::VehicleMakeId;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::{VehicleMake, VehicleModel};
use crate::state::AppState;

/// `GET /api/vehicle-makes` - all vehicle makes.
pub async fn makes(State(state): State<AppState>) -> Result<Json<Vec<VehicleMake>>> {
    let makes = CatalogRepository::new(state.pool())
        .list_vehicle_makes()
        .await?;
    Ok(Json(makes))
}

/// Query parameters for the model listing.
#[derive(Debug, Deserialize)]
pub struct ModelQuery {
    #[serde(rename = "makeId")]
    pub make_id: Option<String>,
}

/// `GET /api/vehicle-models?makeId=` - models, optionally limited to a make.
pub async fn models(
    State(state): State<AppState>,
    Query(query): Query<ModelQuery>,
) -> Result<Json<Vec<VehicleModel>>> {
    let make_id = match query.make_id.as_deref() {
        None | Some("") => None,
        Some(raw) => {
            let id: i32 = raw.parse().map_err(|_| AppError::Validation {
                field: "makeId",
                message: format!("expected a numeric make id, got '{raw}'"),
            })?;
            Some(VehicleMakeId::new(id))
        }
    };

    let models = CatalogRepository::new(state.pool())
        .list_vehicle_models(make_id)
        .await?;
    Ok(Json(models))
}
