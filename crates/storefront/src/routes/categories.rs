//! Category handlers.

use axum::{Json, extract::State};

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::Category;
use crate::state::AppState;

/// `GET /api/categories` - all categories, counts derived on read.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CatalogRepository::new(state.pool()).list_categories().await?;
    Ok(Json(categories))
}
