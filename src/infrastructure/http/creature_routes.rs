//! Creature catalog API routes
//!
//! Read-only endpoints for searching the creature catalog.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{CreatureFacetsResponseDto, CreatureQueryDto, CreatureResponseDto};
use crate::domain::value_objects::CreatureId;
use crate::infrastructure::state::AppState;

/// Search the catalog
pub async fn list_creatures(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreatureQueryDto>,
) -> Result<Json<Vec<CreatureResponseDto>>, (StatusCode, String)> {
    let filter = query
        .into_filter()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let creatures = state.catalog_service.search(&filter);
    Ok(Json(
        creatures
            .iter()
            .map(|c| CreatureResponseDto::from(&**c))
            .collect(),
    ))
}

/// Distinct values for the catalog filters
pub async fn get_creature_facets(
    State(state): State<Arc<AppState>>,
) -> Json<CreatureFacetsResponseDto> {
    Json(state.catalog_service.facets().into())
}

/// Get a single creature
pub async fn get_creature(
    State(state): State<Arc<AppState>>,
    Path(creature_id): Path<String>,
) -> Result<Json<CreatureResponseDto>, (StatusCode, String)> {
    let creature = state
        .catalog_service
        .get(&CreatureId::new(creature_id))
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Creature not found".to_string()))?;

    Ok(Json(CreatureResponseDto::from(&*creature)))
}
