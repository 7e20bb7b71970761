//! Encounter API routes
//!
//! Endpoints for drafting an encounter: party edits, roster changes and
//! the composition analysis. Every mutating endpoint answers with the
//! recomputed encounter.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{
    AddCreatureRequestDto, CreateEncounterRequestDto, EncounterAnalysisResponseDto,
    EncounterResponseDto, EncounterSummaryResponseDto, PartyRequestDto, UpdateQuantityRequestDto,
};
use crate::application::services::EncounterServiceError;
use crate::domain::aggregates::Encounter;
use crate::domain::entities::RosterError;
use crate::domain::value_objects::{CreatureId, EncounterId};
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::state::AppState;

fn parse_encounter_id(id: &str) -> Result<EncounterId, (StatusCode, String)> {
    let uuid = Uuid::parse_str(id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid encounter ID".to_string()))?;
    Ok(EncounterId::from_uuid(uuid))
}

fn service_error(e: EncounterServiceError) -> (StatusCode, String) {
    let status = match e {
        EncounterServiceError::NotFound(_)
        | EncounterServiceError::CreatureNotFound(_)
        | EncounterServiceError::Roster(RosterError::IndexOutOfBounds { .. }) => {
            StatusCode::NOT_FOUND
        }
        EncounterServiceError::Roster(
            RosterError::QuantityLimit { .. } | RosterError::ValueOverflow,
        ) => StatusCode::BAD_REQUEST,
    };
    (status, e.to_string())
}

fn respond(state: &AppState, encounter: &Encounter) -> Json<EncounterResponseDto> {
    Json(EncounterResponseDto::new(
        encounter,
        &state.encounter_service.analysis_settings(),
    ))
}

/// List encounter drafts
pub async fn list_encounters(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<EncounterSummaryResponseDto>> {
    let encounters = state.encounter_service.list_encounters().await;
    Json(encounters.iter().map(EncounterSummaryResponseDto::from).collect())
}

/// Create an encounter draft
pub async fn create_encounter(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateEncounterRequestDto>,
) -> (StatusCode, Json<EncounterResponseDto>) {
    let encounter = state.encounter_service.create_encounter(req.into()).await;
    (StatusCode::CREATED, respond(&state, &encounter))
}

/// Get an encounter
pub async fn get_encounter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .get_encounter(id)
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Delete an encounter
pub async fn delete_encounter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    state
        .encounter_service
        .delete_encounter(id)
        .await
        .map_err(service_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update the party
pub async fn update_party(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<PartyRequestDto>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .update_party(id, req.into())
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Add a catalog creature to the roster
pub async fn add_creature(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddCreatureRequestDto>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .add_creature(id, &CreatureId::new(req.creature_id))
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Remove every creature from the roster
pub async fn clear_roster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .clear_roster(id)
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Change the quantity of a roster entry
pub async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(String, usize)>,
    JsonBody(req): JsonBody<UpdateQuantityRequestDto>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .set_quantity(id, index, req.requested())
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Remove a roster entry
pub async fn remove_creature(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let encounter = state
        .encounter_service
        .remove_creature(id, index)
        .await
        .map_err(service_error)?;

    Ok(respond(&state, &encounter))
}

/// Composition analysis of an encounter
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EncounterAnalysisResponseDto>, (StatusCode, String)> {
    let id = parse_encounter_id(&id)?;
    let analysis = state
        .encounter_service
        .analyze(id)
        .await
        .map_err(service_error)?;

    Ok(Json(analysis.into()))
}
