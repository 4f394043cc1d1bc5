//! HTTP request handlers for the catalog API.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::core::filter::ExerciseFilter;
use crate::core::query::parse_filter_query;
use crate::domain::model::{ApiInfo, Exercise};
use crate::utils::error::CatalogError;

use super::AppState;

/// Error response body
#[derive(Debug, Serialize)]
pub(super) struct ErrorBody {
    error: String,
}

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn internal_error(context: &str, err: CatalogError) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!("{}: {} (Category: {:?})", context, err, err.category());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: format!("{}: {}", context, err),
        }),
    )
}

// -- /api/exercises --

pub(super) async fn list_exercises(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> HandlerResult<Vec<Exercise>> {
    let request = parse_filter_query(query.as_deref());

    let all = state
        .catalog
        .all_exercises()
        .await
        .map_err(|e| internal_error("Failed to fetch exercises", e))?;

    let filter = ExerciseFilter::new(&request);
    if filter.is_unconstrained() {
        return Ok(Json(all));
    }

    let matched = filter.apply(&all);
    tracing::debug!(
        "Filter equipment={:?} muscles={:?} matched {} of {}",
        request.equipment,
        request.muscles,
        matched.len(),
        all.len()
    );
    Ok(Json(matched))
}

// -- option lists --

pub(super) async fn equipment_options(
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Vec<String>> {
    state
        .catalog
        .distinct_equipment_names()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to fetch equipment options", e))
}

pub(super) async fn muscles_options(
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Vec<String>> {
    state
        .catalog
        .distinct_muscle_names()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to fetch muscle options", e))
}

pub(super) async fn exercise_names(
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Vec<String>> {
    state
        .catalog
        .distinct_exercise_names()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to fetch exercise names", e))
}

// -- /api/version --

pub(super) async fn version(State(state): State<Arc<AppState>>) -> Json<ApiInfo> {
    Json(state.api_info.as_ref().clone())
}
