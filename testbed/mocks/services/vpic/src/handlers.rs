use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use vpic_types::ApiResponse;

use crate::server::MockState;

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    format: Option<String>,
}

fn require_json(query: &FormatQuery) -> Result<(), StatusCode> {
    // vPIC answers XML without this; the mock only speaks JSON.
    match query.format.as_deref() {
        Some("json") => Ok(()),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "vpic-mock"
    }))
}

pub async fn get_makes_for_vehicle_type(
    Path(vehicle_type): Path<String>,
    Query(query): Query<FormatQuery>,
    State(state): State<Arc<MockState>>,
) -> Result<impl IntoResponse, StatusCode> {
    state.record(vpic_types::makes_for_vehicle_type_path(&vehicle_type));
    require_json(&query)?;

    match state.fixture.get_makes(&vehicle_type) {
        Some(makes) => {
            let mut response = ApiResponse::new(makes);
            response.search_criteria = Some(format!("Vehicle Type: {}", vehicle_type));
            Ok(Json(response))
        }
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn get_models_for_make_id_year(
    Path((make_id, year)): Path<(String, String)>,
    Query(query): Query<FormatQuery>,
    State(state): State<Arc<MockState>>,
) -> Result<impl IntoResponse, StatusCode> {
    state.record(vpic_types::models_for_make_id_year_path(&make_id, &year));
    require_json(&query)?;

    match state.fixture.get_models(&make_id, &year) {
        Some(models) => {
            let mut response = ApiResponse::new(models);
            response.search_criteria = Some(format!("Make ID: {} | ModelYear: {}", make_id, year));
            Ok(Json(response))
        }
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
