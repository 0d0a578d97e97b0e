//! Professional directory handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::StaffUser;
use crate::api::AppState;
use crate::domain::{CreateProfessional, Professional, UpdateProfessional};
use crate::errors::AppResult;

/// Directory search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring of the full name or phone number
    pub search: Option<String>,
}

/// Create professional routes (all require authentication)
pub fn professional_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_professionals).post(create_professional))
        .route(
            "/:id",
            patch(update_professional).delete(delete_professional),
        )
}

/// List or search the directory
#[utoipa::path(
    get,
    path = "/api/professionals",
    tag = "Professionals",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching professionals", body = Vec<Professional>),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_professionals(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Professional>>> {
    let professionals = state
        .professional_service
        .search_professionals(query.search)
        .await?;

    Ok(Json(professionals))
}

/// Add a professional (staff only)
#[utoipa::path(
    post,
    path = "/api/professionals",
    tag = "Professionals",
    request_body = CreateProfessional,
    responses(
        (status = 201, description = "Professional created", body = Professional),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Staff only")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_professional(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidatedJson(payload): ValidatedJson<CreateProfessional>,
) -> AppResult<(StatusCode, Json<Professional>)> {
    let professional = state
        .professional_service
        .create_professional(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(professional)))
}

/// Partially update a professional (staff only)
#[utoipa::path(
    patch,
    path = "/api/professionals/{id}",
    tag = "Professionals",
    params(("id" = Uuid, Path, description = "Professional ID")),
    request_body = UpdateProfessional,
    responses(
        (status = 200, description = "Professional updated", body = Professional),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Professional not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_professional(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProfessional>,
) -> AppResult<Json<Professional>> {
    let professional = state
        .professional_service
        .update_professional(id, payload)
        .await?;

    Ok(Json(professional))
}

/// Remove a professional (staff only)
#[utoipa::path(
    delete,
    path = "/api/professionals/{id}",
    tag = "Professionals",
    params(("id" = Uuid, Path, description = "Professional ID")),
    responses(
        (status = 204, description = "Professional deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Professional not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_professional(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.professional_service.delete_professional(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
