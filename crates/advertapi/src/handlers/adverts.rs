//! Advert handlers.
//!
//! Thin wrappers over [`crate::storage::AdvertStorage`]: no validation or
//! business logic beyond what the storage component does.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use advertapi_core::advert::{AddAdvertResponse, Advert, AdvertView, ConfirmAdvert};

use crate::{handlers::AppError, state::AppState};

/// Create a new pending advert (POST /advert).
#[utoipa::path(
    post,
    path = "/advert",
    tag = "adverts",
    request_body = Advert,
    responses(
        (status = 201, description = "Advert created", body = AddAdvertResponse),
    )
)]
pub async fn create_advert(
    State(state): State<AppState>,
    Json(payload): Json<Advert>,
) -> Result<(StatusCode, Json<AddAdvertResponse>), AppError> {
    let id = state.storage.add(payload).await?;
    Ok((StatusCode::CREATED, Json(AddAdvertResponse { id })))
}

/// Confirm or reject a pending advert (POST /advert/confirm).
#[utoipa::path(
    post,
    path = "/advert/confirm",
    tag = "adverts",
    request_body = ConfirmAdvert,
    responses(
        (status = 200, description = "Advert activated or removed"),
        (status = 404, description = "Advert not found"),
    )
)]
pub async fn confirm_advert(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmAdvert>,
) -> Result<StatusCode, AppError> {
    state.storage.confirm(payload).await?;
    Ok(StatusCode::OK)
}

/// Get a single advert by ID (GET /advert/{id}).
#[utoipa::path(
    get,
    path = "/advert/{id}",
    tag = "adverts",
    params(("id" = String, Path, description = "Advert identifier")),
    responses(
        (status = 200, description = "Advert found", body = AdvertView),
        (status = 404, description = "Advert not found"),
    )
)]
pub async fn get_advert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdvertView>, AppError> {
    let advert = state.storage.get_by_id(&id).await?;
    Ok(Json(advert))
}

/// List adverts (GET /advert).
#[utoipa::path(
    get,
    path = "/advert",
    tag = "adverts",
    responses(
        (status = 200, description = "Adverts in scan order", body = [AdvertView]),
    )
)]
pub async fn list_adverts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertView>>, AppError> {
    let adverts = state.storage.get_all().await?;
    Ok(Json(adverts))
}
