//! Handlers for the `/videos` resource.
//!
//! GET and the rentals listing reject a non-integer path id with 400. PUT
//! and DELETE do not guard it: an unparseable id there is an unrecovered
//! failure and surfaces as a generic 500.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use vidrental_core::error::CoreError;
use vidrental_core::types::DbId;
use vidrental_core::video::{parse_video_id, VideoPayload, VIDEO_ENTITY};
use vidrental_db::models::video::Video;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `DELETE /videos/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedVideo {
    pub id: DbId,
}

/// One entry of `GET /videos/{id}/rentals`.
#[derive(Debug, Serialize)]
pub struct RentalCustomer {
    pub name: String,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: VIDEO_ENTITY,
        id,
    })
}

/// Parse a path id on routes that do not guard against non-integers.
fn parse_unguarded_id(raw: &str) -> AppResult<DbId> {
    parse_video_id(raw)
        .map_err(|_| AppError::InternalError(format!("unparseable video id {raw:?}")))
}

/// Unwrap a JSON body, turning a malformed body into a 400.
fn payload(body: Result<Json<VideoPayload>, JsonRejection>) -> AppResult<VideoPayload> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Video>>> {
    let videos = state.store.list_videos().await?;
    Ok(Json(videos))
}

/// POST /videos
///
/// Reports the first missing key individually, in the order `title`,
/// `release_date`, `total_inventory`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<VideoPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Video>)> {
    let input = payload(body)?.validate_for_create()?;
    let video = state.store.create_video(&input).await?;
    tracing::info!(video_id = video.id, title = %video.title, "Created video");
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Video>> {
    let id = parse_video_id(&raw_id)?;
    let video = state
        .store
        .find_video(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(video))
}

/// PUT /videos/{id}
///
/// The video is looked up before the body is examined, so an unknown id
/// wins over a bad payload. Missing keys produce one combined message,
/// unlike [`create`].
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<VideoPayload>, JsonRejection>,
) -> AppResult<Json<Video>> {
    let id = parse_unguarded_id(&raw_id)?;
    if state.store.find_video(id).await?.is_none() {
        return Err(not_found(id));
    }

    let input = payload(body)?.validate_for_update()?;
    let video = state
        .store
        .update_video(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(video_id = id, "Updated video");
    Ok(Json(video))
}

/// DELETE /videos/{id}
///
/// Deletes the video's rentals first, then the video, in one store
/// transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeletedVideo>> {
    let id = parse_unguarded_id(&raw_id)?;
    let rentals_deleted = state
        .store
        .delete_video_cascade(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(video_id = id, rentals_deleted, "Deleted video");
    Ok(Json(DeletedVideo { id }))
}

/// GET /videos/{id}/rentals
///
/// Lists the customer name of every rental of the video. A rental whose
/// customer no longer exists fails the whole request with a 500.
pub async fn list_rentals(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<RentalCustomer>>> {
    let id = parse_video_id(&raw_id)?;
    if state.store.find_video(id).await?.is_none() {
        return Err(not_found(id));
    }

    let rentals = state.store.list_rentals_for_video(id).await?;
    let mut response = Vec::with_capacity(rentals.len());
    for rental in rentals {
        let customer = state
            .store
            .find_customer(rental.customer_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "rental {} references missing customer {}",
                    rental.id, rental.customer_id
                ))
            })?;
        response.push(RentalCustomer {
            name: customer.name,
        });
    }
    Ok(Json(response))
}
