//! Priced item surface: `name` + `price`, no listing.

use crate::error::{ApiError, ErrorResponse, NotFoundResponse};
use crate::handlers::parse_id;
use crate::models::{OkResponse, PricedItem, PricedItemPayload};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// POST /items handler - Create a priced item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = PricedItemPayload,
    responses(
        (status = 200, description = "Item created", body = PricedItem),
        (status = 422, description = "Missing or mistyped fields"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<PricedItemPayload>,
) -> Result<(StatusCode, Json<PricedItem>), ApiError> {
    let item = state.store.create_priced(&payload).await?;

    tracing::info!("Created priced item with id: {}", item.id);
    Ok((StatusCode::OK, Json(item)))
}

/// GET /items/{id} handler - Retrieve a priced item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = PricedItem),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<PricedItem>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.read_priced(id).await? {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            tracing::info!("Priced item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// PUT /items/{id} handler - Replace a priced item
///
/// The response echoes the request payload under the path id. Replacement
/// is total, so the stored row is exactly that.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    request_body = PricedItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = PricedItem),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 422, description = "Missing or mistyped fields"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(payload): Json<PricedItemPayload>,
) -> Result<(StatusCode, Json<PricedItem>), ApiError> {
    let id = parse_id(&id_str)?;

    if !state.store.replace_priced(id, &payload).await? {
        tracing::info!("Priced item not found for update with id: {}", id);
        return Err(ApiError::NotFound);
    }

    tracing::info!("Replaced priced item with id: {}", id);
    Ok((StatusCode::OK, Json(PricedItem::from_payload(id, payload))))
}

/// DELETE /items/{id} handler - Remove a priced item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item deleted", body = OkResponse),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    if !state.store.delete_priced(id).await? {
        tracing::info!("Priced item not found for delete with id: {}", id);
        return Err(ApiError::NotFound);
    }

    tracing::info!("Deleted priced item with id: {}", id);
    Ok((StatusCode::OK, Json(OkResponse::ok())))
}
