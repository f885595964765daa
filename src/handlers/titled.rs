//! Titled item surface: `title` + optional `description`, with listing.

use crate::error::{ApiError, ErrorResponse, NotFoundResponse};
use crate::handlers::parse_id;
use crate::models::{TitledItem, TitledItemPayload};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// Titles are stored under a non-empty constraint; reject before touching the database.
fn validate(payload: &TitledItemPayload) -> Result<(), ApiError> {
    if payload.title.is_empty() {
        return Err(ApiError::InvalidPayload("title must not be empty".to_string()));
    }
    Ok(())
}

/// GET /items handler - List every titled item
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All stored items", body = [TitledItem]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<TitledItem>>), ApiError> {
    let items = state.store.list_titled().await?;

    tracing::debug!("Listed {} titled items", items.len());
    Ok((StatusCode::OK, Json(items)))
}

/// POST /items handler - Create a titled item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = TitledItemPayload,
    responses(
        (status = 201, description = "Item created", body = TitledItem),
        (status = 422, description = "Missing, mistyped or empty fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<TitledItemPayload>,
) -> Result<(StatusCode, Json<TitledItem>), ApiError> {
    validate(&payload)?;

    let item = state.store.create_titled(&payload).await?;

    tracing::info!("Created titled item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items/{id} handler - Retrieve a titled item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = TitledItem),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<TitledItem>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.read_titled(id).await? {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            tracing::info!("Titled item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// PUT /items/{id} handler - Replace a titled item
///
/// Both fields are overwritten; an omitted `description` clears it.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    request_body = TitledItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = TitledItem),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 422, description = "Missing, mistyped or empty fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(payload): Json<TitledItemPayload>,
) -> Result<(StatusCode, Json<TitledItem>), ApiError> {
    let id = parse_id(&id_str)?;
    validate(&payload)?;

    match state.store.replace_titled(id, &payload).await? {
        Some(item) => {
            tracing::info!("Replaced titled item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Titled item not found for update with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// DELETE /items/{id} handler - Remove a titled item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = NotFoundResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id_str)?;

    if !state.store.delete_titled(id).await? {
        tracing::info!("Titled item not found for delete with id: {}", id);
        return Err(ApiError::NotFound);
    }

    tracing::info!("Deleted titled item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemVariant;
    use crate::handlers::test_support::send;
    use axum::{routing::get, Router};
    use serde_json::json;

    async fn setup_test_app() -> Router {
        let state = AppState::in_memory(ItemVariant::Titled).await;

        Router::new()
            .route(routes::ITEMS, get(list_handler).post(create_handler))
            .route(
                routes::ITEM,
                get(get_handler).put(update_handler).delete(delete_handler),
            )
            .with_state(state)
    }

    fn error_of(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorResponse>(body).unwrap().error
    }

    fn detail_of(body: &[u8]) -> String {
        serde_json::from_slice::<NotFoundResponse>(body).unwrap().detail
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = setup_test_app().await;

        let (status, body) = send(&app, "GET", "/items", None).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<TitledItem> = serde_json::from_slice(&body).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_without_description() {
        let app = setup_test_app().await;

        let (status, body) = send(&app, "POST", "/items", Some(json!({ "title": "Task" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "id": 1, "title": "Task", "description": null }));
    }

    #[tokio::test]
    async fn test_create_with_description() {
        let app = setup_test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/items",
            Some(json!({ "title": "Task", "description": "details" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let item: TitledItem = serde_json::from_slice(&body).unwrap();
        assert_eq!(item.description.as_deref(), Some("details"));
    }

    #[tokio::test]
    async fn test_create_missing_title_is_rejected() {
        let app = setup_test_app().await;

        let (status, _) =
            send(&app, "POST", "/items", Some(json!({ "description": "orphan" }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_empty_title_is_rejected() {
        let app = setup_test_app().await;

        let (status, body) = send(&app, "POST", "/items", Some(json!({ "title": "" }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error_of(&body).contains("title must not be empty"));

        let (_, body) = send(&app, "GET", "/items", None).await;
        let items: Vec<TitledItem> = serde_json::from_slice(&body).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let app = setup_test_app().await;
        send(&app, "POST", "/items", Some(json!({ "title": "one" }))).await;
        send(&app, "POST", "/items", Some(json!({ "title": "two", "description": "2" }))).await;

        let (status, body) = send(&app, "GET", "/items", None).await;

        assert_eq!(status, StatusCode::OK);
        let mut titles: Vec<String> = serde_json::from_slice::<Vec<TitledItem>>(&body)
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = setup_test_app().await;

        let (status, body) = send(&app, "GET", "/items/3", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail_of(&body), "Not found");
    }

    #[tokio::test]
    async fn test_get_invalid_id() {
        let app = setup_test_app().await;

        let (status, _) = send(&app, "GET", "/items/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_replaces_and_clears_description() {
        let app = setup_test_app().await;
        send(
            &app,
            "POST",
            "/items",
            Some(json!({ "title": "Task", "description": "old" })),
        )
        .await;

        let (status, body) = send(&app, "PUT", "/items/1", Some(json!({ "title": "Task2" }))).await;

        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "id": 1, "title": "Task2", "description": null }));

        let (_, body) = send(&app, "GET", "/items/1", None).await;
        let read: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(read, json!({ "id": 1, "title": "Task2", "description": null }));
    }

    #[tokio::test]
    async fn test_update_not_found_does_not_create() {
        let app = setup_test_app().await;

        let (status, body) =
            send(&app, "PUT", "/items/8", Some(json!({ "title": "ghost" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail_of(&body), "Not found");

        let (_, body) = send(&app, "GET", "/items", None).await;
        let items: Vec<TitledItem> = serde_json::from_slice(&body).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_update_empty_title_leaves_row_untouched() {
        let app = setup_test_app().await;
        send(&app, "POST", "/items", Some(json!({ "title": "Task" }))).await;

        let (status, _) = send(&app, "PUT", "/items/1", Some(json!({ "title": "" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(&app, "GET", "/items/1", None).await;
        let read: TitledItem = serde_json::from_slice(&body).unwrap();
        assert_eq!(read.title, "Task");
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let app = setup_test_app().await;
        send(&app, "POST", "/items", Some(json!({ "title": "Task" }))).await;

        let (status, body) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_id_not_reused_after_delete() {
        let app = setup_test_app().await;
        send(&app, "POST", "/items", Some(json!({ "title": "first" }))).await;
        send(&app, "DELETE", "/items/1", None).await;

        let (_, body) = send(&app, "POST", "/items", Some(json!({ "title": "second" }))).await;
        let item: TitledItem = serde_json::from_slice(&body).unwrap();

        assert_eq!(item.id, 2);
    }
}
