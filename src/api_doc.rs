use utoipa::OpenApi;

use crate::error::{ErrorResponse, NotFoundResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{OkResponse, PricedItem, PricedItemPayload, TitledItem, TitledItemPayload};

/// OpenAPI documentation for the priced item surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "sqlite-items priced API",
        version = "1.0.0",
        description = "CRUD over named, priced items backed by SQLite"
    ),
    paths(
        handlers::priced::create_handler,
        handlers::priced::get_handler,
        handlers::priced::update_handler,
        handlers::priced::delete_handler
    ),
    components(
        schemas(
            PricedItem,
            PricedItemPayload,
            OkResponse,
            ErrorResponse,
            NotFoundResponse
        )
    ),
    tags(
        (name = "items", description = "Item operations")
    )
)]
pub struct PricedApiDoc;

/// OpenAPI documentation for the titled item surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "sqlite-items titled API",
        version = "1.0.0",
        description = "CRUD and listing over titled items backed by SQLite"
    ),
    paths(
        handlers::health::health_handler,
        handlers::titled::list_handler,
        handlers::titled::create_handler,
        handlers::titled::get_handler,
        handlers::titled::update_handler,
        handlers::titled::delete_handler
    ),
    components(
        schemas(
            TitledItem,
            TitledItemPayload,
            OkResponse,
            ErrorResponse,
            NotFoundResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations")
    )
)]
pub struct TitledApiDoc;
