use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{PricedApiDoc, TitledApiDoc};
use crate::config::ItemVariant;
use crate::handlers::{self, priced, titled};
use crate::routes;
use crate::state::AppState;

/// Build the router for the variant selected in `state.config`
///
/// Only one variant is mounted per process, so `/items` always has a single
/// meaning.
pub fn app(state: AppState) -> Router {
    let router = match state.config.variant {
        ItemVariant::Priced => Router::new()
            .route(routes::ITEMS, post(priced::create_handler))
            .route(
                routes::ITEM,
                get(priced::get_handler)
                    .put(priced::update_handler)
                    .delete(priced::delete_handler),
            )
            .merge(
                SwaggerUi::new(routes::SWAGGER_UI)
                    .url(routes::OPENAPI_JSON, PricedApiDoc::openapi()),
            ),
        ItemVariant::Titled => Router::new()
            .route(routes::HEALTH, get(handlers::health_handler))
            .route(
                routes::ITEMS,
                get(titled::list_handler).post(titled::create_handler),
            )
            .route(
                routes::ITEM,
                get(titled::get_handler)
                    .put(titled::update_handler)
                    .delete(titled::delete_handler),
            )
            .merge(
                SwaggerUi::new(routes::SWAGGER_UI)
                    .url(routes::OPENAPI_JSON, TitledApiDoc::openapi()),
            ),
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
