//! Plain JSON `POST /api/products` route, for clients outside the Dioxus app.

use axum::{Json, Router, extract::State, http::StatusCode, response::{IntoResponse, Response}, routing::post};
use common::product_query::ProductQueryRequest;
use tracing::info;

use crate::{api::products::search_products_with, config::ProductSearchConfig};

pub const PRODUCTS_ROUTE_PATH: &str = "/api/products";

pub fn products_router(config: ProductSearchConfig) -> Router {
    Router::new()
        .route(PRODUCTS_ROUTE_PATH, post(products_route))
        .with_state(config)
}

pub async fn products_route(State(config): State<ProductSearchConfig>, Json(request): Json<ProductQueryRequest>) -> Response {
    info!("POST {}", PRODUCTS_ROUTE_PATH);
    match search_products_with(&config, request.filter).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::error!("products_route: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}
