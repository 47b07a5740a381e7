//! Client API calls for the product search endpoint.

use common::{
    dispatch::{FetchError, ProductSearch},
    product_query::{ProductQueryFilter, ProductQueryRequest},
    product_result::ProductRecord,
};
use dioxus::prelude::*;


/// The request body is `{ "filter": { sort, color, size, price } }`.
#[server]
pub async fn search_products(filter: ProductQueryFilter) -> Result<Vec<ProductRecord>, ServerFnError> {
    let x = backend::api::products::search_products(filter).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

/// Dispatcher transport going through the `search_products` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerProductSearch;

impl ProductSearch for ServerProductSearch {
    fn search(&self, request: ProductQueryRequest) -> impl Future<Output = Result<Vec<ProductRecord>, FetchError>> {
        async move { search_products(request.filter).await.map_err(fetch_error_from_server_fn) }
    }
}

fn fetch_error_from_server_fn(e: ServerFnError) -> FetchError {
    match e {
        ServerFnError::ServerError { message, code, .. } => FetchError::Status {
            status: status_from_code(code),
            body: message,
        },
        other => FetchError::Transport(other.to_string()),
    }
}

/// Out-of-range codes are reported as a plain server error.
fn status_from_code(code: impl TryInto<u16>) -> u16 {
    code.try_into().unwrap_or(500)
}
