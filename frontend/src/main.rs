//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;
        use backend::{config::ProductSearchConfig, server_extra::products_route::products_router};

        let config = ProductSearchConfig::from_env();
        dioxus::logger::tracing::info!("Product search upstream: {}", config.url);

        Ok(dioxus::server::router(App)
            .merge(products_router(config))
            // request log for every route, server functions included
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::info!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
