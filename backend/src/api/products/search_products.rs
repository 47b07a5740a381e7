//! Product search endpoint for the listing grid.

use common::{product_query::{ProductQueryFilter, ProductQueryRequest}, product_result::ProductRecord};

use crate::{config::ProductSearchConfig, search_utils::product_search_client::product_search_post};

pub async fn search_products(filter: ProductQueryFilter) -> anyhow::Result<Vec<ProductRecord>> {
    search_products_with(&ProductSearchConfig::from_env(), filter).await
}

/// Forwards the filter untouched; ranking and sorting belong to the search service.
pub async fn search_products_with(config: &ProductSearchConfig, filter: ProductQueryFilter) -> anyhow::Result<Vec<ProductRecord>> {
    tracing::info!(
        "Searching products: sort={} colors={} sizes={} price={:?}",
        filter.sort.as_str(),
        filter.color.len(),
        filter.size.len(),
        filter.price
    );
    let request = ProductQueryRequest { filter };
    let records = product_search_post(config, &request).await?;
    tracing::info!("Search returned {} products", records.len());
    Ok(records)
}
