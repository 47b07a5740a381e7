use anyhow::Context;
use common::{product_query::ProductQueryRequest, product_result::ProductRecord};
use reqwest::header::CONTENT_TYPE;

use crate::config::ProductSearchConfig;

pub async fn product_search_post(
    config: &ProductSearchConfig,
    request: &ProductQueryRequest,
) -> anyhow::Result<Vec<ProductRecord>> {
    let body = serde_json::to_string(request)?;
    let t0 = std::time::Instant::now();

    let mut client = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        client = client.timeout(timeout);
    }
    let client = client.build().context("Failed to build search client")?;

    let response = client
        .post(&config.url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .with_context(|| format!("Product search request to {} failed", config.url))?;
    let status = response.status();
    let response_txt = response.text().await?;
    if !status.is_success() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    tracing::info!("SEARCH RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);

    let records: Vec<ProductRecord> = serde_json::from_str(&response_txt).context("Malformed product search response")?;
    Ok(records)
}
