//! Environment configuration for the upstream product search service.

use std::time::Duration;

pub const DEFAULT_PRODUCT_SEARCH_URL: &str = "http://127.0.0.1:9200/products";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchConfig {
    /// Endpoint receiving `POST { filter }` and answering with product records.
    pub url: String,
    /// Transport timeout. Without one a hung request stays pending.
    pub timeout: Option<Duration>,
}

impl Default for ProductSearchConfig {
    fn default() -> Self {
        Self { url: DEFAULT_PRODUCT_SEARCH_URL.to_string(), timeout: None }
    }
}

impl ProductSearchConfig {
    /// Reads `PRODUCT_SEARCH_URL` and `PRODUCT_SEARCH_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("PRODUCT_SEARCH_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_SEARCH_URL.to_string());
        let timeout = lookup("PRODUCT_SEARCH_TIMEOUT_MS").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(ms) => Some(Duration::from_millis(ms)),
            Err(e) => {
                tracing::warn!("ignoring PRODUCT_SEARCH_TIMEOUT_MS={raw:?}: {e}");
                None
            }
        });
        Self { url, timeout }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<BTreeMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ProductSearchConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config, ProductSearchConfig::default());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ProductSearchConfig::from_lookup(lookup_in(&[
            ("PRODUCT_SEARCH_URL", " http://search.internal/products "),
            ("PRODUCT_SEARCH_TIMEOUT_MS", "2500"),
        ]));
        assert_eq!(config.url, "http://search.internal/products");
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn bad_or_zero_timeout_means_none() {
        let config = ProductSearchConfig::from_lookup(lookup_in(&[("PRODUCT_SEARCH_TIMEOUT_MS", "soon")]));
        assert_eq!(config.timeout, None);
        let config = ProductSearchConfig::from_lookup(lookup_in(&[("PRODUCT_SEARCH_TIMEOUT_MS", "0")]));
        assert_eq!(config.timeout, None);
    }
}
