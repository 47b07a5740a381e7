//! Upstream search service helpers.

pub mod product_search_client;
