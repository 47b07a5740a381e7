//! Server-side transport between the storefront and the product search service.

pub mod config;
pub mod api;
pub mod search_utils;
pub mod server_extra;
