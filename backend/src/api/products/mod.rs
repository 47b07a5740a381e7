//! Product search API and module exports.

mod search_products;
pub use search_products::{search_products, search_products_with};
