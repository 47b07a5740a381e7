pub mod dioxus_timer;
pub mod filter_context;
pub mod product_query;
