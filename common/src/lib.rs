//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog;
pub mod filter_state;
pub mod product_query;
pub mod product_result;
pub mod debounce;
pub mod dispatch;
