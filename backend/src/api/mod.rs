//! API entry points called from server functions.

pub mod products;
