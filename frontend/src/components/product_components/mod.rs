//! Product grid, cards and loading placeholders.

pub mod product_card;
pub mod product_grid;
pub mod product_skeleton;
