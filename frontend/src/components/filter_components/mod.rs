//! Filter controls for the product listing.

pub mod filter_accordion;
pub mod option_checkbox;
pub mod price_filter;
pub mod sort_menu;
pub mod subcategory_list;
