//! Fixed option catalogs and tunables for the product listing page.

use std::time::Duration;

use crate::filter_state::{Color, Size, SortMode};

pub type PriceRange = [f64; 2];

pub const SORT_OPTIONS: [(SortMode, &str); 3] = [
    (SortMode::None, "None"),
    (SortMode::PriceAsc, "Price: Low to High"),
    (SortMode::PriceDesc, "Price: High to Low"),
];

pub const COLOR_OPTIONS: [(Color, &str); 5] = [
    (Color::White, "White"),
    (Color::Beige, "Beige"),
    (Color::Blue, "Blue"),
    (Color::Green, "Green"),
    (Color::Purple, "Purple"),
];

pub const SIZE_OPTIONS: [(Size, &str); 3] = [
    (Size::S, "S"),
    (Size::M, "M"),
    (Size::L, "L"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

pub const PRICE_PRESETS: [PricePreset; 3] = [
    PricePreset { label: "Any price", range: [0.0, 100.0] },
    PricePreset { label: "Under 20$", range: [0.0, 20.0] },
    PricePreset { label: "Under 40$", range: [0.0, 40.0] },
];

/// Full span of the custom price slider; switching to custom resets to this.
pub const DEFAULT_CUSTOM_PRICE: PriceRange = [0.0, 100.0];
pub const PRICE_SLIDER_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subcategory {
    pub name: &'static str,
    pub selectable: bool,
}

// only t-shirts are stocked for now, the rest render disabled
pub const SUBCATEGORIES: [Subcategory; 4] = [
    Subcategory { name: "T-Shirts", selectable: true },
    Subcategory { name: "Hoodies", selectable: false },
    Subcategory { name: "Sweatshirts", selectable: false },
    Subcategory { name: "Accessories", selectable: false },
];

/// Quiet period before a burst of filter changes turns into a single query.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// Skeleton cards shown while no result has arrived yet.
pub const PLACEHOLDER_COUNT: usize = 12;
