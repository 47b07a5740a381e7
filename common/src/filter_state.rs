//! Filter state for the product listing page and its pure update operations.
//!
//! A [`FilterState`] is never modified in place: every user interaction
//! produces a new value through one of the `with_*` / `toggle_*` methods.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{COLOR_OPTIONS, DEFAULT_CUSTOM_PRICE, PriceRange, SIZE_OPTIONS};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Beige,
    Blue,
    Green,
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

/// Multi-select field member, used by [`FilterState::toggle_set_member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSetMember {
    Color(Color),
    Size(Size),
}

impl From<Color> for FilterSetMember {
    fn from(value: Color) -> Self {
        FilterSetMember::Color(value)
    }
}

impl From<Size> for FilterSetMember {
    fn from(value: Size) -> Self {
        FilterSetMember::Size(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceFilter {
    Preset(PriceRange),
    Custom(PriceRange),
}

impl Default for PriceFilter {
    fn default() -> Self {
        PriceFilter::Preset(DEFAULT_CUSTOM_PRICE)
    }
}

impl PriceFilter {
    pub fn range(&self) -> PriceRange {
        match self {
            PriceFilter::Preset(range) | PriceFilter::Custom(range) => *range,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PriceFilter::Custom(_))
    }

    /// Bounds as shown to the user, lower first, whatever order the range was stored in.
    pub fn display_bounds(&self) -> (f64, f64) {
        let [a, b] = self.range();
        (a.min(b), a.max(b))
    }

    pub fn display_label(&self) -> String {
        let (min, max) = self.display_bounds();
        format!("{:.0}$ - {:.0}$", min, max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub sort: SortMode,
    pub color: BTreeSet<Color>,
    pub size: BTreeSet<Size>,
    pub price: PriceFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort: SortMode::None,
            color: COLOR_OPTIONS.iter().map(|(color, _)| *color).collect(),
            size: SIZE_OPTIONS.iter().map(|(size, _)| *size).collect(),
            price: PriceFilter::default(),
        }
    }
}

impl FilterState {
    /// Removes the value from its set if present, adds it otherwise.
    pub fn toggle_set_member(&self, member: impl Into<FilterSetMember>) -> Self {
        let mut next = self.clone();
        match member.into() {
            FilterSetMember::Color(color) => {
                if !next.color.remove(&color) {
                    next.color.insert(color);
                }
            }
            FilterSetMember::Size(size) => {
                if !next.size.remove(&size) {
                    next.size.insert(size);
                }
            }
        }
        next
    }

    pub fn with_sort(&self, sort: SortMode) -> Self {
        Self { sort, ..self.clone() }
    }

    pub fn with_preset_price(&self, range: PriceRange) -> Self {
        Self { price: PriceFilter::Preset(range), ..self.clone() }
    }

    /// Switches to custom pricing. Prior custom bounds are not kept.
    pub fn with_custom_price(&self) -> Self {
        Self { price: PriceFilter::Custom(DEFAULT_CUSTOM_PRICE), ..self.clone() }
    }

    /// Stores the slider range as given; the slider keeps `min <= max`.
    pub fn with_custom_range(&self, range: PriceRange) -> Self {
        Self { price: PriceFilter::Custom(range), ..self.clone() }
    }

    pub fn contains_color(&self, color: Color) -> bool {
        self.color.contains(&color)
    }

    pub fn contains_size(&self, size: Size) -> bool {
        self.size.contains(&size)
    }

    /// True when this exact preset band is the active price selection.
    pub fn is_preset_selected(&self, range: PriceRange) -> bool {
        self.price == PriceFilter::Preset(range)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRICE_PRESETS;

    #[test]
    fn default_state_selects_everything() {
        let state = FilterState::default();
        assert_eq!(state.sort, SortMode::None);
        assert_eq!(state.color.len(), COLOR_OPTIONS.len());
        assert_eq!(state.size.len(), SIZE_OPTIONS.len());
        assert_eq!(state.price, PriceFilter::Preset([0.0, 100.0]));
        assert!(!state.price.is_custom());
    }

    #[test]
    fn toggling_a_color_twice_restores_the_set() {
        let original = FilterState::default().toggle_set_member(Color::Green);
        for (color, _) in COLOR_OPTIONS {
            let round_trip = original.toggle_set_member(color).toggle_set_member(color);
            assert_eq!(round_trip.color, original.color, "color {color:?}");
        }
    }

    #[test]
    fn toggle_does_not_touch_the_input() {
        let state = FilterState::default();
        let next = state.toggle_set_member(Color::White);
        assert!(state.contains_color(Color::White));
        assert!(!next.contains_color(Color::White));
        assert_eq!(next.color.len(), 4);
        for color in [Color::Beige, Color::Blue, Color::Green, Color::Purple] {
            assert!(next.contains_color(color));
        }
    }

    #[test]
    fn toggle_size_adds_back_missing_value() {
        let state = FilterState::default().toggle_set_member(Size::M);
        assert!(!state.contains_size(Size::M));
        let state = state.toggle_set_member(Size::M);
        assert!(state.contains_size(Size::M));
        assert_eq!(state.color, FilterState::default().color);
    }

    #[test]
    fn empty_sets_are_allowed() {
        let mut state = FilterState::default();
        for (size, _) in SIZE_OPTIONS {
            state = state.toggle_set_member(size);
        }
        assert!(state.size.is_empty());
    }

    #[test]
    fn presets_are_never_custom() {
        for preset in PRICE_PRESETS {
            let state = FilterState::default().with_custom_range([30.0, 70.0]).with_preset_price(preset.range);
            assert!(!state.price.is_custom());
            assert_eq!(state.price.range(), preset.range);
            assert!(state.is_preset_selected(preset.range));
        }
    }

    #[test]
    fn under_twenty_preset_displays_its_bounds() {
        let state = FilterState::default().with_preset_price([0.0, 20.0]);
        assert_eq!(state.price.display_label(), "0$ - 20$");
        assert!(!state.is_preset_selected([0.0, 40.0]));
    }

    #[test]
    fn switching_to_custom_resets_the_range() {
        let state = FilterState::default()
            .with_custom_range([30.0, 70.0])
            .with_preset_price([0.0, 20.0])
            .with_custom_price();
        assert_eq!(state.price, PriceFilter::Custom([0.0, 100.0]));

        let state = FilterState::default().with_custom_range([15.0, 35.0]).with_custom_price();
        assert_eq!(state.price.range(), [0.0, 100.0]);
    }

    #[test]
    fn custom_preset_with_same_range_is_not_a_preset_selection() {
        let state = FilterState::default().with_custom_price();
        assert!(!state.is_preset_selected([0.0, 100.0]));
    }

    #[test]
    fn custom_range_from_slider() {
        let state = FilterState::default().with_custom_price().with_custom_range([30.0, 70.0]);
        assert!(state.price.is_custom());
        assert_eq!(state.price.display_label(), "30$ - 70$");
    }

    #[test]
    fn display_bounds_are_normalized() {
        let price = PriceFilter::Custom([80.0, 10.0]);
        assert_eq!(price.display_bounds(), (10.0, 80.0));
        assert_eq!(price.display_label(), "10$ - 80$");
        assert_eq!(price.range(), [80.0, 10.0]);
    }

    #[test]
    fn sort_is_replaced() {
        let state = FilterState::default().with_sort(SortMode::PriceDesc);
        assert_eq!(state.sort, SortMode::PriceDesc);
        assert_eq!(state.with_sort(SortMode::None).sort, SortMode::None);
        assert_eq!(SortMode::PriceAsc.as_str(), "price-asc");
    }
}
