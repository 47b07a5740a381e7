//! Price filter: preset bands, custom toggle and the two-handle range slider.

use common::catalog::{DEFAULT_CUSTOM_PRICE, PRICE_PRESETS, PRICE_SLIDER_STEP, PriceRange};
use dioxus::prelude::*;

use crate::data_definitions::filter_context::FilterContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliderHandle {
    Lower,
    Upper,
}

/// New range after dragging one handle. Handles that cross swap roles,
/// so the result is always ordered.
fn moved_range(current: PriceRange, handle: SliderHandle, value: f64) -> PriceRange {
    let [lower, upper] = current;
    let (a, b) = match handle {
        SliderHandle::Lower => (value, upper),
        SliderHandle::Upper => (lower, value),
    };
    [a.min(b), a.max(b)]
}

#[component]
pub fn PriceFilterList() -> Element {
    let filter_context = use_context::<FilterContext>();
    let filter = filter_context.filter;
    let price = filter.read().price;
    let custom_idx = PRICE_PRESETS.len();
    // the slider sits at full span until custom pricing is picked
    let slider_range = if price.is_custom() { price.range() } else { DEFAULT_CUSTOM_PRICE };

    rsx! {
        ul {
            class: "x-filter-option-list",
            for (option_idx, preset) in PRICE_PRESETS.into_iter().enumerate() {
                li {
                    key: "{preset.label}",
                    style: "display: flex; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "price",
                        id: "price-{option_idx}",
                        class: "x-filter-input",
                        checked: filter.read().is_preset_selected(preset.range),
                        onchange: move |_| filter_context.update(|f| f.with_preset_price(preset.range)),
                    }
                    label {
                        r#for: "price-{option_idx}",
                        class: "x-filter-label",
                        "{preset.label}"
                    }
                }
            }

            li {
                style: "display: flex; flex-direction: column; justify-content: center; gap: 8px;",
                div {
                    style: "display: flex; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "price",
                        id: "price-{custom_idx}",
                        class: "x-filter-input",
                        checked: price.is_custom(),
                        onchange: move |_| filter_context.update(|f| f.with_custom_price()),
                    }
                    label {
                        r#for: "price-{custom_idx}",
                        class: "x-filter-label",
                        "Custom"
                    }
                }

                div {
                    style: "display: flex; justify-content: space-between; font-size: 14px;",
                    p { style: "font-weight: 500;", "Price" }
                    div { "{price.display_label()}" }
                }

                PriceRangeSlider { range: slider_range, disabled: !price.is_custom() }
            }
        }
    }
}

#[component]
fn PriceRangeSlider(range: PriceRange, disabled: bool) -> Element {
    let filter_context = use_context::<FilterContext>();
    let [lower, upper] = range;
    let [min, max] = DEFAULT_CUSTOM_PRICE;

    let move_handle = move |handle: SliderHandle, event: Event<FormData>| {
        let Ok(value) = event.value().parse::<f64>() else {
            return;
        };
        filter_context.update(|f| f.with_custom_range(moved_range(f.price.range(), handle, value)));
    };

    rsx! {
        div {
            class: if disabled { "x-price-slider x-price-slider-disabled" } else { "x-price-slider" },
            input {
                r#type: "range",
                class: "x-price-slider-handle",
                aria_label: "Minimum price",
                min: "{min}",
                max: "{max}",
                step: "{PRICE_SLIDER_STEP}",
                value: "{lower}",
                disabled: disabled,
                oninput: move |event| move_handle(SliderHandle::Lower, event),
            }
            input {
                r#type: "range",
                class: "x-price-slider-handle",
                aria_label: "Maximum price",
                min: "{min}",
                max: "{max}",
                step: "{PRICE_SLIDER_STEP}",
                value: "{upper}",
                disabled: disabled,
                oninput: move |event| move_handle(SliderHandle::Upper, event),
            }
        }
    }
}
