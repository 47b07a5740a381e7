//! Checkbox lists for the multi-select color and size filters.

use common::catalog::{COLOR_OPTIONS, SIZE_OPTIONS};
use dioxus::prelude::*;

use crate::data_definitions::filter_context::FilterContext;

#[component]
pub fn ColorOptionList() -> Element {
    let filter_context = use_context::<FilterContext>();
    let filter = filter_context.filter;
    rsx! {
        ul {
            class: "x-filter-option-list",
            for (option_idx, (color, label)) in COLOR_OPTIONS.into_iter().enumerate() {
                OptionCheckbox {
                    key: "{label}",
                    input_id: format!("color-{option_idx}"),
                    label: label.to_string(),
                    checked: filter.read().contains_color(color),
                    ontoggle: move |_| filter_context.update(|f| f.toggle_set_member(color)),
                }
            }
        }
    }
}

#[component]
pub fn SizeOptionList() -> Element {
    let filter_context = use_context::<FilterContext>();
    let filter = filter_context.filter;
    rsx! {
        ul {
            class: "x-filter-option-list",
            for (option_idx, (size, label)) in SIZE_OPTIONS.into_iter().enumerate() {
                OptionCheckbox {
                    key: "{label}",
                    input_id: format!("size-{option_idx}"),
                    label: label.to_string(),
                    checked: filter.read().contains_size(size),
                    ontoggle: move |_| filter_context.update(|f| f.toggle_set_member(size)),
                }
            }
        }
    }
}

#[component]
fn OptionCheckbox(input_id: String, label: String, checked: bool, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        li {
            style: "display: flex; align-items: center;",
            input {
                r#type: "checkbox",
                id: "{input_id}",
                class: "x-filter-input",
                checked: checked,
                onchange: move |_| ontoggle.call(()),
            }
            label {
                r#for: "{input_id}",
                class: "x-filter-label",
                "{label}"
            }
        }
    }
}
