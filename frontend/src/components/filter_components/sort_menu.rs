//! Sort dropdown in the page header.

use common::catalog::SORT_OPTIONS;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdExpandMore};

use crate::data_definitions::filter_context::FilterContext;

#[component]
pub fn SortMenu() -> Element {
    let filter_context = use_context::<FilterContext>();
    let filter = filter_context.filter;
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "x-sort-trigger",
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 14px;
                    font-weight: 500;
                    color: #374151;
                ",
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                "Sort"
                Icon { icon: MdExpandMore, style: "width: 20px; height: 20px; color: #9CA3AF;" }
            }
            if is_open() {
                // click-away layer
                div {
                    style: "position: fixed; inset: 0; z-index: 10;",
                    onclick: move |_| is_open.set(false),
                }
                div {
                    style: "
                        position: absolute;
                        right: 0;
                        top: 28px;
                        min-width: 200px;
                        background: white;
                        border-radius: 6px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        padding: 4px 0;
                        z-index: 20;
                    ",
                    for (mode, label) in SORT_OPTIONS {
                        button {
                            key: "{mode.as_str()}",
                            class: if filter.read().sort == mode { "x-sort-option x-sort-option-selected" } else { "x-sort-option" },
                            onclick: move |_| {
                                filter_context.update(|f| f.with_sort(mode));
                                is_open.set(false);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
