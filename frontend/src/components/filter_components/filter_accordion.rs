//! Collapsible filter sections; at most one is open at a time.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdExpandMore};

use crate::components::filter_components::{
    option_checkbox::{ColorOptionList, SizeOptionList},
    price_filter::PriceFilterList,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSection {
    Color,
    Size,
    Price,
}

#[component]
pub fn FilterAccordion() -> Element {
    let expanded = use_signal(|| None::<FilterSection>);
    rsx! {
        div {
            id: "x-filter-accordion",
            AccordionItem {
                section: FilterSection::Color,
                title: "Color".to_string(),
                expanded,
                ColorOptionList {}
            }
            AccordionItem {
                section: FilterSection::Size,
                title: "Size".to_string(),
                expanded,
                SizeOptionList {}
            }
            AccordionItem {
                section: FilterSection::Price,
                title: "Price".to_string(),
                expanded,
                PriceFilterList {}
            }
        }
    }
}

#[component]
fn AccordionItem(section: FilterSection, title: String, mut expanded: Signal<Option<FilterSection>>, children: Element) -> Element {
    let is_expanded = *expanded.read() == Some(section);
    let chevron_rotation = if is_expanded { 180 } else { 0 };
    rsx! {
        div {
            style: "border-bottom: 1px solid #E5E7EB;",
            button {
                class: "x-accordion-trigger",
                onclick: move |_| {
                    let open = *expanded.peek() == Some(section);
                    expanded.set(if open { None } else { Some(section) });
                },
                span { style: "font-weight: 500; color: #111827;", "{title}" }
                Icon {
                    icon: MdExpandMore,
                    style: "width: 20px; height: 20px; color: #9CA3AF; transform: rotate({chevron_rotation}deg);",
                }
            }
            if is_expanded {
                div {
                    style: "padding-bottom: 16px;",
                    {children}
                }
            }
        }
    }
}
