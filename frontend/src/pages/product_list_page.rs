use common::{dispatch::QueryStatus, filter_state::FilterState};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_navigation_icons::MdRefresh}};

use crate::{
    components::{
        error_boundary::ComponentErrorBoundary,
        filter_components::{filter_accordion::FilterAccordion, sort_menu::SortMenu, subcategory_list::SubcategoryList},
        product_components::product_grid::ProductGrid,
    },
    data_definitions::{filter_context::FilterContext, product_query::use_product_query},
};

/// Product listing page
#[component]
pub fn ProductListPage() -> Element {
    let filter = use_signal(FilterState::default);
    use_context_provider(|| FilterContext { filter });
    let products = use_product_query(filter.into());
    let is_pending = products.state.read().status() == QueryStatus::Pending;
    let refresh = products.refresh;

    rsx! {
        Title { "Cotton Selection" }
        main {
            id: "x-product-list-page",
            style: "
                margin: 0 auto;
                max-width: 1280px;
                padding: 0 32px;
            ",
            div {
                id: "x-product-list-header",
                style: "
                    display: flex;
                    align-items: baseline;
                    justify-content: space-between;
                    border-bottom: 1px solid #E5E7EB;
                    padding-bottom: 24px;
                    padding-top: 96px;
                ",
                h1 {
                    style: "font-size: 36px; font-weight: 700; letter-spacing: -0.025em; color: #111827;",
                    "High-quality cotton selection"
                }
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    SortMenu {}
                    button {
                        class: "x-icon-button",
                        title: "Refresh products",
                        disabled: is_pending,
                        onclick: move |_| refresh(()),
                        Icon { icon: MdRefresh, style: "width: 20px; height: 20px;" }
                    }
                    button {
                        class: "x-icon-button x-mobile-only",
                        title: "Filters",
                        Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
                    }
                }
            }

            section {
                style: "padding-top: 24px; padding-bottom: 96px;",
                div {
                    id: "x-product-list-body",
                    div {
                        id: "x-product-list-filters",
                        SubcategoryList {}
                        FilterAccordion {}
                    }
                    ul {
                        id: "x-product-grid",
                        ComponentErrorBoundary {
                            ProductGrid { query_state: products.state }
                        }
                    }
                }
            }
        }
    }
}
