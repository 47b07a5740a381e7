use common::{catalog::PLACEHOLDER_COUNT, dispatch::QueryState};
use dioxus::prelude::*;

use crate::components::product_components::{product_card::ProductCard, product_skeleton::ProductSkeleton};

/// Renders records in the order the search service returned them.
#[component]
pub fn ProductGrid(query_state: ReadSignal<QueryState>) -> Element {
    let query_state = query_state.read();
    let Some(records) = query_state.latest() else {
        return rsx! {
            for placeholder_idx in 0..PLACEHOLDER_COUNT {
                ProductSkeleton { key: "{placeholder_idx}" }
            }
        };
    };

    rsx! {
        for record in records.iter().cloned() {
            li {
                key: "{record.id}",
                ProductCard { product: record.metadata }
            }
        }
    }
}
