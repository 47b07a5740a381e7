use dioxus::prelude::*;

#[component]
pub fn ProductSkeleton() -> Element {
    rsx! {
        li {
            class: "x-product-skeleton",
            div {
                class: "x-skeleton-block",
                style: "aspect-ratio: 1 / 1; width: 100%; border-radius: 6px;",
            }
            div {
                style: "display: flex; flex-direction: column; gap: 8px; margin-top: 16px;",
                div { class: "x-skeleton-block", style: "height: 16px; width: 66%;" }
                div { class: "x-skeleton-block", style: "height: 16px; width: 33%;" }
            }
        }
    }
}
