//! Product card component.

use common::product_result::Product;
use dioxus::prelude::*;

#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();
    let size_and_color = product.size_and_color_label();
    let image_path = product.image_path();

    rsx! {
        div {
            class: "x-product-card",
            style: "position: relative;",
            div {
                class: "x-product-card-image",
                img {
                    src: "{image_path}",
                    alt: "{product.name}",
                    height: "1200",
                    width: "1200",
                    style: "width: 100%; height: 100%; object-fit: cover; object-position: center;",
                }
            }
            footer {
                style: "display: flex; justify-content: space-between; margin-top: 16px;",
                div {
                    h3 { style: "font-size: 14px; color: #374151;", "{product.name}" }
                    p { style: "margin-top: 4px; font-size: 14px; color: #6B7280;", "{size_and_color}" }
                }
                p { style: "font-size: 14px; font-weight: 500; color: #111827;", "{product.price}" }
            }
        }
    }
}
