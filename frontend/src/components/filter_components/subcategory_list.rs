use common::catalog::SUBCATEGORIES;
use dioxus::prelude::*;

#[component]
pub fn SubcategoryList() -> Element {
    rsx! {
        ul {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                border-bottom: 1px solid #E5E7EB;
                padding-bottom: 24px;
                font-size: 14px;
                font-weight: 500;
                color: #111827;
            ",
            for subcategory in SUBCATEGORIES {
                li {
                    key: "{subcategory.name}",
                    button {
                        class: "x-subcategory-button",
                        disabled: !subcategory.selectable,
                        "{subcategory.name}"
                    }
                }
            }
        }
    }
}
