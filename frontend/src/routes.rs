use dioxus::prelude::*;

use crate::pages::product_list_page::ProductListPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ProductListPage {},
}
