//! Filter state shared by the page and its filter controls.

use common::filter_state::FilterState;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct FilterContext {
    pub filter: Signal<FilterState>,
}

impl FilterContext {
    /// Replaces the whole filter state with the result of `update`.
    pub fn update(mut self, update: impl FnOnce(&FilterState) -> FilterState) {
        let next = {
            let current = self.filter.peek();
            update(&*current)
        };
        self.filter.set(next);
    }
}
