//! Debounced product query bound to the page's filter signal.

use std::{cell::{Cell, RefCell}, rc::Rc};

use common::{
    catalog::DEBOUNCE_DELAY,
    debounce::DebounceGate,
    dispatch::{QueryDispatcher, QueryState},
    filter_state::FilterState,
};
use dioxus::prelude::*;

use crate::{api::product_api::ServerProductSearch, data_definitions::dioxus_timer::DioxusTimer};

#[derive(Clone, Copy, PartialEq)]
pub struct ProductQuery {
    pub state: ReadSignal<QueryState>,
    /// Re-runs the query for the current filter right away.
    pub refresh: Callback<()>,
}

/// Fetches once on mount, then once per burst of filter changes.
pub fn use_product_query(filter: ReadSignal<FilterState>) -> ProductQuery {
    let mut query_state = use_signal(QueryState::default);

    let dispatch = use_callback(move |snapshot: FilterState| {
        query_state.write().begin();
        spawn(async move {
            let outcome = QueryDispatcher::new(ServerProductSearch).dispatch(&snapshot).await;
            query_state.write().complete(outcome);
        });
    });

    let gate = use_hook(|| Rc::new(RefCell::new(DebounceGate::new(DioxusTimer, DEBOUNCE_DELAY))));
    let first_run = use_hook(|| Rc::new(Cell::new(true)));

    use_effect({
        let gate = gate.clone();
        move || {
            let snapshot = filter.read().clone();
            if first_run.replace(false) {
                dispatch(snapshot);
            } else {
                gate.borrow_mut().schedule(move || dispatch(snapshot));
            }
        }
    });

    use_drop(move || {
        if gate.borrow_mut().cancel() {
            dioxus::logger::tracing::debug!("dropped pending product query");
        }
    });

    let refresh = use_callback(move |_: ()| {
        let snapshot = filter.peek().clone();
        dispatch(snapshot);
    });

    ProductQuery { state: query_state.into(), refresh }
}
