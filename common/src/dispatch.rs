//! Query dispatcher: turns filter state into a product search request and
//! tracks the outcome for the listing.

use std::future::Future;

use crate::{filter_state::FilterState, product_query::ProductQueryRequest, product_result::ProductRecord};


/// The single failure kind of a dispatch. The variants only carry detail
/// for the diagnostic log; callers treat them all the same.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("search service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed search response: {0}")]
    Malformed(String),
}

/// Transport to the product search service.
pub trait ProductSearch {
    fn search(&self, request: ProductQueryRequest) -> impl Future<Output = Result<Vec<ProductRecord>, FetchError>>;
}

pub struct QueryDispatcher<S> {
    search: S,
}

impl<S: ProductSearch> QueryDispatcher<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }

    /// Runs one request/response cycle for `filter`.
    ///
    /// Failures are logged here and handed back so that [`QueryState::complete`]
    /// can keep the previous result.
    pub async fn dispatch(&self, filter: &FilterState) -> Result<Vec<ProductRecord>, FetchError> {
        let request = ProductQueryRequest::from(filter);
        tracing::debug!("dispatching product query: {:?}", request.filter);
        let outcome = self.search.search(request).await;
        match &outcome {
            Ok(records) => tracing::debug!("product query returned {} records", records.len()),
            Err(e) => tracing::error!("Error fetching products: {e}"),
        }
        outcome
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

/// Latest result slot plus request status, owned by the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    status: QueryStatus,
    latest: Option<Vec<ProductRecord>>,
    in_flight: usize,
}

impl QueryState {
    pub fn status(&self) -> QueryStatus {
        self.status
    }

    /// `None` until the first successful fetch.
    pub fn latest(&self) -> Option<&[ProductRecord]> {
        self.latest.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Marks a request as issued. The previous result stays visible.
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.status = QueryStatus::Pending;
    }

    /// Applies a finished request. Completions may arrive in any order; the
    /// last one to arrive wins the result slot.
    pub fn complete(&mut self, outcome: Result<Vec<ProductRecord>, FetchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let status = match outcome {
            Ok(records) => {
                self.latest = Some(records);
                QueryStatus::Success
            }
            Err(_) => QueryStatus::Failed,
        };
        self.status = if self.in_flight > 0 { QueryStatus::Pending } else { status };
    }
}
