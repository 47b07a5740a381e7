//! Outbound payload for the product search endpoint.

use serde::{Deserialize, Serialize};

use crate::{catalog::PriceRange, filter_state::{Color, FilterState, Size, SortMode}};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQueryRequest {
    pub filter: ProductQueryFilter,
}

/// Filter as sent on the wire. Only the numeric price band is transmitted,
/// the preset/custom distinction stays on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQueryFilter {
    pub sort: SortMode,
    pub color: Vec<Color>,
    pub size: Vec<Size>,
    pub price: PriceRange,
}

impl From<&FilterState> for ProductQueryFilter {
    fn from(state: &FilterState) -> Self {
        Self {
            sort: state.sort,
            color: state.color.iter().copied().collect(),
            size: state.size.iter().copied().collect(),
            price: state.price.range(),
        }
    }
}

impl From<&FilterState> for ProductQueryRequest {
    fn from(state: &FilterState) -> Self {
        Self { filter: state.into() }
    }
}
