use super::{normalize_place_query::FilterDescriptor, prelude::*};

/// Free-text search that ignores all structured constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub keyword: String,
}

/// Geofence, equality and pagination constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredQuery {
    pub area: Option<GeoCircle>,
    pub category: Option<String>,
    pub vegan_option: Option<String>,
    pub pagination: Pagination,
}

/// The single retrieval strategy of a place query.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceQuery {
    Keyword(KeywordQuery),
    Structured(StructuredQuery),
}

/// A keyword takes exclusive precedence: all other
/// criteria of the descriptor are discarded.
pub fn route_place_query(descriptor: FilterDescriptor) -> PlaceQuery {
    let FilterDescriptor {
        keyword,
        area,
        category,
        vegan_option,
        pagination,
    } = descriptor;
    match keyword.filter(|k| !k.trim().is_empty()) {
        Some(keyword) => PlaceQuery::Keyword(KeywordQuery { keyword }),
        None => PlaceQuery::Structured(StructuredQuery {
            area,
            category,
            vegan_option,
            pagination,
        }),
    }
}
