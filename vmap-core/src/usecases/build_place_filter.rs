use super::{prelude::*, route_place_query::StructuredQuery};

/// Translate a structured query into the constraints of the store.
///
/// The pagination is forwarded unchanged, i.e. the store
/// never returns more places than a single page.
pub fn build_place_filter(query: StructuredQuery) -> (PlaceFilter, Pagination) {
    let StructuredQuery {
        area,
        category,
        vegan_option,
        pagination,
    } = query;
    let filter = PlaceFilter {
        area,
        category,
        vegan_option,
    };
    (filter, pagination)
}
