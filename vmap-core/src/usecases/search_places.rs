use super::{
    assemble_results::{assemble_results, FoundPlace, SearchOptions},
    build_place_filter::build_place_filter,
    normalize_place_query::{normalize_place_query, PlaceQueryParams},
    prelude::*,
    route_place_query::{route_place_query, KeywordQuery, PlaceQuery, StructuredQuery},
};

/// Resolve raw query parameters into exactly one retrieval
/// strategy and execute it.
pub fn search_places<R>(
    repo: &R,
    params: PlaceQueryParams,
    options: &SearchOptions,
) -> Result<Vec<FoundPlace>>
where
    R: PlaceRepo,
{
    let descriptor = normalize_place_query(params)?;
    match route_place_query(descriptor) {
        PlaceQuery::Keyword(query) => {
            log::debug!("Searching places by keyword '{}'", query.keyword);
            find_places_by_keyword(repo, query)
        }
        PlaceQuery::Structured(query) => {
            log::debug!("Searching places by filter {query:?}");
            find_places_by_filter(repo, query, options)
        }
    }
}

pub fn find_places_by_keyword<R>(repo: &R, query: KeywordQuery) -> Result<Vec<FoundPlace>>
where
    R: PlaceRepo,
{
    let places = repo.find_places_by_keyword(&query.keyword)?;
    // The keyword path has no center, i.e. nothing to annotate
    assemble_results(places, None, &SearchOptions::default(), Error::NoKeywordMatch)
}

pub fn find_places_by_filter<R>(
    repo: &R,
    query: StructuredQuery,
    options: &SearchOptions,
) -> Result<Vec<FoundPlace>>
where
    R: PlaceRepo,
{
    let origin = query.area.map(|area| area.center);
    let (filter, pagination) = build_place_filter(query);
    let places = repo.find_places(&filter, &pagination)?;
    assemble_results(places, origin, options, Error::NoFilterMatch)
}
