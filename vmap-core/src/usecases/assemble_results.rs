use super::prelude::*;

/// A search result with an optional, derived distance
/// from the center of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPlace {
    pub place: Place,
    pub distance: Option<Distance>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Annotate results of geofenced queries with
    /// their distance from the center.
    pub annotate_distance: bool,
}

/// Post-process the places returned by the store.
///
/// An empty result is reported as `not_found`. The distance is
/// only calculated if annotations are enabled and an origin is
/// given. The places themselves are never modified.
pub fn assemble_results(
    places: Vec<Place>,
    origin: Option<GeoPoint>,
    options: &SearchOptions,
    not_found: Error,
) -> Result<Vec<FoundPlace>> {
    if places.is_empty() {
        return Err(not_found);
    }
    let origin = origin.filter(|_| options.annotate_distance);
    let results = places
        .into_iter()
        .map(|place| {
            let distance = origin
                .zip(place.location)
                .map(|(origin, pos)| GeoPoint::distance(origin, pos));
            FoundPlace { place, distance }
        })
        .collect();
    Ok(results)
}
