use super::prelude::*;
use crate::util::parse::{non_blank, parse_page_param, parse_radius_param};

/// Raw query parameters as they arrive from a client.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct PlaceQueryParams {
    pub search       : Option<String>,
    pub center       : Option<String>,
    pub radius       : Option<String>,
    pub category     : Option<String>,
    pub vegan_option : Option<String>,
    pub page_number  : Option<String>,
    pub page_size    : Option<String>,
}

/// Validated, typed search criteria of a place query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDescriptor {
    pub keyword: Option<String>,
    pub area: Option<GeoCircle>,
    pub category: Option<String>,
    pub vegan_option: Option<String>,
    pub pagination: Pagination,
}

/// Parse the raw parameters into a [`FilterDescriptor`].
///
/// Center and radius are a bonded pair: if exactly one of them
/// is given the query is rejected before anything else is parsed.
/// Category and vegan option codes are passed through as given.
pub fn normalize_place_query(params: PlaceQueryParams) -> Result<FilterDescriptor> {
    let PlaceQueryParams {
        search,
        center,
        radius,
        category,
        vegan_option,
        page_number,
        page_size,
    } = params;
    let area = match (non_blank(center), non_blank(radius)) {
        (Some(center), Some(radius)) => {
            let center = center.parse::<GeoPoint>()?;
            let radius = parse_radius_param(&radius).ok_or(Error::InvalidRadius)?;
            Some(GeoCircle::new(center, radius))
        }
        (None, None) => None,
        _ => return Err(Error::IncompleteGeofence),
    };
    let page_number = non_blank(page_number)
        .map(|n| parse_page_param(&n).ok_or(Error::InvalidPageNumber))
        .transpose()?;
    let page_size = non_blank(page_size)
        .map(|n| parse_page_param(&n).ok_or(Error::InvalidPageSize))
        .transpose()?;
    Ok(FilterDescriptor {
        keyword: non_blank(search),
        area,
        category: non_blank(category),
        vegan_option: non_blank(vegan_option),
        pagination: Pagination {
            page_number,
            page_size,
        },
    })
}
