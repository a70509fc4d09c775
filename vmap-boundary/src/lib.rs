use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// The only geometry type of the API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum GeometryType {
    Point,
}

/// A typed point: `{"type": "Point", "coordinates": [lng, lat]}`
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Point {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: [f64; 2],
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id                 : String,
    pub name               : String,
    pub category           : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_img       : Option<String>,
    pub vegan_option       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel                : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address            : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_lot_number : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_detail     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location           : Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_times         : Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_url            : Option<String>,
}

/// A search result.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceSearchResult {
    #[serde(flatten)]
    pub place: Place,
    /// Distance from the center of the query in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// The location is a raw `[lng, lat]` pair.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    pub name               : String,
    pub category           : String,
    pub category_img       : Option<String>,
    pub vegan_option       : String,
    pub tel                : Option<String>,
    pub address            : Option<String>,
    pub address_lot_number : Option<String>,
    pub address_detail     : Option<String>,
    pub location           : Option<[f64; 2]>,
    pub open_times         : Option<JsonValue>,
    pub sns_url            : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UpdatePlace {
    pub name               : Option<String>,
    pub category           : Option<String>,
    pub category_img       : Option<String>,
    pub vegan_option       : Option<String>,
    pub tel                : Option<String>,
    pub address            : Option<String>,
    pub address_lot_number : Option<String>,
    pub address_detail     : Option<String>,
    pub location           : Option<[f64; 2]>,
    pub open_times         : Option<JsonValue>,
    pub sns_url            : Option<String>,
}

/// Response of a successful create, update or delete.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MutationEnvelope<T> {
    pub message: String,
    pub record: T,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewBookmark {
    pub place_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MostBookmarkedPlace {
    pub place: Place,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message} ({http_status})")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
