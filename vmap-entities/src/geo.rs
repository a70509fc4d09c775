use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A geographical position in decimal degrees.
///
/// The coordinates are kept as an ordered pair with the
/// longitude first and the latitude second, which is also
/// the order of the raw `[lng, lat]` arrays accepted from
/// clients. Values are stored exactly as given, i.e. no
/// rounding or fixed-point conversion takes place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lng: f64,
    lat: f64,
}

impl GeoPoint {
    pub const LNG_DEG_MIN: f64 = -180.0;
    pub const LNG_DEG_MAX: f64 = 180.0;
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LAT_DEG_MAX: f64 = 90.0;

    pub fn from_lng_lat_deg(lng: f64, lat: f64) -> Self {
        let res = Self { lng, lat };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lng_lat_deg(lng: f64, lat: f64) -> Option<Self> {
        let res = Self { lng, lat };
        res.is_valid().then_some(res)
    }

    pub fn try_from_coordinates(coordinates: [f64; 2]) -> Option<Self> {
        let [lng, lat] = coordinates;
        Self::try_from_lng_lat_deg(lng, lat)
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn to_coordinates(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn is_valid(self) -> bool {
        (Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&self.lng)
            && (Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&self.lat)
    }

    fn to_lng_lat_rad(self) -> (f64, f64) {
        (self.lng.to_radians(), self.lat.to_radians())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeoPointParseError {
    #[error("Expected '<lng>,<lat>' but got '{0}'")]
    Format(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
}

fn parse_deg(s: &str, min: f64, max: f64) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| (min..=max).contains(deg))
}

impl FromStr for GeoPoint {
    type Err = GeoPointParseError;

    /// Parses `"<lng>,<lat>"`, optionally enclosed in square brackets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);
        let Some((lng_str, lat_str)) = inner.split(',').collect_tuple() else {
            return Err(GeoPointParseError::Format(s.to_owned()));
        };
        let lng = parse_deg(lng_str, Self::LNG_DEG_MIN, Self::LNG_DEG_MAX)
            .ok_or_else(|| GeoPointParseError::Longitude(lng_str.trim().to_owned()))?;
        let lat = parse_deg(lat_str, Self::LAT_DEG_MIN, Self::LAT_DEG_MAX)
            .ok_or_else(|| GeoPointParseError::Latitude(lat_str.trim().to_owned()))?;
        Ok(Self::from_lng_lat_deg(lng, lat))
    }
}

/// A distance on the surface of the earth in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl GeoPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    ///
    /// This is the only distance formula of the application.
    /// Both the geofence filters and the distance annotations
    /// of search results are based on it.
    ///
    /// Reference: <https://en.wikipedia.org/wiki/Great-circle_distance>
    pub fn distance(p1: GeoPoint, p2: GeoPoint) -> Distance {
        // Same argument order in both directions for bit-identical results
        let (p1, p2) = if (p1.lng, p1.lat) <= (p2.lng, p2.lat) {
            (p1, p2)
        } else {
            (p2, p1)
        };
        let (lng1_rad, lat1_rad) = p1.to_lng_lat_rad();
        let (lng2_rad, lat2_rad) = p2.to_lng_lat_rad();

        let (lat1_sin, lat1_cos) = lat1_rad.sin_cos();
        let (lat2_sin, lat2_cos) = lat2_rad.sin_cos();

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = dlng.sin_cos();

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}

/// A circular area around a center point.
///
/// Center and radius only exist together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCircle {
    pub center: GeoPoint,
    pub radius: Distance,
}

impl GeoCircle {
    pub fn new(center: GeoPoint, radius: Distance) -> Self {
        debug_assert!(radius.is_valid());
        Self { center, radius }
    }

    pub fn distance_from_center(&self, pt: GeoPoint) -> Distance {
        GeoPoint::distance(self.center, pt)
    }

    /// The boundary is inclusive.
    pub fn contains_point(&self, pt: GeoPoint) -> bool {
        self.distance_from_center(pt) <= self.radius
    }
}
