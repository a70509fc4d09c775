use crate::entities::{Distance, ParseError, Url};

/// Trims the value and drops it if nothing remains.
pub fn non_blank<S>(from: Option<S>) -> Option<String>
where
    S: AsRef<str>,
{
    from.as_ref()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Completes incomplete URLs before parsing
pub fn parse_lazy_url<S>(from: S) -> Result<Url, ParseError>
where
    S: Into<String>,
{
    let from = from.into();
    let from = from.trim();
    if from.is_empty() || from.contains("://") {
        Url::parse(from)
    } else {
        // Add the missing protocol by assuming https
        if from.starts_with("www.") {
            Url::parse(&format!("https://{from}"))
        } else {
            Url::parse(&format!("https://www.{from}"))
        }
    }
}

/// Parses a 1-based page parameter.
pub fn parse_page_param(from: &str) -> Option<u64> {
    from.trim().parse::<u64>().ok().filter(|n| *n >= 1)
}

/// Parses a radius in meters.
pub fn parse_radius_param(from: &str) -> Option<Distance> {
    from.trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(Distance::from_meters)
}
