use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use vmap_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod bookmark;
mod place;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

/// Constraint violations are rejected writes, not failures.
fn is_rejected_write(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation,
            _
        )
    )
}

fn load_url(url: String) -> Option<Url> {
    url.parse()
        .map_err(|err| {
            // This should never happen if URLs have been validated properly on insert
            log::error!("Failed to load URL '{url}': {err}");
        })
        .ok()
}

fn load_place(place: models::Place) -> Result<Place> {
    let models::Place {
        id,
        name,
        category,
        category_image,
        vegan_option,
        phone,
        street,
        lot_number,
        detail,
        lng,
        lat,
        opening_hours,
        sns_url,
    } = place;
    let vegan_option = VeganOption::try_from(vegan_option)
        .map_err(|err| repo::Error::Other(anyhow!("Invalid place {id}: {err}")))?;
    let location = match (lng, lat) {
        (Some(lng), Some(lat)) => GeoPoint::try_from_lng_lat_deg(lng, lat),
        _ => None,
    };
    Ok(Place {
        id: id.into(),
        name,
        category,
        category_image,
        vegan_option,
        phone,
        address: Address {
            street,
            lot_number,
            detail,
        },
        location,
        opening_hours: opening_hours.and_then(|oh| oh.parse().ok()),
        sns_url: sns_url.and_then(load_url),
    })
}

fn load_bookmark(bookmark: models::Bookmark) -> Bookmark {
    let models::Bookmark {
        id,
        user_id,
        place_id,
        created_at,
    } = bookmark;
    Bookmark {
        id: id.into(),
        user_id: user_id.into(),
        place_id: place_id.into(),
        created_at: Timestamp::from_millis(created_at),
    }
}

/// Escape the wildcards of a `LIKE` pattern.
fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
