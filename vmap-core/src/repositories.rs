// Low-level store access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository, except
// for cascading deletes that the store enforces itself.
//
// Missing records are reported as `None` and never as
// an error: it is up to the use cases to decide whether
// an absent record is a failure or not.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Page-based pagination that is pushed down into the store.
///
/// Both values are 1-based. Absent values fall back to the
/// defaults of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

impl Pagination {
    pub const DEFAULT_PAGE_NUMBER: u64 = 1;
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub fn limit(&self) -> u64 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        let page_index = self
            .page_number
            .unwrap_or(Self::DEFAULT_PAGE_NUMBER)
            .saturating_sub(1);
        page_index.saturating_mul(self.limit())
    }
}

/// Equality and geofence constraints of a structured place query.
///
/// An absent constraint does not restrict the result,
/// i.e. `category: None` matches all categories and not
/// only places without a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    pub area: Option<GeoCircle>,
    pub category: Option<String>,
    pub vegan_option: Option<String>,
}

impl PlaceFilter {
    /// The reference semantics of the filter for stores
    /// that evaluate it in memory.
    pub fn matches(&self, place: &Place) -> bool {
        if let Some(area) = &self.area {
            let Some(pos) = place.location else {
                return false;
            };
            if !area.contains_point(pos) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &place.category != category {
                return false;
            }
        }
        if let Some(code) = &self.vegan_option {
            // Unknown codes are passed through and simply match nothing
            if code.parse::<VeganOption>().ok() != Some(place.vegan_option) {
                return false;
            }
        }
        true
    }
}

pub trait PlaceRepo {
    fn get_place(&self, id: &str) -> Result<Option<Place>>;

    /// All places that match the keyword, ordered by name.
    ///
    /// The keyword matches case-insensitively for ASCII letters
    /// and case-sensitively for all other characters.
    fn find_places_by_keyword(&self, keyword: &str) -> Result<Vec<Place>>;

    /// A single page of all places that match the filter,
    /// ordered by name and id.
    fn find_places(&self, filter: &PlaceFilter, pagination: &Pagination) -> Result<Vec<Place>>;

    /// Returns `None` if the store rejected the new place.
    fn create_place(&self, place: Place) -> Result<Option<Place>>;

    /// Returns `None` if no place with the given id exists.
    fn update_place(&self, id: &str, patch: &PlacePatch) -> Result<Option<Place>>;

    /// Deletes the place together with all of its bookmarks.
    ///
    /// Returns `None` if no place with the given id exists.
    fn delete_place(&self, id: &str) -> Result<Option<Place>>;
}

pub trait BookmarkRepo {
    /// Returns `None` if the store rejected the new bookmark.
    fn create_bookmark(&self, bookmark: Bookmark) -> Result<Option<Bookmark>>;

    fn get_bookmark(&self, id: &str) -> Result<Option<Bookmark>>;

    fn find_bookmark(&self, user_id: &str, place_id: &str) -> Result<Option<Bookmark>>;

    /// Newest first.
    fn bookmarks_of_user(&self, user_id: &str) -> Result<Vec<Bookmark>>;

    fn delete_bookmark(&self, id: &str) -> Result<Option<Bookmark>>;

    /// Bookmark counts per place in descending order,
    /// ties are ordered by place id.
    fn most_bookmarked_places(&self, limit: u64) -> Result<Vec<PlaceBookmarkCount>>;
}
