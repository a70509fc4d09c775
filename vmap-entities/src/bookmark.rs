use crate::{id::Id, time::Timestamp};

/// A place remembered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: Id,
    pub user_id: Id,
    pub place_id: Id,
    pub created_at: Timestamp,
}

impl Bookmark {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id.as_str() == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceBookmarkCount {
    pub place_id: Id,
    pub count: u64,
}
