// The locked pool connections implement the repositories
// by delegating to a borrowed connection.

use super::*;
use vmap_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, vmap_core::RepoError>;

macro_rules! delegate_repositories {
    ($db:ident) => {
        impl PlaceRepo for $db<'_> {
            fn get_place(&self, id: &str) -> Result<Option<Place>> {
                self.with_connection(|db| db.get_place(id))
            }
            fn find_places_by_keyword(&self, keyword: &str) -> Result<Vec<Place>> {
                self.with_connection(|db| db.find_places_by_keyword(keyword))
            }
            fn find_places(
                &self,
                filter: &PlaceFilter,
                pagination: &Pagination,
            ) -> Result<Vec<Place>> {
                self.with_connection(|db| db.find_places(filter, pagination))
            }
            fn create_place(&self, place: Place) -> Result<Option<Place>> {
                self.with_connection(|db| db.create_place(place))
            }
            fn update_place(&self, id: &str, patch: &PlacePatch) -> Result<Option<Place>> {
                self.with_connection(|db| db.update_place(id, patch))
            }
            fn delete_place(&self, id: &str) -> Result<Option<Place>> {
                self.with_connection(|db| db.delete_place(id))
            }
        }

        impl BookmarkRepo for $db<'_> {
            fn create_bookmark(&self, bookmark: Bookmark) -> Result<Option<Bookmark>> {
                self.with_connection(|db| db.create_bookmark(bookmark))
            }
            fn get_bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
                self.with_connection(|db| db.get_bookmark(id))
            }
            fn find_bookmark(&self, user_id: &str, place_id: &str) -> Result<Option<Bookmark>> {
                self.with_connection(|db| db.find_bookmark(user_id, place_id))
            }
            fn bookmarks_of_user(&self, user_id: &str) -> Result<Vec<Bookmark>> {
                self.with_connection(|db| db.bookmarks_of_user(user_id))
            }
            fn delete_bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
                self.with_connection(|db| db.delete_bookmark(id))
            }
            fn most_bookmarked_places(&self, limit: u64) -> Result<Vec<PlaceBookmarkCount>> {
                self.with_connection(|db| db.most_bookmarked_places(limit))
            }
        }
    };
}

delegate_repositories!(DbReadOnly);
delegate_repositories!(DbReadWrite);
