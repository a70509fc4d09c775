use super::{mutation::Mutation, prelude::*};

/// A place together with the number of its bookmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularPlace {
    pub place: Place,
    pub count: u64,
}

fn authorized_user(user_id: &str) -> Result<&str> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(Error::Unauthorized);
    }
    Ok(user_id)
}

pub fn bookmarks_of_user<R>(repo: &R, user_id: &str) -> Result<Vec<Bookmark>>
where
    R: BookmarkRepo,
{
    let user_id = authorized_user(user_id)?;
    Ok(repo.bookmarks_of_user(user_id)?)
}

pub fn create_bookmark<R>(repo: &R, user_id: &str, place_id: &str) -> Result<Mutation<Bookmark>>
where
    R: PlaceRepo + BookmarkRepo,
{
    let user_id = authorized_user(user_id)?;
    let place = repo.get_place(place_id)?.ok_or(Error::PlaceNotFound)?;
    if repo
        .find_bookmark(user_id, place.id.as_str())?
        .is_some()
    {
        return Err(Error::BookmarkExists);
    }
    let bookmark = Bookmark {
        id: Id::new(),
        user_id: user_id.into(),
        place_id: place.id,
        created_at: Timestamp::now(),
    };
    log::debug!("Storing new bookmark: {bookmark:?}");
    let bookmark = repo
        .create_bookmark(bookmark)?
        .ok_or(Error::BookmarkCreation)?;
    Ok(Mutation::new("The bookmark has been created.", bookmark))
}

pub fn delete_bookmark<R>(repo: &R, user_id: &str, id: &str) -> Result<Mutation<Bookmark>>
where
    R: BookmarkRepo,
{
    let user_id = authorized_user(user_id)?;
    let bookmark = repo.get_bookmark(id)?.ok_or(Error::BookmarkNotFound)?;
    if !bookmark.is_owned_by(user_id) {
        return Err(Error::Forbidden);
    }
    let bookmark = repo.delete_bookmark(id)?.ok_or(Error::BookmarkNotFound)?;
    Ok(Mutation::new("The bookmark has been deleted.", bookmark))
}

pub fn most_bookmarked_places<R>(repo: &R, limit: u64) -> Result<Vec<PopularPlace>>
where
    R: PlaceRepo + BookmarkRepo,
{
    let counts = repo.most_bookmarked_places(limit)?;
    let mut results = Vec::with_capacity(counts.len());
    for PlaceBookmarkCount { place_id, count } in counts {
        match repo.get_place(place_id.as_str())? {
            Some(place) => results.push(PopularPlace { place, count }),
            None => {
                // Bookmarks are deleted together with their place
                log::warn!("Bookmarked place {place_id} does not exist");
            }
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use vmap_entities::builders::*;

    fn db_with_places(ids: &[&str]) -> MockDb {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .extend(ids.iter().map(|id| Place::build().id(id).name(id).finish()));
        db
    }

    #[test]
    fn create_bookmark_for_existing_place() {
        let db = db_with_places(&["p1"]);
        let Mutation { message, record } = create_bookmark(&db, "alice", "p1").unwrap();
        assert!(!message.is_empty());
        assert_eq!("alice", record.user_id.as_str());
        assert_eq!("p1", record.place_id.as_str());
        assert_eq!(vec![record], bookmarks_of_user(&db, "alice").unwrap());
        assert!(bookmarks_of_user(&db, "bob").unwrap().is_empty());
    }

    #[test]
    fn create_bookmark_for_missing_place() {
        let db = db_with_places(&[]);
        let err = create_bookmark(&db, "alice", "p1").unwrap_err();
        assert!(matches!(err, Error::PlaceNotFound));
    }

    #[test]
    fn create_duplicate_bookmark() {
        let db = db_with_places(&["p1"]);
        create_bookmark(&db, "alice", "p1").unwrap();
        let err = create_bookmark(&db, "alice", "p1").unwrap_err();
        assert!(matches!(err, Error::BookmarkExists));
        assert_eq!(ErrorKind::InvalidRequest, err.kind());
        assert!(create_bookmark(&db, "bob", "p1").is_ok());
    }

    #[test]
    fn rejected_bookmark() {
        let db = db_with_places(&["p1"]);
        db.reject_writes.set(true);
        let err = create_bookmark(&db, "alice", "p1").unwrap_err();
        assert!(matches!(err, Error::BookmarkCreation));
    }

    #[test]
    fn anonymous_user() {
        let db = db_with_places(&["p1"]);
        let err = create_bookmark(&db, " ", "p1").unwrap_err();
        assert_eq!(ErrorKind::Unauthorized, err.kind());
        let err = bookmarks_of_user(&db, "").unwrap_err();
        assert_eq!(ErrorKind::Unauthorized, err.kind());
    }

    #[test]
    fn delete_own_bookmark() {
        let db = db_with_places(&["p1"]);
        let bookmark = create_bookmark(&db, "alice", "p1").unwrap().record;
        let deleted = delete_bookmark(&db, "alice", bookmark.id.as_str())
            .unwrap()
            .record;
        assert_eq!(bookmark, deleted);
        assert!(bookmarks_of_user(&db, "alice").unwrap().is_empty());
        let err = delete_bookmark(&db, "alice", bookmark.id.as_str()).unwrap_err();
        assert!(matches!(err, Error::BookmarkNotFound));
    }

    #[test]
    fn delete_foreign_bookmark() {
        let db = db_with_places(&["p1"]);
        let bookmark = create_bookmark(&db, "alice", "p1").unwrap().record;
        let err = delete_bookmark(&db, "bob", bookmark.id.as_str()).unwrap_err();
        assert!(matches!(err, Error::Forbidden));
        assert_eq!(1, bookmarks_of_user(&db, "alice").unwrap().len());
    }

    #[test]
    fn most_bookmarked() {
        let db = db_with_places(&["p1", "p2", "p3"]);
        for user in ["alice", "bob", "carol"] {
            create_bookmark(&db, user, "p2").unwrap();
        }
        for user in ["alice", "bob"] {
            create_bookmark(&db, user, "p3").unwrap();
            create_bookmark(&db, user, "p1").unwrap();
        }
        let results = most_bookmarked_places(&db, 10).unwrap();
        let counts: Vec<_> = results
            .iter()
            .map(|r| (r.place.id.as_str(), r.count))
            .collect();
        assert_eq!(vec![("p2", 3), ("p1", 2), ("p3", 2)], counts);
        assert_eq!(2, most_bookmarked_places(&db, 2).unwrap().len());
    }
}
