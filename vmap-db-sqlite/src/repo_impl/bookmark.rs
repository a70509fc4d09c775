use super::*;

fn get_bookmark(conn: &mut SqliteConnection, id: &str) -> Result<Option<Bookmark>> {
    use schema::bookmarks::dsl;
    Ok(dsl::bookmarks
        .filter(dsl::id.eq(id))
        .first::<models::Bookmark>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_bookmark))
}

impl BookmarkRepo for DbConnection<'_> {
    fn create_bookmark(&self, bookmark: Bookmark) -> Result<Option<Bookmark>> {
        let Bookmark {
            id,
            user_id,
            place_id,
            created_at,
        } = &bookmark;
        let insertable = models::NewBookmark {
            id: id.as_str(),
            user_id: user_id.as_str(),
            place_id: place_id.as_str(),
            created_at: created_at.as_millis(),
        };
        let res = diesel::insert_into(schema::bookmarks::table)
            .values(&insertable)
            .execute(&mut *self.sqlite_conn());
        match res {
            Ok(_) => Ok(Some(bookmark)),
            Err(err) if is_rejected_write(&err) => {
                log::warn!("Rejected new bookmark of place {place_id}: {err}");
                Ok(None)
            }
            Err(err) => Err(from_diesel_err(err)),
        }
    }

    fn get_bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
        get_bookmark(&mut self.sqlite_conn(), id)
    }

    fn find_bookmark(&self, user_id: &str, place_id: &str) -> Result<Option<Bookmark>> {
        use schema::bookmarks::dsl;
        Ok(dsl::bookmarks
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::place_id.eq(place_id))
            .first::<models::Bookmark>(&mut *self.sqlite_conn())
            .optional()
            .map_err(from_diesel_err)?
            .map(load_bookmark))
    }

    fn bookmarks_of_user(&self, user_id: &str) -> Result<Vec<Bookmark>> {
        use schema::bookmarks::dsl;
        Ok(dsl::bookmarks
            .filter(dsl::user_id.eq(user_id))
            .order_by((dsl::created_at.desc(), dsl::id))
            .load::<models::Bookmark>(&mut *self.sqlite_conn())
            .map_err(from_diesel_err)?
            .into_iter()
            .map(load_bookmark)
            .collect())
    }

    fn delete_bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
        use schema::bookmarks::dsl;
        let mut conn = self.sqlite_conn();
        let Some(bookmark) = get_bookmark(&mut conn, id)? else {
            return Ok(None);
        };
        diesel::delete(dsl::bookmarks.filter(dsl::id.eq(id)))
            .execute(&mut *conn)
            .map_err(from_diesel_err)?;
        Ok(Some(bookmark))
    }

    fn most_bookmarked_places(&self, limit: u64) -> Result<Vec<PlaceBookmarkCount>> {
        use diesel::dsl::count_star;
        use schema::bookmarks::dsl;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let counts = dsl::bookmarks
            .group_by(dsl::place_id)
            .select((dsl::place_id, count_star()))
            .order_by((count_star().desc(), dsl::place_id))
            .limit(limit)
            .load::<(String, i64)>(&mut *self.sqlite_conn())
            .map_err(from_diesel_err)?;
        Ok(counts
            .into_iter()
            .map(|(place_id, count)| PlaceBookmarkCount {
                place_id: place_id.into(),
                count: count.max(0) as u64,
            })
            .collect())
    }
}
