use super::*;

#[get("/bookmarks/users")]
pub fn get_bookmarks_of_user(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::Bookmark>> {
    let user_id = auth.user_id()?;
    let bookmarks = {
        let db = db.shared()?;
        usecases::bookmarks_of_user(&db, user_id)?
    };
    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

#[get("/bookmarks")]
pub fn get_most_bookmarked_places(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
) -> Result<Vec<json::MostBookmarkedPlace>> {
    let places = {
        let db = db.shared()?;
        usecases::most_bookmarked_places(&db, cfg.most_bookmarked_limit)?
    };
    Ok(Json(places.into_iter().map(to_json::popular_place).collect()))
}

#[post("/bookmarks", format = "application/json", data = "<data>")]
pub fn post_bookmark(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::NewBookmark>,
) -> Result<json::MutationEnvelope<json::Bookmark>> {
    let user_id = auth.user_id()?;
    let json::NewBookmark { place_id } = data?.into_inner();
    let mutation = db
        .exclusive()?
        .transaction(|db| usecases::create_bookmark(db, user_id, &place_id))?;
    Ok(Json(to_json::mutation(mutation)))
}

#[delete("/bookmarks/<id>")]
pub fn delete_bookmark(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::MutationEnvelope<json::Bookmark>> {
    let user_id = auth.user_id()?;
    let mutation = db
        .exclusive()?
        .transaction(|db| usecases::delete_bookmark(db, user_id, &id))?;
    Ok(Json(to_json::mutation(mutation)))
}
