use rocket::FromForm;

use super::*;

/// Query string of a place search.
#[derive(FromForm, Debug, Default)]
pub struct PlaceQuery {
    search: Option<String>,
    center: Option<String>,
    radius: Option<String>,
    category: Option<String>,
    vegan_option: Option<String>,
    #[field(name = "pageNumber")]
    page_number: Option<String>,
    #[field(name = "pageSize")]
    page_size: Option<String>,
}

impl From<PlaceQuery> for usecases::PlaceQueryParams {
    fn from(from: PlaceQuery) -> Self {
        let PlaceQuery {
            search,
            center,
            radius,
            category,
            vegan_option,
            page_number,
            page_size,
        } = from;
        Self {
            search,
            center,
            radius,
            category,
            vegan_option,
            page_number,
            page_size,
        }
    }
}

#[get("/places/<id>")]
pub fn get_place(db: sqlite::Connections, id: String) -> Result<json::Place> {
    let place = {
        let db = db.shared()?;
        usecases::get_place(&db, &id)?
    };
    Ok(Json(place.into()))
}

#[get("/places?<query..>")]
pub fn get_places(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    query: PlaceQuery,
) -> Result<Vec<json::PlaceSearchResult>> {
    let options = usecases::SearchOptions {
        annotate_distance: cfg.annotate_distance,
    };
    let results = {
        let db = db.shared()?;
        usecases::search_places(&db, query.into(), &options)?
    };
    Ok(Json(
        results.into_iter().map(to_json::search_result).collect(),
    ))
}

#[post("/places", format = "application/json", data = "<data>")]
pub fn post_place(
    db: sqlite::Connections,
    data: JsonResult<json::NewPlace>,
) -> Result<json::MutationEnvelope<json::Place>> {
    let new_place = from_json::new_place(data?.into_inner());
    let mutation = db
        .exclusive()?
        .transaction(|db| usecases::create_place(db, new_place))?;
    Ok(Json(to_json::mutation(mutation)))
}

#[put("/places/<id>", format = "application/json", data = "<data>")]
pub fn put_place(
    db: sqlite::Connections,
    id: String,
    data: JsonResult<json::UpdatePlace>,
) -> Result<json::MutationEnvelope<json::Place>> {
    let update = from_json::update_place(data?.into_inner());
    let mutation = db
        .exclusive()?
        .transaction(|db| usecases::update_place(db, &id, update))?;
    Ok(Json(to_json::mutation(mutation)))
}

#[delete("/places/<id>")]
pub fn delete_place(
    db: sqlite::Connections,
    id: String,
) -> Result<json::MutationEnvelope<json::Place>> {
    let mutation = db
        .exclusive()?
        .transaction(|db| usecases::delete_place(db, &id))?;
    Ok(Json(to_json::mutation(mutation)))
}
