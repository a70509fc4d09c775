use super::*;
use crate::adapters::json;
use vmap_entities::{builders::*, geo::GeoPoint, place::Place, vegan::VeganOption};

pub mod prelude {

    use crate::web::{self, api, sqlite};

    pub use crate::web::{
        tests::prelude::{LocalResponse as Response, *},
        Cfg,
    };

    pub fn setup() -> (Client, sqlite::Connections) {
        setup_with_cfg(default_cfg())
    }

    pub fn setup_with_cfg(cfg: Cfg) -> (Client, sqlite::Connections) {
        web::tests::setup(vec![("/", api::routes())], cfg)
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn auth_header(user_id: &str) -> Header<'static> {
        Header::new("Authorization", bearer_token(user_id))
    }
}

use self::prelude::*;

fn create_places(db: &sqlite::Connections, places: Vec<Place>) {
    let db = db.exclusive().unwrap();
    for place in places {
        assert!(db.create_place(place).unwrap().is_some());
    }
}

fn seoul_places() -> Vec<Place> {
    vec![
        Place::build()
            .id("a")
            .name("Green Bowl")
            .category("restaurant")
            .vegan_option(VeganOption::Full)
            .street("Teheran-ro 123")
            .pos(GeoPoint::from_lng_lat_deg(127.0, 37.5))
            .finish(),
        Place::build()
            .id("b")
            .name("Oat Cafe")
            .category("cafe")
            .vegan_option(VeganOption::Partial)
            .pos(GeoPoint::from_lng_lat_deg(127.0, 37.501))
            .finish(),
        Place::build()
            .id("c")
            .name("Soy Bakery")
            .category("bakery")
            .vegan_option(VeganOption::Full)
            .pos(GeoPoint::from_lng_lat_deg(127.1, 37.6))
            .finish(),
    ]
}

fn error_body(res: LocalResponse) -> json::Error {
    test_json(&res);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

mod places {
    use super::*;

    #[test]
    fn create_and_get_place() {
        let (client, _) = setup();
        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(
                r#"{
                "name": "Green Bowl",
                "category": "restaurant",
                "category_img": "restaurant.png",
                "vegan_option": "partial",
                "tel": "02-123-4567",
                "address": "Teheran-ro 123",
                "address_detail": "2F",
                "location": [127.0276, 37.4979],
                "open_times": {"mon":"09:00-18:00"},
                "sns_url": "instagram.com/greenbowl"
            }"#,
            )
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let created: json::MutationEnvelope<json::Place> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("The place has been created.", created.message);
        let place = created.record;
        assert_eq!("Green Bowl", place.name);
        assert_eq!("partial", place.vegan_option);
        assert_eq!(Some("2F"), place.address_detail.as_deref());
        assert_eq!(None, place.address_lot_number);
        assert_eq!(
            Some(json::Point {
                geometry_type: json::GeometryType::Point,
                coordinates: [127.0276, 37.4979],
            }),
            place.location
        );
        assert_eq!(
            Some(serde_json::json!({"mon":"09:00-18:00"})),
            place.open_times
        );
        assert_eq!(
            Some("https://www.instagram.com/greenbowl"),
            place.sns_url.as_deref()
        );

        let res = client.get(format!("/places/{}", place.id)).dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let body = res.into_string().unwrap();
        assert!(body.contains(r#""location":{"type":"Point","coordinates":[127.0276,37.4979]}"#));
        let fetched: json::Place = serde_json::from_str(&body).unwrap();
        assert_eq!(place, fetched);
    }

    #[test]
    fn create_place_with_invalid_attributes() {
        let (client, _) = setup();
        for body in [
            r#"{"name":" ","category":"cafe","vegan_option":"full"}"#,
            r#"{"name":"foo","category":"cafe","vegan_option":"meat"}"#,
            r#"{"name":"foo","category":"cafe","vegan_option":"full","location":[37.5,127.0]}"#,
        ] {
            let res = client
                .post("/places")
                .header(ContentType::JSON)
                .body(body)
                .dispatch();
            assert_eq!(res.status(), Status::BadRequest);
            assert_eq!(400, error_body(res).http_status);
        }
    }

    #[test]
    fn create_place_with_malformed_json() {
        let (client, _) = setup();
        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(r#"{"name":"foo","#)
            .dispatch();
        assert_eq!(res.status(), Status::UnprocessableEntity);
        assert_eq!(422, error_body(res).http_status);
    }

    #[test]
    fn get_missing_place() {
        let (client, _) = setup();
        let res = client.get("/places/does-not-exist").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let err = error_body(res);
        assert_eq!(404, err.http_status);
        assert_eq!("The place does not exist", err.message);
    }

    #[test]
    fn search_with_incomplete_geofence() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        for query in ["center=127.0,37.5", "radius=500", "search=bowl&radius=500"] {
            let res = client.get(format!("/places?{query}")).dispatch();
            assert_eq!(res.status(), Status::BadRequest);
            assert_eq!(400, error_body(res).http_status);
        }
    }

    #[test]
    fn search_with_invalid_parameters() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        for query in [
            "center=east,37.5&radius=500",
            "center=127.0,37.5&radius=-1",
            "pageNumber=0",
            "pageSize=ten",
        ] {
            let res = client.get(format!("/places?{query}")).dispatch();
            assert_eq!(res.status(), Status::BadRequest);
        }
    }

    #[test]
    fn search_by_keyword_ignores_filters() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client
            .get("/places?search=BOWL&category=cafe&vegan_option=partial")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let results: Vec<json::PlaceSearchResult> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("a", results[0].place.id);
        assert_eq!(None, results[0].distance);
    }

    #[test]
    fn search_by_filter() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client
            .get("/places?center=127.0,37.5&radius=500&vegan_option=full")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(!body.contains("distance"));
        let results: Vec<json::PlaceSearchResult> = serde_json::from_str(&body).unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.place.id.as_str()).collect();
        assert_eq!(vec!["a"], ids);

        let res = client.get("/places?pageSize=2&pageNumber=2").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let results: Vec<json::PlaceSearchResult> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.place.id.as_str()).collect();
        assert_eq!(vec!["c"], ids);
    }

    #[test]
    fn search_with_distance_annotation() {
        let (client, db) = setup_with_cfg(Cfg {
            annotate_distance: true,
            ..default_cfg()
        });
        create_places(&db, seoul_places());
        let res = client
            .get("/places?center=127.0,37.5&radius=500")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let results: Vec<json::PlaceSearchResult> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(2, results.len());
        assert_eq!(Some(0.0), results[0].distance);
        let distance = results[1].distance.unwrap();
        assert!(distance > 100.0 && distance < 120.0);

        // Without a center there is nothing to annotate
        let res = client.get("/places?category=bakery").dispatch();
        let results: Vec<json::PlaceSearchResult> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(None, results[0].distance);
    }

    #[test]
    fn search_without_results() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client.get("/places?search=pizza").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!("No place matches the search term", error_body(res).message);

        let res = client.get("/places?category=bar").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!("No place matches the filter", error_body(res).message);
    }

    #[test]
    fn update_place() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client
            .put("/places/b")
            .header(ContentType::JSON)
            .body(r#"{"name":"Oat Coffee","location":[126.9,37.4]}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let updated: json::MutationEnvelope<json::Place> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("The place has been updated.", updated.message);
        assert_eq!("Oat Coffee", updated.record.name);
        assert_eq!("cafe", updated.record.category);
        assert_eq!(
            [126.9, 37.4],
            updated.record.location.unwrap().coordinates
        );
        let stored = db.shared().unwrap().get_place("b").unwrap().unwrap();
        assert_eq!("Oat Coffee", stored.name);
    }

    #[test]
    fn update_missing_place() {
        let (client, _) = setup();
        let res = client
            .put("/places/x")
            .header(ContentType::JSON)
            .body(r#"{"name":"foo"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn delete_place() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client.delete("/places/a").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let deleted: json::MutationEnvelope<json::Place> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("The place has been deleted.", deleted.message);
        assert_eq!("a", deleted.record.id);
        assert!(db.shared().unwrap().get_place("a").unwrap().is_none());

        let res = client.delete("/places/a").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }
}

mod bookmarks {
    use super::*;

    fn post_bookmark<'c>(client: &'c Client, user_id: &str, place_id: &str) -> LocalResponse<'c> {
        client
            .post("/bookmarks")
            .header(ContentType::JSON)
            .header(auth_header(user_id))
            .body(format!(r#"{{"place_id":"{place_id}"}}"#))
            .dispatch()
    }

    fn bookmark_id(res: LocalResponse) -> String {
        assert_eq!(res.status(), Status::Ok);
        let created: json::MutationEnvelope<json::Bookmark> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        created.record.id
    }

    #[test]
    fn bookmarks_require_a_valid_token() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let res = client.get("/bookmarks/users").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        assert_eq!(401, error_body(res).http_status);

        let res = client
            .post("/bookmarks")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", "Bearer invalid"))
            .body(r#"{"place_id":"a"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);

        let res = client.delete("/bookmarks/foo").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn create_and_list_bookmarks() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        bookmark_id(post_bookmark(&client, "alice", "a"));
        bookmark_id(post_bookmark(&client, "alice", "b"));
        bookmark_id(post_bookmark(&client, "bob", "a"));

        let res = client
            .get("/bookmarks/users")
            .header(auth_header("alice"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let bookmarks: Vec<json::Bookmark> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(2, bookmarks.len());
        assert!(bookmarks.iter().all(|b| b.user_id == "alice"));

        let res = client
            .get("/bookmarks/users")
            .header(auth_header("carol"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!("[]", res.into_string().unwrap());
    }

    #[test]
    fn reject_invalid_bookmarks() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        bookmark_id(post_bookmark(&client, "alice", "a"));

        let res = post_bookmark(&client, "alice", "a");
        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(
            "The place has already been bookmarked",
            error_body(res).message
        );

        let res = post_bookmark(&client, "alice", "x");
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn delete_bookmarks() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        let id = bookmark_id(post_bookmark(&client, "alice", "a"));

        let res = client
            .delete(format!("/bookmarks/{id}"))
            .header(auth_header("bob"))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        assert_eq!(403, error_body(res).http_status);

        let res = client
            .delete(format!("/bookmarks/{id}"))
            .header(auth_header("alice"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let deleted: json::MutationEnvelope<json::Bookmark> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(id, deleted.record.id);

        let res = client
            .delete(format!("/bookmarks/{id}"))
            .header(auth_header("alice"))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn most_bookmarked_places() {
        let (client, db) = setup_with_cfg(Cfg {
            most_bookmarked_limit: 2,
            ..default_cfg()
        });
        create_places(&db, seoul_places());
        for (user, place) in [
            ("alice", "c"),
            ("bob", "c"),
            ("alice", "b"),
            ("carol", "a"),
            ("dave", "c"),
        ] {
            bookmark_id(post_bookmark(&client, user, place));
        }

        let res = client.get("/bookmarks").dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let popular: Vec<json::MostBookmarkedPlace> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let counts: Vec<_> = popular
            .iter()
            .map(|p| (p.place.id.as_str(), p.count))
            .collect();
        assert_eq!(vec![("c", 3), ("a", 1)], counts);
    }

    #[test]
    fn deleting_a_place_deletes_its_bookmarks() {
        let (client, db) = setup();
        create_places(&db, seoul_places());
        bookmark_id(post_bookmark(&client, "alice", "a"));
        let res = client.delete("/places/a").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(db
            .shared()
            .unwrap()
            .bookmarks_of_user("alice")
            .unwrap()
            .is_empty());
    }
}

#[test]
fn get_version() {
    let (client, _) = setup();
    let res = client.get("/server/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}
