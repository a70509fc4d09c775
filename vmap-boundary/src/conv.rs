use super::*;
use vmap_entities as e;

impl From<e::geo::GeoPoint> for Point {
    fn from(from: e::geo::GeoPoint) -> Self {
        Self {
            geometry_type: GeometryType::Point,
            coordinates: from.to_coordinates(),
        }
    }
}

fn opening_hours_to_json(from: e::place::OpeningHours) -> JsonValue {
    let s = String::from(from);
    // Only text that has not been stored through the API lacks the JSON encoding
    serde_json::from_str(&s).unwrap_or(JsonValue::String(s))
}

/// Serialize opening hours for storage.
///
/// Every value is stored in its JSON encoding, strings included.
pub fn opening_hours_from_json(from: JsonValue) -> Option<String> {
    match from {
        JsonValue::Null => None,
        value => Some(value.to_string()),
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            category,
            category_image,
            vegan_option,
            phone,
            address,
            location,
            opening_hours,
            sns_url,
        } = from;
        let e::address::Address {
            street,
            lot_number,
            detail,
        } = address;
        Self {
            id: id.into(),
            name,
            category,
            category_img: category_image,
            vegan_option: vegan_option.to_string(),
            tel: phone,
            address: street,
            address_lot_number: lot_number,
            address_detail: detail,
            location: location.map(Into::into),
            open_times: opening_hours.map(opening_hours_to_json),
            sns_url: sns_url.map(|url| url.to_string()),
        }
    }
}

impl From<e::bookmark::Bookmark> for Bookmark {
    fn from(from: e::bookmark::Bookmark) -> Self {
        let e::bookmark::Bookmark {
            id,
            user_id,
            place_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            place_id: place_id.into(),
            created_at: created_at.as_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn place() -> e::place::Place {
        e::place::Place {
            id: "foo".into(),
            name: "Green Bowl".into(),
            category: "restaurant".into(),
            category_image: None,
            vegan_option: e::vegan::VeganOption::Unavailable,
            phone: None,
            address: e::address::Address {
                street: Some("Teheran-ro 123".into()),
                ..Default::default()
            },
            location: Some(e::geo::GeoPoint::from_lng_lat_deg(127.0276, 37.4979)),
            opening_hours: Some(r#"{"mon":"09:00-18:00"}"#.parse().unwrap()),
            sns_url: None,
        }
    }

    #[test]
    fn place_json() {
        let json = serde_json::to_value(Place::from(place())).unwrap();
        assert_eq!(
            json!({
                "id": "foo",
                "name": "Green Bowl",
                "category": "restaurant",
                "vegan_option": "none",
                "address": "Teheran-ro 123",
                "location": {
                    "type": "Point",
                    "coordinates": [127.0276, 37.4979]
                },
                "open_times": { "mon": "09:00-18:00" }
            }),
            json
        );
    }

    #[test]
    fn search_result_json() {
        let result = PlaceSearchResult {
            place: place().into(),
            distance: Some(12.5),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["id"], "foo");
        assert_eq!(json["distance"], 12.5);
        let result = PlaceSearchResult {
            place: place().into(),
            distance: None,
        };
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn plain_text_opening_hours() {
        let mut place = place();
        place.opening_hours = Some("Mo-Fr 09:00-18:00".parse().unwrap());
        let json = serde_json::to_value(Place::from(place)).unwrap();
        assert_eq!(json["open_times"], "Mo-Fr 09:00-18:00");
    }

    #[test]
    fn opening_hours_for_storage() {
        assert_eq!(None, opening_hours_from_json(JsonValue::Null));
        assert_eq!(
            Some(r#""Mo-Fr""#.to_string()),
            opening_hours_from_json(json!("Mo-Fr"))
        );
        assert_eq!(
            Some(r#"{"mon":"09:00-18:00"}"#.to_string()),
            opening_hours_from_json(json!({"mon": "09:00-18:00"}))
        );
    }

    #[test]
    fn opening_hours_keep_their_json_type() {
        for open_times in [
            json!("24"),
            json!("true"),
            json!("Mo-Fr 09:00-18:00"),
            json!(24),
            json!(true),
            json!(["mon", "tue"]),
            json!({"mon": "09:00-18:00"}),
        ] {
            let stored = opening_hours_from_json(open_times.clone()).unwrap();
            let mut place = place();
            place.opening_hours = Some(stored.parse().unwrap());
            let json = serde_json::to_value(Place::from(place)).unwrap();
            assert_eq!(open_times, json["open_times"]);
        }
    }
}
