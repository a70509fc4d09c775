use super::*;
use crate::functions::geo_distance;

fn into_new_place(place: &Place) -> models::NewPlace<'_> {
    let Place {
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
    } = place;
    models::NewPlace {
        id: id.as_str(),
        name,
        category,
        category_image: category_image.as_deref(),
        vegan_option: (*vegan_option).into(),
        phone: phone.as_deref(),
        street: address.street.as_deref(),
        lot_number: address.lot_number.as_deref(),
        detail: address.detail.as_deref(),
        lng: location.map(GeoPoint::lng),
        lat: location.map(GeoPoint::lat),
        opening_hours: opening_hours.as_ref().map(OpeningHours::as_str),
        sns_url: sns_url.as_ref().map(Url::as_str),
    }
}

fn into_changeset(patch: &PlacePatch) -> models::PlaceChangeset<'_> {
    let PlacePatch {
        name,
        category,
        category_image,
        vegan_option,
        phone,
        street,
        lot_number,
        detail,
        location,
        opening_hours,
        sns_url,
    } = patch;
    models::PlaceChangeset {
        name: name.as_deref(),
        category: category.as_deref(),
        category_image: category_image.as_deref(),
        vegan_option: vegan_option.map(Into::into),
        phone: phone.as_deref(),
        street: street.as_deref(),
        lot_number: lot_number.as_deref(),
        detail: detail.as_deref(),
        lng: location.map(GeoPoint::lng),
        lat: location.map(GeoPoint::lat),
        opening_hours: opening_hours.as_ref().map(OpeningHours::as_str),
        sns_url: sns_url.as_ref().map(Url::as_str),
    }
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Option<Place>> {
    use schema::places::dsl;
    dsl::places
        .filter(dsl::id.eq(id))
        .first::<models::Place>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_place)
        .transpose()
}

impl PlaceRepo for DbConnection<'_> {
    fn get_place(&self, id: &str) -> Result<Option<Place>> {
        get_place(&mut self.sqlite_conn(), id)
    }

    fn find_places_by_keyword(&self, keyword: &str) -> Result<Vec<Place>> {
        use schema::places::dsl;
        // LIKE is case-insensitive for ASCII characters
        let pattern = like_pattern(keyword.trim());
        dsl::places
            .filter(
                dsl::name
                    .like(&pattern)
                    .escape('\\')
                    .or(dsl::category.like(&pattern).escape('\\'))
                    .or(dsl::street.like(&pattern).escape('\\'))
                    .or(dsl::lot_number.like(&pattern).escape('\\'))
                    .or(dsl::detail.like(&pattern).escape('\\')),
            )
            .order_by((dsl::name, dsl::id))
            .load::<models::Place>(&mut *self.sqlite_conn())
            .map_err(from_diesel_err)?
            .into_iter()
            .map(load_place)
            .collect()
    }

    fn find_places(&self, filter: &PlaceFilter, pagination: &Pagination) -> Result<Vec<Place>> {
        use schema::places::dsl;
        let PlaceFilter {
            area,
            category,
            vegan_option,
        } = filter;
        let mut query = dsl::places.into_boxed();
        if let Some(area) = area {
            let GeoCircle { center, radius } = area;
            query = query.filter(
                geo_distance(dsl::lng, dsl::lat, center.lng(), center.lat())
                    .le(radius.to_meters()),
            );
        }
        if let Some(category) = category {
            query = query.filter(dsl::category.eq(category));
        }
        if let Some(code) = vegan_option {
            let Ok(vegan_option) = code.parse::<VeganOption>() else {
                log::debug!("No places with unknown vegan option '{code}'");
                return Ok(vec![]);
            };
            query = query.filter(dsl::vegan_option.eq(VeganOptionPrimitive::from(vegan_option)));
        }
        let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
        let limit = i64::try_from(pagination.limit()).unwrap_or(i64::MAX);
        query
            .order_by((dsl::name, dsl::id))
            .offset(offset)
            .limit(limit)
            .load::<models::Place>(&mut *self.sqlite_conn())
            .map_err(from_diesel_err)?
            .into_iter()
            .map(load_place)
            .collect()
    }

    fn create_place(&self, place: Place) -> Result<Option<Place>> {
        let res = diesel::insert_into(schema::places::table)
            .values(&into_new_place(&place))
            .execute(&mut *self.sqlite_conn());
        match res {
            Ok(_) => Ok(Some(place)),
            Err(err) if is_rejected_write(&err) => {
                log::warn!("Rejected new place {}: {err}", place.id);
                Ok(None)
            }
            Err(err) => Err(from_diesel_err(err)),
        }
    }

    fn update_place(&self, id: &str, patch: &PlacePatch) -> Result<Option<Place>> {
        use schema::places::dsl;
        let mut conn = self.sqlite_conn();
        if patch.is_empty() {
            return get_place(&mut conn, id);
        }
        let count = diesel::update(dsl::places.filter(dsl::id.eq(id)))
            .set(&into_changeset(patch))
            .execute(&mut *conn)
            .map_err(from_diesel_err)?;
        if count == 0 {
            return Ok(None);
        }
        debug_assert_eq!(1, count);
        get_place(&mut conn, id)
    }

    fn delete_place(&self, id: &str) -> Result<Option<Place>> {
        use schema::places::dsl;
        let mut conn = self.sqlite_conn();
        let Some(place) = get_place(&mut conn, id)? else {
            return Ok(None);
        };
        // The bookmarks are deleted by the foreign key constraint
        let count = diesel::delete(dsl::places.filter(dsl::id.eq(id)))
            .execute(&mut *conn)
            .map_err(from_diesel_err)?;
        debug_assert_eq!(1, count);
        Ok(Some(place))
    }
}
