use super::{mutation::Mutation, prelude::*};
use crate::util::parse::{non_blank, parse_lazy_url};

/// The attributes of a new place as they arrive from a client.
///
/// The location is a raw `[lng, lat]` pair.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name           : String,
    pub category       : String,
    pub category_image : Option<String>,
    pub vegan_option   : String,
    pub phone          : Option<String>,
    pub street         : Option<String>,
    pub lot_number     : Option<String>,
    pub detail         : Option<String>,
    pub location       : Option<[f64; 2]>,
    pub opening_hours  : Option<String>,
    pub sns_url        : Option<String>,
}

#[derive(Debug, Clone)]
pub struct Storable(Place);

/// Reshape a raw `[lng, lat]` pair into a typed point.
pub fn reshape_location(coordinates: [f64; 2]) -> Result<GeoPoint> {
    GeoPoint::try_from_coordinates(coordinates).ok_or(Error::InvalidPosition)
}

pub fn parse_vegan_option(code: &str) -> Result<VeganOption> {
    code.trim()
        .parse()
        .map_err(|_| Error::InvalidVeganOption)
}

pub fn parse_name(name: String) -> Result<String> {
    non_blank(Some(name)).ok_or(Error::EmptyName)
}

pub fn parse_opening_hours(opening_hours: Option<String>) -> Option<OpeningHours> {
    // Blank schedules are never stored
    opening_hours.and_then(|oh| oh.parse().ok())
}

pub fn parse_sns_url(url: Option<String>) -> Result<Option<Url>> {
    non_blank(url).map(parse_lazy_url).transpose().map_err(Into::into)
}

pub fn prepare_new_place(new_place: NewPlace) -> Result<Storable> {
    let NewPlace {
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
    } = new_place;
    let place = Place {
        id: Id::new(),
        name: parse_name(name)?,
        category: category.trim().to_owned(),
        category_image: non_blank(category_image),
        vegan_option: parse_vegan_option(&vegan_option)?,
        phone: non_blank(phone),
        address: Address {
            street: non_blank(street),
            lot_number: non_blank(lot_number),
            detail: non_blank(detail),
        },
        location: location.map(reshape_location).transpose()?,
        opening_hours: parse_opening_hours(opening_hours),
        sns_url: parse_sns_url(sns_url)?,
    };
    Ok(Storable(place))
}

pub fn store_new_place<R>(repo: &R, s: Storable) -> Result<Mutation<Place>>
where
    R: PlaceRepo,
{
    let Storable(place) = s;
    log::debug!("Storing new place: {place:?}");
    let place = repo.create_place(place)?.ok_or(Error::PlaceCreation)?;
    Ok(Mutation::new("The place has been created.", place))
}

pub fn create_place<R>(repo: &R, new_place: NewPlace) -> Result<Mutation<Place>>
where
    R: PlaceRepo,
{
    let storable = prepare_new_place(new_place)?;
    store_new_place(repo, storable)
}
