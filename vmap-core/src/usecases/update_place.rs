use super::{
    create_place::{
        parse_name, parse_opening_hours, parse_sns_url, parse_vegan_option, reshape_location,
    },
    mutation::Mutation,
    prelude::*,
};
use crate::util::parse::non_blank;

/// Partial changes of a place as they arrive from a client.
///
/// Absent or blank fields keep their current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdatePlace {
    pub name           : Option<String>,
    pub category       : Option<String>,
    pub category_image : Option<String>,
    pub vegan_option   : Option<String>,
    pub phone          : Option<String>,
    pub street         : Option<String>,
    pub lot_number     : Option<String>,
    pub detail         : Option<String>,
    pub location       : Option<[f64; 2]>,
    pub opening_hours  : Option<String>,
    pub sns_url        : Option<String>,
}

pub fn prepare_place_patch(update: UpdatePlace) -> Result<PlacePatch> {
    let UpdatePlace {
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
    } = update;
    Ok(PlacePatch {
        name: name.map(parse_name).transpose()?,
        category: non_blank(category),
        category_image: non_blank(category_image),
        vegan_option: non_blank(vegan_option)
            .map(|code| parse_vegan_option(&code))
            .transpose()?,
        phone: non_blank(phone),
        street: non_blank(street),
        lot_number: non_blank(lot_number),
        detail: non_blank(detail),
        location: location.map(reshape_location).transpose()?,
        opening_hours: parse_opening_hours(opening_hours),
        sns_url: parse_sns_url(sns_url)?,
    })
}

pub fn update_place<R>(repo: &R, id: &str, update: UpdatePlace) -> Result<Mutation<Place>>
where
    R: PlaceRepo,
{
    let patch = prepare_place_patch(update)?;
    log::debug!("Updating place {id}: {patch:?}");
    let place = repo.update_place(id, &patch)?.ok_or(Error::PlaceNotFound)?;
    Ok(Mutation::new("The place has been updated.", place))
}
