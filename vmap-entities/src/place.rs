use crate::{address::*, geo::*, id::*, url::Url, vegan::*};

use std::str::FromStr;

/// Opening hours in their serialized, structured form.
///
/// The schedule is opaque for the application, it is
/// stored and returned as it has been received.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHours(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHoursParseError;

impl OpeningHours {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OpeningHours {
    type Err = OpeningHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(OpeningHoursParseError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<OpeningHours> for String {
    fn from(from: OpeningHours) -> Self {
        from.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    /// Enumerated category code, e.g. `restaurant` or `cafe`
    pub category: String,
    /// Reference to the image that represents the category
    pub category_image: Option<String>,
    pub vegan_option: VeganOption,
    pub phone: Option<String>,
    pub address: Address,
    pub location: Option<GeoPoint>,
    pub opening_hours: Option<OpeningHours>,
    pub sns_url: Option<Url>,
}

impl Place {
    /// Substring match on the descriptive texts.
    ///
    /// Only ASCII letters are matched case-insensitively,
    /// just like the `LIKE` operator of SQLite.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_ascii_lowercase();
        [self.name.as_str(), self.category.as_str()]
            .into_iter()
            .chain(self.address.parts())
            .any(|text| text.to_ascii_lowercase().contains(&keyword))
    }
}

/// Changes of a place.
///
/// Absent fields keep their current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name           : Option<String>,
    pub category       : Option<String>,
    pub category_image : Option<String>,
    pub vegan_option   : Option<VeganOption>,
    pub phone          : Option<String>,
    pub street         : Option<String>,
    pub lot_number     : Option<String>,
    pub detail         : Option<String>,
    pub location       : Option<GeoPoint>,
    pub opening_hours  : Option<OpeningHours>,
    pub sns_url        : Option<Url>,
}

impl PlacePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, place: Place) -> Place {
        let Self {
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
        } = self;
        let Place {
            id,
            name: old_name,
            category: old_category,
            category_image: old_category_image,
            vegan_option: old_vegan_option,
            phone: old_phone,
            address: old_address,
            location: old_location,
            opening_hours: old_opening_hours,
            sns_url: old_sns_url,
        } = place;
        let address = Address {
            street: street.or(old_address.street),
            lot_number: lot_number.or(old_address.lot_number),
            detail: detail.or(old_address.detail),
        };
        Place {
            id,
            name: name.unwrap_or(old_name),
            category: category.unwrap_or(old_category),
            category_image: category_image.or(old_category_image),
            vegan_option: vegan_option.unwrap_or(old_vegan_option),
            phone: phone.or(old_phone),
            address,
            location: location.or(old_location),
            opening_hours: opening_hours.or(old_opening_hours),
            sns_url: sns_url.or(old_sns_url),
        }
    }
}
