#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Street (road name) address
    pub street     : Option<String>,
    /// Lot-number (parcel) address
    pub lot_number : Option<String>,
    /// Floor, unit or any other detail
    pub detail     : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.lot_number.is_none() && self.detail.is_none()
    }

    /// All present parts, e.g. for text matching.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [&self.street, &self.lot_number, &self.detail]
            .into_iter()
            .filter_map(|part| part.as_deref())
    }
}
