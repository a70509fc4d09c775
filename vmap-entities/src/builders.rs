pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{bookmark_builder::*, place_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, place::*, vegan::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = category.into();
            self
        }
        pub fn category_image(mut self, image: Option<&str>) -> Self {
            self.place.category_image = image.map(Into::into);
            self
        }
        pub fn vegan_option(mut self, vegan_option: VeganOption) -> Self {
            self.place.vegan_option = vegan_option;
            self
        }
        pub fn phone(mut self, phone: Option<&str>) -> Self {
            self.place.phone = phone.map(Into::into);
            self
        }
        pub fn street(mut self, street: &str) -> Self {
            self.place.address.street = Some(street.into());
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.place.address = address;
            self
        }
        pub fn pos(mut self, pos: GeoPoint) -> Self {
            self.place.location = Some(pos);
            self
        }
        pub fn no_pos(mut self) -> Self {
            self.place.location = None;
            self
        }
        pub fn opening_hours(mut self, opening_hours: Option<&str>) -> Self {
            self.place.opening_hours = opening_hours.map(|oh| oh.parse().unwrap());
            self
        }
        pub fn sns_url(mut self, url: Option<&str>) -> Self {
            self.place.sns_url = url.map(|url| url.parse().unwrap());
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    name: "".into(),
                    category: "restaurant".into(),
                    category_image: None,
                    vegan_option: VeganOption::Full,
                    phone: None,
                    address: Address::default(),
                    location: Some(GeoPoint::from_lng_lat_deg(0.0, 0.0)),
                    opening_hours: None,
                    sns_url: None,
                },
            }
        }
    }
}

pub mod bookmark_builder {

    use super::*;
    use crate::{bookmark::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookmarkBuild {
        bookmark: Bookmark,
    }

    impl BookmarkBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.bookmark.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.bookmark.user_id = user_id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.bookmark.place_id = place_id.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.bookmark.created_at = created_at;
            self
        }
        pub fn finish(self) -> Bookmark {
            self.bookmark
        }
    }

    impl Builder for Bookmark {
        type Build = BookmarkBuild;
        fn build() -> BookmarkBuild {
            BookmarkBuild {
                bookmark: Bookmark {
                    id: Id::new(),
                    user_id: Id::new(),
                    place_id: Id::new(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
