pub use vmap_boundary::*;

use vmap_core::usecases;

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_place(p: NewPlace) -> usecases::NewPlace {
        let NewPlace {
            name,
            category,
            category_img,
            vegan_option,
            tel,
            address,
            address_lot_number,
            address_detail,
            location,
            open_times,
            sns_url,
        } = p;
        usecases::NewPlace {
            name,
            category,
            category_image: category_img,
            vegan_option,
            phone: tel,
            street: address,
            lot_number: address_lot_number,
            detail: address_detail,
            location,
            opening_hours: open_times.and_then(opening_hours_from_json),
            sns_url,
        }
    }

    pub fn update_place(p: UpdatePlace) -> usecases::UpdatePlace {
        let UpdatePlace {
            name,
            category,
            category_img,
            vegan_option,
            tel,
            address,
            address_lot_number,
            address_detail,
            location,
            open_times,
            sns_url,
        } = p;
        usecases::UpdatePlace {
            name,
            category,
            category_image: category_img,
            vegan_option,
            phone: tel,
            street: address,
            lot_number: address_lot_number,
            detail: address_detail,
            location,
            opening_hours: open_times.and_then(opening_hours_from_json),
            sns_url,
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn search_result(from: usecases::FoundPlace) -> PlaceSearchResult {
        let usecases::FoundPlace { place, distance } = from;
        PlaceSearchResult {
            place: place.into(),
            distance: distance.map(|d| d.to_meters()),
        }
    }

    pub fn mutation<T, U>(from: usecases::Mutation<T>) -> MutationEnvelope<U>
    where
        U: From<T>,
    {
        let usecases::Mutation { message, record } = from;
        MutationEnvelope {
            message,
            record: record.into(),
        }
    }

    pub fn popular_place(from: usecases::PopularPlace) -> MostBookmarkedPlace {
        let usecases::PopularPlace { place, count } = from;
        MostBookmarkedPlace {
            place: place.into(),
            count,
        }
    }
}
