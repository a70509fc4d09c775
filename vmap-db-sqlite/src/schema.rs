///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (id) {
        id -> Text,
        name -> Text,
        category -> Text,
        category_image -> Nullable<Text>,
        vegan_option -> SmallInt,
        phone -> Nullable<Text>,
        street -> Nullable<Text>,
        lot_number -> Nullable<Text>,
        detail -> Nullable<Text>,
        lng -> Nullable<Double>,
        lat -> Nullable<Double>,
        opening_hours -> Nullable<Text>,
        sns_url -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Bookmarks
///////////////////////////////////////////////////////////////////////

table! {
    bookmarks (id) {
        id -> Text,
        user_id -> Text,
        place_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(bookmarks -> places (place_id));

allow_tables_to_appear_in_same_query!(places, bookmarks);
