#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = places)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub category_image: Option<&'a str>,
    pub vegan_option: i16,
    pub phone: Option<&'a str>,
    pub street: Option<&'a str>,
    pub lot_number: Option<&'a str>,
    pub detail: Option<&'a str>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
    pub opening_hours: Option<&'a str>,
    pub sns_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_image: Option<String>,
    pub vegan_option: i16,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub lot_number: Option<String>,
    pub detail: Option<String>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
    pub opening_hours: Option<String>,
    pub sns_url: Option<String>,
}

/// Absent fields are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = places)]
pub struct PlaceChangeset<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub category_image: Option<&'a str>,
    pub vegan_option: Option<i16>,
    pub phone: Option<&'a str>,
    pub street: Option<&'a str>,
    pub lot_number: Option<&'a str>,
    pub detail: Option<&'a str>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
    pub opening_hours: Option<&'a str>,
    pub sns_url: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmark<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub place_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    pub created_at: i64,
}
