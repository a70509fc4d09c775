use diesel::{
    connection::SimpleConnection as _,
    prelude::*,
    r2d2::{self, CustomizeConnection},
    sql_types::{Double, Nullable},
    sqlite::SqliteConnection,
};
use vmap_core::entities::GeoPoint;

define_sql_function! {
    /// Great-circle distance in meters between a stored
    /// location and a given point.
    ///
    /// `NULL` if the stored location is incomplete or invalid.
    fn geo_distance(lng1: Nullable<Double>, lat1: Nullable<Double>, lng2: Double, lat2: Double) -> Nullable<Double>;
}

fn distance(lng1: Option<f64>, lat1: Option<f64>, lng2: f64, lat2: f64) -> Option<f64> {
    let p1 = GeoPoint::try_from_lng_lat_deg(lng1?, lat1?)?;
    let p2 = GeoPoint::try_from_lng_lat_deg(lng2, lat2)?;
    Some(GeoPoint::distance(p1, p2).to_meters())
}

pub fn register_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    geo_distance_utils::register_impl(conn, distance)
}

/// Per-connection settings and functions.
#[derive(Debug)]
pub struct ConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            r#"
PRAGMA foreign_keys = 1;   -- check foreign key constraints and cascade deletes
PRAGMA busy_timeout = 5000;
"#,
        )
        .map_err(r2d2::Error::QueryError)?;
        register_functions(conn).map_err(r2d2::Error::QueryError)
    }
}
