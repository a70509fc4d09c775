use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};
use vmap_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{sqlite, Cfg},
};
use vmap_core::usecases;

mod bookmarks;
mod error;
mod places;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   places   --- //
        places::get_place,
        places::get_places,
        places::post_place,
        places::put_place,
        places::delete_place,
        // ---   bookmarks   --- //
        bookmarks::get_bookmarks_of_user,
        bookmarks::get_most_bookmarked_places,
        bookmarks::post_bookmark,
        bookmarks::delete_bookmark,
        // ---   misc   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
