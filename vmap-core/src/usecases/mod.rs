mod assemble_results;
mod bookmarks;
mod build_place_filter;
mod create_place;
mod delete_place;
mod error;
mod get_place;
mod mutation;
mod normalize_place_query;
mod route_place_query;
mod search_places;
mod update_place;


pub use self::{
    assemble_results::*,
    bookmarks::*,
    build_place_filter::*,
    create_place::*,
    delete_place::*,
    error::{Error, ErrorKind},
    get_place::*,
    mutation::*,
    normalize_place_query::*,
    route_place_query::*,
    search_places::*,
    update_place::*,
};

mod prelude {
    pub use super::error::{Error, ErrorKind};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
