pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use vmap_entities::{
        address::*, bookmark::*, geo::*, id::*, place::*, time::*, url::*, vegan::*,
    };
}

pub use repositories::Error as RepoError;
