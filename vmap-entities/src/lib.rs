#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # vmap-entities
//!
//! Reusable, agnostic domain entities for vegemap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod bookmark;
pub mod geo;
pub mod id;
pub mod place;
pub mod time;
pub mod vegan;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
