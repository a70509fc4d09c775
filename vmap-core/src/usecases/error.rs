use crate::{
    entities::{GeoPointParseError, InvalidVeganOptionPrimitive, ParseError},
    repositories,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A proximity search requires both a center and a radius")]
    IncompleteGeofence,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Invalid page number")]
    InvalidPageNumber,
    #[error("Invalid page size")]
    InvalidPageSize,
    #[error("Invalid vegan option")]
    InvalidVeganOption,
    #[error("Invalid URL")]
    Url,
    #[error("The name must not be empty")]
    EmptyName,
    #[error("The place has already been bookmarked")]
    BookmarkExists,
    #[error("The place does not exist")]
    PlaceNotFound,
    #[error("No place matches the search term")]
    NoKeywordMatch,
    #[error("No place matches the filter")]
    NoFilterMatch,
    #[error("The bookmark does not exist")]
    BookmarkNotFound,
    #[error("The place could not be created")]
    PlaceCreation,
    #[error("The bookmark could not be created")]
    BookmarkCreation,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Classification of use case failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    ResourceNotFound,
    ObjectCreation,
    Unauthorized,
    Forbidden,
    Storage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error as E;
        match self {
            E::IncompleteGeofence
            | E::InvalidPosition
            | E::InvalidRadius
            | E::InvalidPageNumber
            | E::InvalidPageSize
            | E::InvalidVeganOption
            | E::Url
            | E::EmptyName
            | E::BookmarkExists => ErrorKind::InvalidRequest,
            E::PlaceNotFound
            | E::NoKeywordMatch
            | E::NoFilterMatch
            | E::BookmarkNotFound
            | E::Repo(repositories::Error::NotFound) => ErrorKind::ResourceNotFound,
            E::PlaceCreation | E::BookmarkCreation => ErrorKind::ObjectCreation,
            E::Unauthorized => ErrorKind::Unauthorized,
            E::Forbidden => ErrorKind::Forbidden,
            E::Repo(_) => ErrorKind::Storage,
        }
    }
}

impl From<GeoPointParseError> for Error {
    fn from(_: GeoPointParseError) -> Self {
        Self::InvalidPosition
    }
}

impl From<InvalidVeganOptionPrimitive> for Error {
    fn from(_: InvalidVeganOptionPrimitive) -> Self {
        Self::InvalidVeganOption
    }
}

impl From<ParseError> for Error {
    fn from(_: ParseError) -> Self {
        Self::Url
    }
}
