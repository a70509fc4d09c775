use super::json_error_response;
use anyhow::anyhow;
pub use vmap_core::{
    repositories::Error as RepoError,
    usecases::{Error as ParameterError, ErrorKind},
};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

fn status_of(kind: ErrorKind) -> Option<Status> {
    let status = match kind {
        ErrorKind::InvalidRequest | ErrorKind::ObjectCreation => Status::BadRequest,
        ErrorKind::ResourceNotFound => Status::NotFound,
        ErrorKind::Unauthorized => Status::Unauthorized,
        ErrorKind::Forbidden => Status::Forbidden,
        ErrorKind::Storage => return None,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => {
                if let Some(status) = status_of(err.kind()) {
                    return json_error_response(req, &err, status);
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
