use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The resource is absent, the page is out of range, or a read-style
    /// request body could not be understood.
    NotFound,
    /// The payload of a create request is missing or invalid.
    Unprocessable,
    /// The path exists but does not accept the request method.
    MethodNotAllowed,
    /// The store failed to serve the request.
    Store,
}

impl Error {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<db::error::Error> for Error {
    fn from(err: db::error::Error) -> Self {
        match err {
            db::error::Error::NotFound => Self::NotFound,
            db::error::Error::BadInput => Self::Unprocessable,
            db::error::Error::Fatal => Self::Store,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "resource not found",
            Self::Unprocessable => "Unprocessable",
            Self::MethodNotAllowed => "method not allowed",
            Self::Store => "internal server error",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
