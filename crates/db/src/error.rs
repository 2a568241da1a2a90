use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The store rejected the values we tried to write.
    BadInput,
    /// No record matched the given identifier.
    NotFound,
    /// Unrecoverable error.
    Fatal,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadInput => "Unacceptable input.",
            Self::NotFound => "Record not found.",
            Self::Fatal => "The store encountered an unrecoverable error.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
