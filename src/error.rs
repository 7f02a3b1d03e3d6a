//! Error type for building and formatting messages

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

use crate::{address::AddressError, message::header::ContentTypeErr};

/// Error type for email content
#[derive(Debug)]
pub enum Error {
    /// A multipart body was formatted before its boundary was initialized
    MissingBoundary,
    /// The boundary cannot be used unquoted in a `Content-Type` header
    InvalidBoundary(String),
    /// Missing sender
    MissingFrom,
    /// Missing recipient in `To`, `Cc` and `Bcc`
    MissingTo,
    /// Header name is empty or contains characters not allowed in a field name
    InvalidHeaderName(String),
    /// Invalid `Content-Type`
    ContentType(ContentTypeErr),
    /// Invalid email address
    Address(AddressError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingBoundary => f.write_str("multipart boundary was never initialized"),
            Error::InvalidBoundary(boundary) => {
                write!(f, "invalid multipart boundary: {boundary:?}")
            }
            Error::MissingFrom => f.write_str("missing source address, invalid message"),
            Error::MissingTo => f.write_str("missing destination address, invalid message"),
            Error::InvalidHeaderName(name) => write!(f, "invalid header name: {name:?}"),
            Error::ContentType(e) => write!(f, "invalid content type: {e}"),
            Error::Address(e) => write!(f, "invalid email address: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ContentType(e) => Some(e),
            Error::Address(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentTypeErr> for Error {
    fn from(err: ContentTypeErr) -> Error {
        Error::ContentType(err)
    }
}

impl From<AddressError> for Error {
    fn from(err: AddressError) -> Error {
        Error::Address(err)
    }
}
