//! Error types for the model API

use tessera_codec::DecodeError;
use tessera_format::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The text was not a JSON object.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The document did not match the model.
    #[error("Invalid FHIR resource: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// The decode failure, when the text itself was well-formed JSON.
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Format(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
