use thiserror::Error;

/// # NullFieldError
/// A required argument was not provided
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NullFieldError {
    /// Name of the missing field
    pub field: &'static str,
    /// Description
    pub message: String,
}

/// # InvalidArgumentError
/// A provided argument was semantically invalid
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidArgumentError {
    /// Description
    pub message: String,
    /// The error that caused this one, if any
    #[source]
    pub source: Option<Box<OidcClientError>>,
}

/// # FormatError
/// JSON text or a JSON value did not have the expected shape
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FormatError {
    /// The offending JSON key. `None` when the document itself is malformed
    pub key: Option<String>,
    /// Description
    pub message: String,
}

/// # OidcClientError
/// Error That will be returned to the end user of this library
#[derive(Debug, Error)]
pub enum OidcClientError {
    /// A required field was absent
    #[error(transparent)]
    NullField(NullFieldError),
    /// A field was present but invalid, or a required top level JSON key was missing
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),
    /// Malformed JSON
    #[error(transparent)]
    Format(FormatError),
}

impl OidcClientError {
    pub(crate) fn new_null_field(field: &'static str, message: &str) -> Self {
        Self::NullField(NullFieldError {
            field,
            message: message.to_string(),
        })
    }

    pub(crate) fn new_invalid_argument(
        message: &str,
        source: Option<Box<OidcClientError>>,
    ) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            message: message.to_string(),
            source,
        })
    }

    pub(crate) fn new_format_error(key: Option<&str>, message: &str) -> Self {
        Self::Format(FormatError {
            key: key.map(|k| k.to_string()),
            message: message.to_string(),
        })
    }

    /// Checks if the error is [NullFieldError]
    pub fn is_null_field(&self) -> bool {
        matches!(self, Self::NullField(_))
    }

    /// Checks if the error is [InvalidArgumentError]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Checks if the error is [FormatError]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns the [NullFieldError]
    ///
    /// *Panics if the error is not a NullField*
    pub fn null_field(self) -> NullFieldError {
        match self {
            Self::NullField(e) => e,
            _ => panic!("Not a NullField"),
        }
    }

    /// Returns the [InvalidArgumentError]
    ///
    /// *Panics if the error is not an InvalidArgument*
    pub fn invalid_argument(self) -> InvalidArgumentError {
        match self {
            Self::InvalidArgument(e) => e,
            _ => panic!("Not an InvalidArgument"),
        }
    }

    /// Returns the [FormatError]
    ///
    /// *Panics if the error is not a Format error*
    pub fn format_error(self) -> FormatError {
        match self {
            Self::Format(e) => e,
            _ => panic!("Not a FormatError"),
        }
    }
}

/// Return type of the fallible operations of this crate
pub type OidcReturnType<T> = Result<T, Box<OidcClientError>>;
