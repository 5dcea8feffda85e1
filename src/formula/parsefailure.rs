use thiserror::Error;

/// Why a formula could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The grammar rejected the text. Most often a multiplication sign is
    /// missing, since `2x` is not read as `2*x`.
    #[error("the formula is not well formed; check for a missing multiplication sign (write `2*x`, not `2x`)")]
    Malformed,

    #[error("error: {0}")]
    Other(String),
}

impl From<meval::Error> for ParseFailure {
    fn from(error: meval::Error) -> Self {
        match error {
            meval::Error::ParseError(_) | meval::Error::RPNError(_) => ParseFailure::Malformed,
            other => ParseFailure::Other(other.to_string()),
        }
    }
}
