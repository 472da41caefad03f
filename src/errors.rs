use std::{
    error::Error,
    fmt::{self, Display},
};

/// Failures surfaced by the rendering pipeline. Every failure is detected
/// synchronously before any primitive is emitted; there is no partial output
/// and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KolamError {
    /// A parameter failed its precondition (non-positive dot size, zero arc
    /// radius, degenerate polygon, empty grid).
    InvalidParameter(String),
    /// A style identifier outside the four supported variants.
    UnknownVariant(String),
}

impl Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KolamError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            KolamError::UnknownVariant(name) => write!(f, "Unknown kolam variant: {}", name),
        }
    }
}

impl Error for KolamError {}
