//! Error types for rate lookup operations.

use thiserror::Error;

/// Errors surfaced by rate providers and the configuration layer.
///
/// None of these are recovered internally; every failure propagates to the
/// caller of the failing operation.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("no access key configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid rate document: {0}")]
    Parse(String),

    #[error("no rate found for currency: {0}")]
    RateNotFound(String),

    #[error("cross rate undefined: rate for {0} is zero")]
    DivisionUndefined(String),
}
