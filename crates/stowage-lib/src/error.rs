use thiserror::Error;

use crate::serial::SerialNumber;

/// Convenient result alias for the stowage library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Mass or weight limit violated, at container or ship level.
    #[error("{subject}: taking on {attempted_kg}kg exceeds the {limit_kg}kg limit")]
    CapacityExceeded {
        subject: String,
        attempted_kg: f64,
        limit_kg: f64,
    },

    /// Conflicting product in a loaded container, or an unmet temperature
    /// requirement.
    #[error("invalid operation: {detail}")]
    InvalidState { detail: String },

    /// Refrigerated load for a product absent from the temperature table.
    #[error("unknown product: {product}")]
    UnknownProduct { product: String },

    /// Operation referenced a serial number not present on the ship.
    #[error("no container with serial {serial} on board")]
    NotFound { serial: SerialNumber },

    /// Ship already holds its maximum number of containers.
    #[error("ship {ship} is full: all {limit} container slots in use")]
    Full { ship: String, limit: usize },

    /// A two-step transfer failed; carries the underlying cause message.
    #[error("failed to transfer container {serial}: {cause}")]
    TransferFailed { serial: SerialNumber, cause: String },

    /// Raised when container or ship parameters fail validation.
    #[error("invalid fleet data: {message}")]
    Validation { message: String },
}
