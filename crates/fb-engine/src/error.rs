//! Engine error type.
//!
//! Domain outcomes (mismatch penalties, breakdowns) are *results*, not
//! errors — they live in `fb_market::BookingResult`.  This enum covers
//! genuine precondition violations: dangling ids, double-booking, and the
//! one recoverable player-facing rejection (insufficient funds).

use thiserror::Error;

use fb_core::{CustomerId, LoadId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("load {0} not found")]
    LoadNotFound(LoadId),

    #[error("load {0} is not available for booking")]
    LoadNotAvailable(LoadId),

    #[error("customer {0} not found in the directory")]
    CustomerNotFound(CustomerId),

    #[error("customer {0} is already on the books")]
    AlreadyAcquired(CustomerId),

    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("game configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
