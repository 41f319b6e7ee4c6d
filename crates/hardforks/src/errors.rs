//! Error types for the `kona-hardforks` crate.

use alloy_primitives::hex::FromHexError;
use thiserror::Error;

/// A [Result] alias for the [CalldataError] type.
pub type CalldataResult<T> = core::result::Result<T, CalldataError>;

/// An error raised while writing ABI-encoded calldata.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalldataError {
    /// The output buffer cannot hold the next word.
    #[error("Calldata buffer overflow: need {needed} bytes, {remaining} remaining")]
    BufferOverflow {
        /// Bytes the write required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
}

/// An error raised while loading an upgrade configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A bytecode blob is not valid hex.
    #[error("Invalid {name} bytecode: {error}")]
    InvalidBytecode {
        /// Which blob failed to decode.
        name: &'static str,
        /// The hex decoding error.
        error: FromHexError,
    },
}

/// A [Result] alias for the [UpgradeError] type.
pub type UpgradeResult<T, E> = core::result::Result<T, UpgradeError<E>>;

/// An error building a set of upgrade transactions.
///
/// The type parameter is the error of the [DepositEncoder] in use.
///
/// [DepositEncoder]: kona_protocol::DepositEncoder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpgradeError<E> {
    /// The upgrade configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Proxy upgrade calldata could not be written.
    #[error(transparent)]
    Calldata(#[from] CalldataError),
    /// A deposit failed to encode. No transactions are returned.
    #[error("Failed to encode upgrade transaction {index} ({intent}): {source}")]
    Encoding {
        /// Position of the failing transaction in the upgrade.
        index: usize,
        /// Intent of the failing transaction.
        intent: &'static str,
        /// The encoder error.
        source: E,
    },
}
