//! Contains the [Hardfork] trait.

use alloc::vec::Vec;
use kona_protocol::RawTransaction;

/// A network upgrade that injects a fixed list of deposit transactions into its activation block.
pub trait Hardfork {
    /// The error returned when the upgrade transactions cannot be built.
    type Error;

    /// Builds the upgrade transactions in block order.
    ///
    /// Either every transaction is returned or none is.
    fn txs(&self) -> Result<Vec<RawTransaction>, Self::Error>;
}
