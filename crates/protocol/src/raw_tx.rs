//! Contains the [RawTransaction] type.

use crate::{decode_deposit_envelope, DepositDecodeError};
use alloy_primitives::Bytes;
use op_alloy_consensus::{TxDeposit, DEPOSIT_TX_TYPE_ID};

/// An opaque, already-encoded transaction as it appears in an L2 block.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct RawTransaction(pub Bytes);

impl RawTransaction {
    /// Returns if the transaction is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the encoded length of the transaction.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns if the transaction is a deposit
    pub fn is_deposit(&self) -> bool {
        self.0.first() == Some(&DEPOSIT_TX_TYPE_ID)
    }

    /// Decodes the transaction as a [TxDeposit].
    pub fn to_deposit(&self) -> Result<TxDeposit, DepositDecodeError> {
        decode_deposit_envelope(&self.0)
    }
}

impl<T: Into<Bytes>> From<T> for RawTransaction {
    fn from(bytes: T) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for RawTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
