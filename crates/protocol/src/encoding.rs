//! Canonical binary encoding of deposit transactions.

use alloc::vec::Vec;
use alloy_eips::eip2718::{Decodable2718, Eip2718Error, Encodable2718};
use alloy_primitives::Bytes;
use core::{convert::Infallible, fmt};
use op_alloy_consensus::{OpTxEnvelope, TxDeposit, DEPOSIT_TX_TYPE_ID};
use thiserror::Error;

/// Serializes a [TxDeposit] into the bytes that are included in an L2 block.
///
/// The encoder is a seam: the upgrade builders are generic over it so that the encoding step can
/// be swapped out, but consensus only ever accepts the output of [Eip2718Encoder].
pub trait DepositEncoder {
    /// The error returned when a deposit cannot be encoded.
    type Error: fmt::Debug + fmt::Display;

    /// Encodes the given deposit.
    fn encode_deposit(&self, deposit: &TxDeposit) -> Result<Bytes, Self::Error>;
}

/// Encodes deposits as [EIP-2718] typed envelopes: `0x7E ‖ rlp(deposit)`.
///
/// [EIP-2718]: https://eips.ethereum.org/EIPS/eip-2718
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Eip2718Encoder;

impl DepositEncoder for Eip2718Encoder {
    type Error = Infallible;

    fn encode_deposit(&self, deposit: &TxDeposit) -> Result<Bytes, Self::Error> {
        let envelope = OpTxEnvelope::Deposit(deposit.clone());
        let mut buf = Vec::with_capacity(envelope.encode_2718_len());
        envelope.encode_2718(&mut buf);
        Ok(buf.into())
    }
}

/// An error returned by [decode_deposit_envelope].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepositDecodeError {
    /// The envelope has no bytes at all.
    #[error("Empty transaction envelope")]
    Empty,
    /// The envelope is not a deposit.
    #[error("Unexpected transaction type {0:#04x}, expected 0x7e")]
    UnexpectedType(u8),
    /// The deposit body is not valid RLP.
    #[error("Failed to decode deposit body: {0}")]
    Rlp(alloy_rlp::Error),
    /// Bytes remain after the deposit body.
    #[error("{0} trailing bytes after deposit body")]
    TrailingBytes(usize),
}

impl From<Eip2718Error> for DepositDecodeError {
    fn from(err: Eip2718Error) -> Self {
        match err {
            Eip2718Error::UnexpectedType(ty) => Self::UnexpectedType(ty),
            other => Self::Rlp(other.into()),
        }
    }
}

/// Decodes an envelope produced by [Eip2718Encoder] back into a [TxDeposit].
///
/// Only deposits are accepted; any other typed or legacy transaction is rejected by its first
/// byte before the body is decoded.
pub fn decode_deposit_envelope(envelope: &[u8]) -> Result<TxDeposit, DepositDecodeError> {
    let ty = *envelope.first().ok_or(DepositDecodeError::Empty)?;
    if ty != DEPOSIT_TX_TYPE_ID {
        return Err(DepositDecodeError::UnexpectedType(ty));
    }
    let mut buf = envelope;
    let decoded = OpTxEnvelope::decode_2718(&mut buf)?;
    if !buf.is_empty() {
        return Err(DepositDecodeError::TrailingBytes(buf.len()));
    }
    match decoded {
        OpTxEnvelope::Deposit(deposit) => Ok(deposit),
        _ => Err(DepositDecodeError::UnexpectedType(ty)),
    }
}
