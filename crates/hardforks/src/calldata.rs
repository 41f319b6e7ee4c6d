//! A fixed-shape ABI writer for the calls made by upgrade transactions.
//!
//! Only two shapes are needed: a bare 4-byte selector, and a selector followed by one static
//! `address` argument. Arguments occupy a full 32-byte word, left-padded with zeros.

use crate::{CalldataError, CalldataResult};
use alloc::vec::Vec;
use alloy_primitives::{hex, keccak256, Address, Bytes};
use alloy_rlp::BufMut;

/// The `upgradeTo` function signature of the predeploy proxies.
pub const UPGRADE_TO_FUNC_SIGNATURE: &str = "upgradeTo(address)";

/// `UpgradeTo` Function 4Byte Signature
pub const UPGRADE_TO_FUNC_BYTES_4: [u8; 4] = hex!("3659cfe6");

/// Length of a function selector.
pub const SELECTOR_LEN: usize = 4;

/// Length of an ABI word.
pub const WORD_LEN: usize = 32;

/// Returns the 4-byte selector of a function signature, `keccak256(signature)[..4]`.
pub fn selector(signature: &str) -> [u8; SELECTOR_LEN] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn reserve<B: BufMut>(out: &B, needed: usize) -> CalldataResult<()> {
    let remaining = out.remaining_mut();
    if remaining < needed {
        return Err(CalldataError::BufferOverflow { needed, remaining });
    }
    Ok(())
}

/// Writes a function selector.
pub fn write_selector<B: BufMut>(
    out: &mut B,
    selector: [u8; SELECTOR_LEN],
) -> CalldataResult<()> {
    reserve(out, SELECTOR_LEN)?;
    out.put_slice(&selector);
    Ok(())
}

/// Writes an `address` argument as a left-padded word.
pub fn write_address<B: BufMut>(out: &mut B, addr: Address) -> CalldataResult<()> {
    reserve(out, WORD_LEN)?;
    out.put_slice(addr.into_word().as_slice());
    Ok(())
}

/// Turns the given address into calldata for the `upgradeTo` function.
pub fn upgrade_to_calldata(addr: Address) -> CalldataResult<Bytes> {
    let mut buf = Vec::with_capacity(SELECTOR_LEN + WORD_LEN);
    write_selector(&mut buf, UPGRADE_TO_FUNC_BYTES_4)?;
    write_address(&mut buf, addr)?;
    Ok(buf.into())
}
