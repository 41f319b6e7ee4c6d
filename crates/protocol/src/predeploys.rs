//! L2 predeploy proxies and protocol-reserved accounts touched by upgrade transactions.

use alloy_primitives::{address, Address};

/// Predeploy proxy addresses.
///
/// The layout follows the Kroma predeploy table, where the L1 attributes contract and the gas
/// price oracle sit in the low `0x42…` range.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Predeploys;

impl Predeploys {
    /// The `L1Block` proxy. Holds the L1 attributes of the current L2 block.
    pub const L1_BLOCK: Address = address!("4200000000000000000000000000000000000002");

    /// The `GasPriceOracle` proxy. Computes the L1 data fee of a transaction.
    pub const GAS_PRICE_ORACLE: Address = address!("4200000000000000000000000000000000000005");
}

/// Protocol-reserved accounts.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SystemAddresses;

impl SystemAddresses {
    /// The sender of the L1 attributes deposit, also allowed to flip gas price oracle modes.
    pub const DEPOSITOR_ACCOUNT: Address = address!("deaddeaddeaddeaddeaddeaddeaddeaddead0001");
}
