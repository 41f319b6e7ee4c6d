//! Contains the [UpgradeStep] type.

use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use op_alloy_consensus::{TxDeposit, UpgradeDepositSource};

/// A single upgrade transaction, described by what it does rather than how it is encoded.
///
/// Upgrade deposits never mint or transfer value, so those fields are fixed when the step is
/// lowered into a [TxDeposit].
///
/// `is_system_transaction` is always `false`. Whether the target chain's deposit format carries
/// this flag at all is an open protocol question: a deposit type without the field would change
/// the RLP layout, and every encoding here assumes the eight-field OP Stack layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeStep {
    /// Unique human-readable intent. Hashed into the deposit's source hash.
    pub intent: &'static str,
    /// The sender.
    pub from: Address,
    /// The callee, or [TxKind::Create] for a contract deployment.
    pub to: TxKind,
    /// The gas limit.
    pub gas_limit: u64,
    /// Creation code or calldata.
    pub input: Bytes,
}

impl UpgradeStep {
    /// Returns the source hash of the step's deposit.
    pub fn source_hash(&self) -> B256 {
        UpgradeDepositSource::new(self.intent.into()).source_hash()
    }

    /// Lowers the step into its deposit transaction.
    pub fn to_deposit(&self) -> TxDeposit {
        TxDeposit {
            source_hash: self.source_hash(),
            from: self.from,
            to: self.to,
            mint: Some(0),
            value: U256::ZERO,
            gas_limit: self.gas_limit,
            is_system_transaction: false,
            input: self.input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, keccak256};
    use proptest::{prelude::any, prop_assume, proptest};

    fn step(intent: &'static str) -> UpgradeStep {
        UpgradeStep {
            intent,
            from: Address::ZERO,
            to: TxKind::Create,
            gas_limit: 21_000,
            input: Bytes::new(),
        }
    }

    #[test]
    fn test_source_hash() {
        assert_eq!(
            step("Ecotone: L1 Block Deployment").source_hash(),
            b256!("877a6077205782ea15a6dc8699fa5ebcec5e0f4389f09cb8eda09488231346f8")
        );
    }

    #[test]
    fn test_source_hash_layout() {
        let intent = "Ecotone: Gas Price Oracle Set Ecotone";
        let mut input = [0u8; 64];
        input[31] = 2;
        input[32..].copy_from_slice(keccak256(intent).as_slice());
        assert_eq!(step(intent).source_hash(), keccak256(input));
    }

    #[test]
    fn test_to_deposit_is_not_system_tx() {
        let deposit = step("Ecotone: L1 Block Deployment").to_deposit();
        assert!(!deposit.is_system_transaction);
        assert_eq!(deposit.mint, Some(0));
        assert_eq!(deposit.value, U256::ZERO);
        assert_eq!(deposit.source_hash, step("Ecotone: L1 Block Deployment").source_hash());
    }

    proptest! {
        #[test]
        fn test_distinct_intents_distinct_hashes(a in any::<String>(), b in any::<String>()) {
            prop_assume!(a != b);
            let a = UpgradeDepositSource::new(a).source_hash();
            let b = UpgradeDepositSource::new(b).source_hash();
            assert_ne!(a, b);
        }
    }
}
