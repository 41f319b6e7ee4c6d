//! Deployment constants consumed by the [Ecotone] builder.

use crate::{ConfigError, Ecotone};
use alloc::string::String;
use alloy_primitives::{hex, Address, Bytes};
use kona_protocol::{Predeploys, SystemAddresses};

const L1_BLOCK_BYTECODE: &str = include_str!("./bytecode/l1_block_ecotone.hex");
const GAS_PRICE_ORACLE_BYTECODE: &str = include_str!("./bytecode/gpo_ecotone.hex");
const BEACON_ROOTS_BYTECODE: &str = include_str!("./bytecode/eip4788_ecotone.hex");

/// The addresses and bytecode that a chain deploys during the Ecotone upgrade.
///
/// Nothing here is mutated after construction. [EcotoneConfig::bundled] yields the values
/// compiled into this crate; chains with different predeploy artifacts deserialize their own.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EcotoneConfig {
    /// Sender of the `L1Block` implementation deployment. Must have nonce 0.
    pub l1_block_deployer: Address,
    /// Sender of the `GasPriceOracle` implementation deployment. Must have nonce 0.
    pub gas_price_oracle_deployer: Address,
    /// The `L1Block` proxy that is pointed at the new implementation.
    pub l1_block_proxy: Address,
    /// The `GasPriceOracle` proxy that is pointed at the new implementation.
    pub gas_price_oracle_proxy: Address,
    /// Sender of the `setEcotone()` call.
    pub depositor: Address,
    /// Sender of the [EIP-4788] beacon roots contract creation.
    ///
    /// [EIP-4788]: https://eips.ethereum.org/EIPS/eip-4788
    pub beacon_roots_deployer: Address,
    /// Creation code of the `L1Block` implementation.
    pub l1_block_bytecode: Bytes,
    /// Creation code of the `GasPriceOracle` implementation.
    pub gas_price_oracle_bytecode: Bytes,
    /// Creation code of the beacon roots contract.
    pub beacon_roots_bytecode: Bytes,
}

impl EcotoneConfig {
    /// Returns the configuration compiled into this crate.
    ///
    /// The addresses follow the Kroma predeploy layout, but the `L1Block` and `GasPriceOracle`
    /// creation code is the OP Stack Ecotone build, so transactions 0 and 1 built from this
    /// configuration match neither network byte for byte. A deployment supplies its own
    /// artifacts by deserializing an [EcotoneConfig]. The derived implementation addresses and
    /// the proxy calldata do not depend on the bytecode.
    pub fn bundled() -> Result<Self, ConfigError> {
        Ok(Self {
            l1_block_deployer: Ecotone::L1_BLOCK_DEPLOYER,
            gas_price_oracle_deployer: Ecotone::GAS_PRICE_ORACLE_DEPLOYER,
            l1_block_proxy: Predeploys::L1_BLOCK,
            gas_price_oracle_proxy: Predeploys::GAS_PRICE_ORACLE,
            depositor: SystemAddresses::DEPOSITOR_ACCOUNT,
            beacon_roots_deployer: Ecotone::EIP4788_FROM,
            l1_block_bytecode: decode_bytecode("L1Block", L1_BLOCK_BYTECODE)?,
            gas_price_oracle_bytecode: decode_bytecode(
                "GasPriceOracle",
                GAS_PRICE_ORACLE_BYTECODE,
            )?,
            beacon_roots_bytecode: decode_bytecode("beacon roots", BEACON_ROOTS_BYTECODE)?,
        })
    }

    /// The address the `L1Block` implementation is created at.
    pub fn new_l1_block(&self) -> Address {
        self.l1_block_deployer.create(0)
    }

    /// The address the `GasPriceOracle` implementation is created at.
    pub fn new_gas_price_oracle(&self) -> Address {
        self.gas_price_oracle_deployer.create(0)
    }

    /// The address the beacon roots contract is created at.
    pub fn beacon_roots(&self) -> Address {
        self.beacon_roots_deployer.create(0)
    }
}

/// Decodes a hex blob that may be wrapped over several lines.
fn decode_bytecode(name: &'static str, raw: &str) -> Result<Bytes, ConfigError> {
    let joined = raw.split_whitespace().collect::<String>();
    hex::decode(joined)
        .map(Bytes::from)
        .map_err(|error| ConfigError::InvalidBytecode { name, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_bundled_addresses() {
        let config = EcotoneConfig::bundled().unwrap();
        assert_eq!(config.new_l1_block(), address!("07dbe8500fc591d1852b76fee44d5a05e13097ff"));
        assert_eq!(
            config.new_gas_price_oracle(),
            address!("b528d11cc114e026f138fe568744c6d45ce6da7a")
        );
        assert_eq!(config.beacon_roots(), address!("000F3df6D732807Ef1319fB7B8bB8522d0Beac02"));
    }

    #[test]
    fn test_bundled_bytecode() {
        let config = EcotoneConfig::bundled().unwrap();
        assert_eq!(config.l1_block_bytecode.len(), 1374);
        assert_eq!(config.gas_price_oracle_bytecode.len(), 4053);
        assert_eq!(config.beacon_roots_bytecode.len(), 106);
        // Solidity creation code prologue.
        assert!(config.l1_block_bytecode.starts_with(&[0x60, 0x80, 0x60, 0x40]));
        assert!(config.gas_price_oracle_bytecode.starts_with(&[0x60, 0x80, 0x60, 0x40]));
    }

    #[test]
    fn test_decode_bytecode_multiline() {
        let decoded = decode_bytecode("test", "60\n61\r\n 00\n").unwrap();
        assert_eq!(decoded.to_vec(), [0x60u8, 0x61, 0x00]);
    }

    #[test]
    fn test_decode_bytecode_invalid() {
        let err = decode_bytecode("test", "6g").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBytecode { name: "test", .. }));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_config_serde_roundtrip() {
        let config = EcotoneConfig::bundled().unwrap();
        let json = serde_json::to_value(&config).unwrap();
        let field = |key: &str| json[key].as_str().unwrap().to_lowercase();
        assert_eq!(field("l1BlockProxy"), "0x4200000000000000000000000000000000000002");
        assert_eq!(field("depositor"), "0xdeaddeaddeaddeaddeaddeaddeaddeaddead0001");
        assert!(field("beaconRootsBytecode").starts_with("0x60618060095f395ff3"));

        let decoded: EcotoneConfig = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, config);
    }
}
