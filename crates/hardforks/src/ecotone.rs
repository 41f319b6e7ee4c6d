//! Module containing the builder for the Ecotone network upgrade transactions.

use crate::{
    calldata::{selector, upgrade_to_calldata},
    CalldataResult, ConfigError, EcotoneConfig, Hardfork, UpgradeError, UpgradeResult, UpgradeStep,
};
use alloc::vec::Vec;
use alloy_primitives::{address, hex, Address, Bytes, TxKind};
use core::convert::Infallible;
use kona_protocol::{DepositEncoder, Eip2718Encoder, RawTransaction};
use op_alloy_consensus::TxDeposit;
use tracing::{debug, error, info};

/// The Ecotone network upgrade transactions.
///
/// See: <https://specs.optimism.io/protocol/ecotone/derivation.html#network-upgrade-automation-transactions>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ecotone {
    config: EcotoneConfig,
}

impl Ecotone {
    /// The number of transactions in the upgrade.
    pub const TX_COUNT: usize = 6;

    /// L1 Block Deployer Address
    pub const L1_BLOCK_DEPLOYER: Address = address!("4210000000000000000000000000000000000000");

    /// The Gas Price Oracle Deployer Address
    pub const GAS_PRICE_ORACLE_DEPLOYER: Address =
        address!("4210000000000000000000000000000000000001");

    /// EIP-4788 From Address
    pub const EIP4788_FROM: Address = address!("0B799C86a49DEeb90402691F1041aa3AF2d3C875");

    /// The signature of the call that switches the gas price oracle to the Ecotone fee formula.
    pub const ENABLE_ECOTONE_SIGNATURE: &'static str = "setEcotone()";

    /// The Enable Ecotone Input Method 4Byte Signature
    pub const ENABLE_ECOTONE_INPUT: [u8; 4] = hex!("22b90ab3");

    /// Gas limit of the `L1Block` deployment.
    pub const L1_BLOCK_DEPLOYMENT_GAS: u64 = 500_000;

    /// Gas limit of the `GasPriceOracle` deployment.
    pub const GAS_PRICE_ORACLE_DEPLOYMENT_GAS: u64 = 1_000_000;

    /// Gas limit of each proxy `upgradeTo` call.
    pub const PROXY_UPDATE_GAS: u64 = 50_000;

    /// Gas limit of the `setEcotone()` call.
    pub const ENABLE_ECOTONE_GAS: u64 = 80_000;

    /// Gas limit of the beacon roots deployment, as defined in EIP-4788.
    pub const BEACON_ROOTS_DEPLOYMENT_GAS: u64 = 0x3d090;

    /// Intent of the `L1Block` deployment.
    pub const DEPLOY_L1_BLOCK_INTENT: &'static str = "Ecotone: L1 Block Deployment";

    /// Intent of the `GasPriceOracle` deployment.
    pub const DEPLOY_GAS_PRICE_ORACLE_INTENT: &'static str = "Ecotone: Gas Price Oracle Deployment";

    /// Intent of the `L1Block` proxy update.
    pub const UPDATE_L1_BLOCK_PROXY_INTENT: &'static str = "Ecotone: L1 Block Proxy Update";

    /// Intent of the `GasPriceOracle` proxy update.
    pub const UPDATE_GAS_PRICE_ORACLE_PROXY_INTENT: &'static str =
        "Ecotone: Gas Price Oracle Proxy Update";

    /// Intent of the `setEcotone()` call.
    pub const ENABLE_ECOTONE_INTENT: &'static str = "Ecotone: Gas Price Oracle Set Ecotone";

    /// Intent of the beacon roots deployment.
    pub const BEACON_ROOTS_INTENT: &'static str =
        "Ecotone: beacon block roots contract deployment";

    /// Creates the upgrade from a deployment configuration.
    pub const fn new(config: EcotoneConfig) -> Self {
        Self { config }
    }

    /// Creates the upgrade from the configuration compiled into this crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        EcotoneConfig::bundled().map(Self::new)
    }

    /// Returns the deployment configuration.
    pub const fn config(&self) -> &EcotoneConfig {
        &self.config
    }

    /// Returns the upgrade steps in block order.
    ///
    /// The proxy updates point at the addresses the two deployments before them create, so the
    /// deployers must not have sent any transaction before the upgrade block.
    pub fn steps(&self) -> CalldataResult<[UpgradeStep; Self::TX_COUNT]> {
        let config = &self.config;
        Ok([
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#l1block-deployment>
            UpgradeStep {
                intent: Self::DEPLOY_L1_BLOCK_INTENT,
                from: config.l1_block_deployer,
                to: TxKind::Create,
                gas_limit: Self::L1_BLOCK_DEPLOYMENT_GAS,
                input: config.l1_block_bytecode.clone(),
            },
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#gaspriceoracle-deployment>
            UpgradeStep {
                intent: Self::DEPLOY_GAS_PRICE_ORACLE_INTENT,
                from: config.gas_price_oracle_deployer,
                to: TxKind::Create,
                gas_limit: Self::GAS_PRICE_ORACLE_DEPLOYMENT_GAS,
                input: config.gas_price_oracle_bytecode.clone(),
            },
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#l1block-proxy-update>
            UpgradeStep {
                intent: Self::UPDATE_L1_BLOCK_PROXY_INTENT,
                from: Address::ZERO,
                to: TxKind::Call(config.l1_block_proxy),
                gas_limit: Self::PROXY_UPDATE_GAS,
                input: upgrade_to_calldata(config.new_l1_block())?,
            },
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#gaspriceoracle-proxy-update>
            UpgradeStep {
                intent: Self::UPDATE_GAS_PRICE_ORACLE_PROXY_INTENT,
                from: Address::ZERO,
                to: TxKind::Call(config.gas_price_oracle_proxy),
                gas_limit: Self::PROXY_UPDATE_GAS,
                input: upgrade_to_calldata(config.new_gas_price_oracle())?,
            },
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#gaspriceoracle-enable-ecotone>
            UpgradeStep {
                intent: Self::ENABLE_ECOTONE_INTENT,
                from: config.depositor,
                to: TxKind::Call(config.gas_price_oracle_proxy),
                gas_limit: Self::ENABLE_ECOTONE_GAS,
                input: Bytes::copy_from_slice(&selector(Self::ENABLE_ECOTONE_SIGNATURE)),
            },
            // See: <https://specs.optimism.io/protocol/ecotone/derivation.html#beacon-block-roots-contract-deployment-eip-4788>
            UpgradeStep {
                intent: Self::BEACON_ROOTS_INTENT,
                from: config.beacon_roots_deployer,
                to: TxKind::Create,
                gas_limit: Self::BEACON_ROOTS_DEPLOYMENT_GAS,
                input: config.beacon_roots_bytecode.clone(),
            },
        ])
    }

    /// Returns the list of [TxDeposit]s for the Ecotone network upgrade.
    pub fn deposits(&self) -> CalldataResult<Vec<TxDeposit>> {
        Ok(self.steps()?.iter().map(UpgradeStep::to_deposit).collect())
    }

    /// Encodes the upgrade transactions with the given encoder.
    ///
    /// The first encoding failure aborts the build; no partial list is ever returned.
    pub fn encode_with<E: DepositEncoder>(
        &self,
        encoder: &E,
    ) -> UpgradeResult<Vec<RawTransaction>, E::Error> {
        let txs = self
            .steps()?
            .iter()
            .enumerate()
            .map(|(index, step)| -> UpgradeResult<RawTransaction, E::Error> {
                let encoded = encoder.encode_deposit(&step.to_deposit()).map_err(|source| {
                    error!(
                        target: "ecotone",
                        "Failed to encode upgrade transaction {index} ({}): {source}",
                        step.intent
                    );
                    UpgradeError::Encoding { index, intent: step.intent, source }
                })?;
                debug!(
                    target: "ecotone",
                    "Encoded upgrade transaction {index} ({}), {} bytes",
                    step.intent,
                    encoded.len()
                );
                Ok(RawTransaction(encoded))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(target: "ecotone", "Built {} Ecotone upgrade transactions", txs.len());
        Ok(txs)
    }
}

impl Hardfork for Ecotone {
    type Error = UpgradeError<Infallible>;

    /// Constructs the Ecotone network upgrade transactions.
    fn txs(&self) -> Result<Vec<RawTransaction>, Self::Error> {
        self.encode_with(&Eip2718Encoder)
    }
}

/// Builds the Ecotone upgrade transactions from the bundled configuration.
pub fn ecotone_upgrade_transactions() -> UpgradeResult<Vec<RawTransaction>, Infallible> {
    Ecotone::bundled()?.txs()
}
