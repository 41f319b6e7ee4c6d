#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod calldata;
pub use calldata::{
    selector, upgrade_to_calldata, write_address, write_selector, UPGRADE_TO_FUNC_BYTES_4,
    UPGRADE_TO_FUNC_SIGNATURE,
};

mod config;
pub use config::EcotoneConfig;

mod ecotone;
pub use ecotone::{ecotone_upgrade_transactions, Ecotone};

mod errors;
pub use errors::{CalldataError, CalldataResult, ConfigError, UpgradeError, UpgradeResult};

mod step;
pub use step::UpgradeStep;

mod traits;
pub use traits::Hardfork;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
