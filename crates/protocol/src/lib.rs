#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod encoding;
pub use encoding::{decode_deposit_envelope, DepositDecodeError, DepositEncoder, Eip2718Encoder};

mod raw_tx;
pub use raw_tx::RawTransaction;

mod predeploys;
pub use predeploys::{Predeploys, SystemAddresses};
