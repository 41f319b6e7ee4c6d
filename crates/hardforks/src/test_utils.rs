//! Test utilities for `kona-hardforks`.

use alloc::{format, string::String, sync::Arc, vec::Vec};
use alloy_primitives::Bytes;
use core::cell::Cell;
use kona_protocol::{DepositEncoder, Eip2718Encoder};
use op_alloy_consensus::TxDeposit;
use spin::Mutex;
use thiserror::Error;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// The error injected by [FailingEncoder].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Injected failure at call {0}")]
pub struct InjectedFailure(pub usize);

/// An encoder that fails on one call and encodes canonically otherwise.
#[derive(Debug, Default)]
pub struct FailingEncoder {
    fail_at: usize,
    calls: Cell<usize>,
}

impl FailingEncoder {
    /// Creates an encoder that fails on the call with index `fail_at`.
    pub const fn new(fail_at: usize) -> Self {
        Self { fail_at, calls: Cell::new(0) }
    }

    /// Number of deposits the encoder was asked to encode.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DepositEncoder for FailingEncoder {
    type Error = InjectedFailure;

    fn encode_deposit(&self, deposit: &TxDeposit) -> Result<Bytes, Self::Error> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call == self.fail_at {
            return Err(InjectedFailure(call));
        }
        Eip2718Encoder.encode_deposit(deposit).map_err(|e| match e {})
    }
}

/// Collected events and their levels.
#[derive(Debug, Default, Clone)]
pub struct TraceStorage(pub Arc<Mutex<Vec<(Level, String)>>>);

impl TraceStorage {
    /// Returns the messages recorded at the given level.
    pub fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter_map(|(l, message)| if *l == level { Some(message.clone()) } else { None })
            .collect()
    }
}

/// A subscriber layer that records every event into a [TraceStorage].
#[derive(Debug, Default)]
pub struct CollectingLayer {
    storage: TraceStorage,
}

impl CollectingLayer {
    /// Creates a layer that records into `storage`.
    pub const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        self.storage.0.lock().push((level, format!("{:?}", event)));
    }
}
