#![doc(test(attr(deny(warnings))))]

//! Rentbook computes profit and portfolio figures for a small property back
//! office from collections exported by its entity store.
//!
//! The financial core lives in `rentbook-core`; this crate wires it to
//! configuration, JSON exports and the `rentbook_cli` binary.

pub mod cli;
pub mod errors;
pub mod report;
pub mod utils;

use std::sync::Once;

pub use errors::RentbookError;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rentbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
