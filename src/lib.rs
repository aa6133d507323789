#![doc(test(attr(deny(warnings))))]

//! Six Jars splits an income across six jars (necessities, education,
//! long term savings, financial freedom, play and give) and ships a terminal
//! shell that drives the allocation engine.

pub mod cli;
pub mod display;
pub mod utils;

pub use jars_config;
pub use jars_core;
pub use jars_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Six Jars tracing initialized.");
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
