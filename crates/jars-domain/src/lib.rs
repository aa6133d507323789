//! jars-domain
//!
//! Pure domain models for the Six Jars method (jars, configuration, summary, state).
//! No I/O, no CLI, no storage. Only data types and their defaults.

pub mod config;
pub mod jar;
pub mod state;
pub mod summary;

pub use config::*;
pub use jar::*;
pub use state::*;
pub use summary::*;
