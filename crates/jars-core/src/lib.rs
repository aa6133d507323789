//! jars-core
//!
//! Allocation engine for the Six Jars method: intents, the pure transition
//! function, the configuration validator and the session that owns state.
//! Depends on jars-domain. No CLI, no terminal I/O, no storage.

pub mod engine;
pub mod error;
pub mod intent;
pub mod session;
pub mod validation;

pub use engine::*;
pub use error::CoreError;
pub use intent::*;
pub use session::*;
pub use validation::*;
