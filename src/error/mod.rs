//! Error module orchestrator: public surface here, implementation in private submodules.
//!
//! Downstream code imports error types from here while the definitions live
//! in the private `types` module.

mod types;

pub use types::{CanvasError, Result};
