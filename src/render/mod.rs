//! Render module orchestrator: public surface here, implementation in private submodules.

mod core;

pub use core::{HtmlRenderer, RendererSettings};
