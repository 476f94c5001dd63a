//! CLI library components for tabclean.

pub mod logging;
pub mod pipeline;
pub mod types;
