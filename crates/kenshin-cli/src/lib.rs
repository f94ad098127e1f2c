//! CLI library components for the checkup converter.

pub mod logging;
pub mod pipeline;
