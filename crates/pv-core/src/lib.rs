//! Core functionality for the pitchview dashboard
//!
//! This crate provides the plumbing shared by every section of the UI:
//! the error taxonomy, the chart-slot registry, and the readiness
//! signaling used to sequence dependent renders.

pub mod error;
pub mod ready;
pub mod registry;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ready::{ReadySignal, Readiness};
pub use registry::{ChartHandle, ChartRegistry};
