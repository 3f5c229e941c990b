//! Typed client for the data-exploration backend
//!
//! The backend exposes HTTP JSON endpoints for three independent sections
//! (CSV statistics, club-logo analysis, text articles). Every response is
//! wrapped in a `{status, ...}` envelope; `status != "success"` is a soft
//! failure. The client is single-attempt by design: nothing retries, the
//! views degrade with a placeholder instead.

mod client;
pub mod models;

mod csv;
mod image;
mod text;

pub use client::Client;
pub use models::*;
