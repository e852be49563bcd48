//! Shared utilities for the Rollcall API.
//!
//! - [`errors`]: Application error types and handling
//! - [`responses`]: Common response envelopes

pub mod errors;
pub mod responses;
