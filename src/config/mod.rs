//! Configuration modules for the Rollcall API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`server`]: HTTP listener address

pub mod cors;
pub mod database;
pub mod server;
