//! Internal modules for the league client.
//!
//! This library provides command parsing, configuration loading, and the
//! interactive session used by the rr_client binary.

pub mod commands;
pub mod config;
pub mod session;
