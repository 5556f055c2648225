//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod account_client;
pub mod activity_log;
pub mod generation;
pub mod progress;
pub mod session_store;
