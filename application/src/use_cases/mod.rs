//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod account;
pub mod error;
pub mod generate_content;
pub mod orchestrator;
pub mod session_lifecycle;
#[cfg(test)]
pub(crate) mod test_support;
