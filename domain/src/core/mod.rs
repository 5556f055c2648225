//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`error::FailureKind`]: the failure taxonomy every layer reports against

pub mod error;
