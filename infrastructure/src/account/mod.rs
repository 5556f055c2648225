//! Account bridge adapter
//!
//! Implements [`AccountClient`](postpilot_application::AccountClient) over the
//! REST bridge that fronts the account-automation library.
//!
//! ```text
//! HttpAccountClient ── reqwest ──▶ bridge ──▶ social platform
//!        │
//!        └── X-Session-Id header (set by login / load_settings)
//! ```

pub mod client;
pub mod protocol;

pub use client::HttpAccountClient;
