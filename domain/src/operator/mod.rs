//! Per-operator state.
//!
//! - [`state::SessionHandle`]: opaque key identifying one operator's interactive session
//! - [`state::OperatorState`]: the session and pending draft passed through every orchestrator call

pub mod state;
