//! Session persistence: file-backed [`SessionStore`](postpilot_application::SessionStore).

mod file_store;

pub use file_store::FileSessionStore;
