//! Account session domain.
//!
//! - [`entities::Session`]: an authenticated account session
//! - [`entities::SessionRecord`]: the small metadata document persisted next to the settings
//! - [`entities::SettingsBlob`]: opaque client settings produced by the account backend

pub mod entities;
