//! Operator state value passed explicitly through the orchestrator

use crate::content::entities::GeneratedContent;
use crate::session::entities::Session;
use std::fmt;
use uuid::Uuid;

/// Opaque key for one operator's interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(Uuid);

impl SessionHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Everything the orchestrator needs to remember between operator actions.
///
/// Holds at most one account session and at most one pending draft.
/// Replacing or clearing the draft drops it, which deletes its image file.
#[derive(Debug, Default)]
pub struct OperatorState {
    handle: SessionHandle,
    session: Option<Session>,
    pending: Option<GeneratedContent>,
}

impl OperatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_logged_in)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(Session::username)
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn pending(&self) -> Option<&GeneratedContent> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Store a new draft; any previous draft is dropped (and its file removed).
    pub fn set_pending(&mut self, content: GeneratedContent) {
        self.pending = Some(content);
    }

    pub fn take_pending(&mut self) -> Option<GeneratedContent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::SettingsBlob;

    fn content() -> GeneratedContent {
        let path = tempfile::NamedTempFile::new().unwrap().into_temp_path();
        GeneratedContent::new("caption", path)
    }

    #[test]
    fn test_handles_are_unique() {
        assert_ne!(SessionHandle::new(), SessionHandle::new());
    }

    #[test]
    fn test_login_state_follows_session() {
        let mut state = OperatorState::new();
        assert!(!state.is_logged_in());

        state.set_session(Session::new("alice", SettingsBlob::default()));
        assert!(state.is_logged_in());
        assert_eq!(state.username(), Some("alice"));

        assert!(state.clear_session().is_some());
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_replacing_pending_removes_previous_file() {
        let mut state = OperatorState::new();
        state.set_pending(content());
        let first = state.pending().unwrap().image_path().to_path_buf();

        state.set_pending(content());
        assert!(!first.exists());
        assert!(state.pending().unwrap().image_path().exists());
    }

    #[test]
    fn test_take_pending_empties_slot() {
        let mut state = OperatorState::new();
        state.set_pending(content());
        assert!(state.take_pending().is_some());
        assert!(!state.has_pending());
    }
}
