//! Session state and its update channel.
//!
//! The authenticated principal is read by many views but changed in only
//! three places: session restore, profile update, logout. Those changes are
//! [`SessionEvent`]s folded by [`SessionState::apply`]; [`SessionStore`]
//! publishes the result on a `tokio::sync::watch` channel so readers get a
//! consistent snapshot and a change notification.

use gradeportal_core::PermissionSet;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::principal::Principal;
use crate::resolver::{AccessOutcome, resolve_session};

/// What the authentication provider currently knows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The session check is in flight.
    #[default]
    Loading,
    /// Checked; nobody is signed in.
    Anonymous,
    Authenticated(Principal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The stored session was confirmed for this principal.
    Restored(Principal),
    /// No session, or it couldn't be confirmed.
    RestoreFailed,
    /// The principal changed their department.
    ProfileUpdated { department: Option<String> },
    LoggedOut,
}

impl SessionState {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Folds one event into the state.
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match (self, event) {
            (_, SessionEvent::Restored(principal)) => SessionState::Authenticated(principal),
            (_, SessionEvent::RestoreFailed) | (_, SessionEvent::LoggedOut) => {
                SessionState::Anonymous
            }
            (SessionState::Authenticated(principal), SessionEvent::ProfileUpdated { department }) => {
                SessionState::Authenticated(principal.with_department(department))
            }
            // Nobody to update.
            (state, SessionEvent::ProfileUpdated { .. }) => state,
        }
    }
}

/// Single owner of the session state.
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store whose session check hasn't completed yet.
    pub fn new() -> Self {
        Self::with_state(SessionState::Loading)
    }

    pub fn with_state(state: SessionState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    pub fn dispatch(&self, event: SessionEvent) {
        let label = event_label(&event);
        self.tx.send_modify(|state| {
            let previous = std::mem::take(state);
            *state = previous.apply(event);
        });

        match &*self.tx.borrow() {
            SessionState::Authenticated(principal) => info!(
                event = label,
                principal_id = %principal.id,
                role = %principal.role,
                "session updated"
            ),
            state => debug!(event = label, authenticated = state.is_authenticated(), "session updated"),
        }
    }

    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Read-only handle that is notified on every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Resolves a guarded view against the current snapshot.
    pub fn resolve(&self, required: PermissionSet, current_path: &str) -> AccessOutcome {
        resolve_session(&self.tx.borrow(), required, current_path)
    }
}

fn event_label(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::Restored(_) => "restored",
        SessionEvent::RestoreFailed => "restore_failed",
        SessionEvent::ProfileUpdated { .. } => "profile_updated",
        SessionEvent::LoggedOut => "logged_out",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeportal_core::{Permission, Role};
    use uuid::Uuid;

    fn new_student() -> Principal {
        Principal::new(Uuid::new_v4(), "Lin Student", Role::Student)
            .with_permissions(Permission::ViewOwnGrades)
            .with_department(Some("Undeclared"))
    }

    #[test]
    fn test_reducer_transitions() {
        let student = new_student();

        let state = SessionState::Loading.apply(SessionEvent::Restored(student.clone()));
        assert_eq!(state.principal(), Some(&student));

        let state = state.apply(SessionEvent::ProfileUpdated {
            department: Some("Biology".to_string()),
        });
        assert_eq!(
            state.principal().and_then(|p| p.department.as_deref()),
            Some("Biology")
        );

        let state = state.apply(SessionEvent::LoggedOut);
        assert_eq!(state, SessionState::Anonymous);

        assert_eq!(
            SessionState::Loading.apply(SessionEvent::RestoreFailed),
            SessionState::Anonymous
        );
    }

    #[test]
    fn test_profile_update_without_principal_is_ignored() {
        let event = SessionEvent::ProfileUpdated {
            department: Some("Law".to_string()),
        };
        assert_eq!(SessionState::Anonymous.apply(event.clone()), SessionState::Anonymous);
        assert_eq!(SessionState::Loading.apply(event), SessionState::Loading);
    }

    #[test]
    fn test_store_starts_loading() {
        let store = SessionStore::new();
        assert!(store.current().is_loading());
        assert_eq!(
            store.resolve(PermissionSet::EMPTY, "/messages"),
            AccessOutcome::Loading
        );
    }

    #[test]
    fn test_setup_clears_after_profile_update() {
        let store = SessionStore::new();
        store.dispatch(SessionEvent::Restored(new_student()));

        let required = PermissionSet::from(Permission::ViewOwnGrades);
        assert_eq!(
            store.resolve(required, "/student/grades"),
            AccessOutcome::Redirect("/student/setup")
        );

        store.dispatch(SessionEvent::ProfileUpdated {
            department: Some("Mathematics".to_string()),
        });
        assert_eq!(
            store.resolve(required, "/student/grades"),
            AccessOutcome::Render
        );
    }

    #[tokio::test]
    async fn test_subscribers_observe_dispatches() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_loading());

        store.dispatch(SessionEvent::Restored(new_student()));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated());

        store.dispatch(SessionEvent::LoggedOut);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), SessionState::Anonymous);
    }
}
