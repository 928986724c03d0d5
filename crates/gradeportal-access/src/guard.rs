//! Per-view guard that schedules each redirect once.
//!
//! A guarded view is re-evaluated on every render. [`resolve_session`] is
//! pure, so without bookkeeping every pass would ask the router to navigate
//! again. [`RouteGuard`] remembers the redirect it already issued and
//! reports [`AccessOutcome::Blocked`] until the outcome changes.

use gradeportal_core::PermissionSet;
use tracing::debug;

use crate::resolver::{AccessOutcome, resolve_session};
use crate::routes::route_for;
use crate::session::SessionState;

/// The host router's navigation hook.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    required: PermissionSet,
    scheduled: Option<&'static str>,
}

impl RouteGuard {
    pub fn new(required: PermissionSet) -> Self {
        Self {
            required,
            scheduled: None,
        }
    }

    /// Guard for a path in the route table.
    pub fn for_path(path: &str) -> Option<Self> {
        route_for(path).map(|route| Self::new(route.required))
    }

    pub fn required(&self) -> PermissionSet {
        self.required
    }

    /// The redirect issued and not yet superseded, if any.
    pub fn scheduled(&self) -> Option<&'static str> {
        self.scheduled
    }

    /// Evaluates one render pass.
    ///
    /// A new redirect target calls `navigator` exactly once and returns
    /// `Redirect`; later passes with the same target return `Blocked`.
    /// `Render` and `Loading` clear the remembered redirect.
    pub fn evaluate<N>(
        &mut self,
        session: &SessionState,
        current_path: &str,
        navigator: &mut N,
    ) -> AccessOutcome
    where
        N: Navigator + ?Sized,
    {
        match resolve_session(session, self.required, current_path) {
            AccessOutcome::Redirect(target) if self.scheduled == Some(target) => {
                AccessOutcome::Blocked
            }
            AccessOutcome::Redirect(target) => {
                debug!(from = %current_path, to = %target, "scheduling redirect");
                self.scheduled = Some(target);
                navigator.navigate(target);
                AccessOutcome::Redirect(target)
            }
            outcome => {
                self.scheduled = None;
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Principal;
    use gradeportal_core::{Permission, Role};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.calls.push(path.to_string());
        }
    }

    fn teacher() -> Principal {
        Principal::new(Uuid::new_v4(), "Grace Teacher", Role::Teacher)
            .with_permissions(Permission::EnterGrades)
    }

    #[test]
    fn test_redirect_navigates_once_across_rerenders() {
        let mut guard = RouteGuard::for_path("/admin/users").unwrap();
        let mut navigator = RecordingNavigator::default();
        let session = SessionState::Authenticated(teacher());

        assert_eq!(
            guard.evaluate(&session, "/admin/users", &mut navigator),
            AccessOutcome::Redirect("/")
        );
        for _ in 0..3 {
            assert_eq!(
                guard.evaluate(&session, "/admin/users", &mut navigator),
                AccessOutcome::Blocked
            );
        }
        assert_eq!(navigator.calls, vec!["/".to_string()]);
        assert_eq!(guard.scheduled(), Some("/"));
    }

    #[test]
    fn test_loading_never_navigates() {
        let mut guard = RouteGuard::for_path("/teacher").unwrap();
        let mut navigator = RecordingNavigator::default();

        assert_eq!(
            guard.evaluate(&SessionState::Loading, "/teacher", &mut navigator),
            AccessOutcome::Loading
        );
        assert!(navigator.calls.is_empty());
    }

    #[test]
    fn test_render_clears_scheduled_redirect() {
        let mut guard = RouteGuard::for_path("/teacher").unwrap();
        let mut navigator = RecordingNavigator::default();

        guard.evaluate(&SessionState::Anonymous, "/teacher", &mut navigator);
        assert_eq!(guard.scheduled(), Some("/"));

        let session = SessionState::Authenticated(teacher());
        assert_eq!(
            guard.evaluate(&session, "/teacher", &mut navigator),
            AccessOutcome::Render
        );
        assert_eq!(guard.scheduled(), None);

        // Logging out afterwards schedules a fresh redirect.
        guard.evaluate(&SessionState::Anonymous, "/teacher", &mut navigator);
        assert_eq!(navigator.calls, vec!["/".to_string(), "/".to_string()]);
    }

    #[test]
    fn test_changed_target_navigates_again() {
        let mut guard = RouteGuard::new(PermissionSet::EMPTY);
        let mut navigator = RecordingNavigator::default();

        let undeclared = Principal::new(Uuid::new_v4(), "New Student", Role::Student)
            .with_permissions(Permission::ViewOwnGrades);
        guard.evaluate(
            &SessionState::Authenticated(undeclared),
            "/messages",
            &mut navigator,
        );
        guard.evaluate(&SessionState::Anonymous, "/messages", &mut navigator);

        assert_eq!(
            navigator.calls,
            vec!["/student/setup".to_string(), "/".to_string()]
        );
    }

    #[test]
    fn test_closure_navigator() {
        let mut seen = Vec::new();
        let mut navigate = |path: &str| seen.push(path.to_string());
        let mut guard = RouteGuard::for_path("/profile").unwrap();

        guard.evaluate(&SessionState::Anonymous, "/profile", &mut navigate);
        guard.evaluate(&SessionState::Anonymous, "/profile", &mut navigate);

        assert_eq!(seen, vec!["/".to_string()]);
    }

    #[test]
    fn test_unknown_path_has_no_guard() {
        assert!(RouteGuard::for_path("/not-a-page").is_none());
    }
}
