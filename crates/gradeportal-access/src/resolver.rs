//! Access decisions for guarded views.

use gradeportal_core::PermissionSet;
use serde::Serialize;

use crate::principal::Principal;
use crate::routes::{ENTRY_ROUTE, PROFILE_SETUP_ROUTE, normalize_path, route_for};
use crate::session::SessionState;

/// What a guarded view should do on this render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "redirect_to", rename_all = "snake_case")]
pub enum AccessOutcome {
    /// The session check hasn't finished; show a neutral placeholder.
    Loading,
    /// Show the protected view.
    Render,
    /// Navigate elsewhere.
    Redirect(&'static str),
    /// Render nothing; a redirect is already on its way.
    Blocked,
}

impl AccessOutcome {
    pub const fn kind(self) -> &'static str {
        match self {
            AccessOutcome::Loading => "loading",
            AccessOutcome::Render => "render",
            AccessOutcome::Redirect(_) => "redirect",
            AccessOutcome::Blocked => "blocked",
        }
    }

    pub const fn redirect_target(self) -> Option<&'static str> {
        match self {
            AccessOutcome::Redirect(target) => Some(target),
            _ => None,
        }
    }

    pub const fn is_render(self) -> bool {
        matches!(self, AccessOutcome::Render)
    }
}

/// Decides whether `principal` may see the view at `current_path`.
///
/// `required` is an any-of set; empty means any authenticated principal.
/// A principal without a single permission counts as unauthenticated.
/// Students who still need a department are held on the setup page.
pub fn resolve_access(
    principal: Option<&Principal>,
    required: PermissionSet,
    current_path: &str,
) -> AccessOutcome {
    let Some(principal) = principal else {
        return AccessOutcome::Redirect(ENTRY_ROUTE);
    };

    if principal.permissions.is_empty() {
        return AccessOutcome::Redirect(ENTRY_ROUTE);
    }

    if !required.is_empty() && !principal.permissions.intersects(required) {
        return AccessOutcome::Redirect(ENTRY_ROUTE);
    }

    if principal.needs_profile_setup() && normalize_path(current_path) != PROFILE_SETUP_ROUTE {
        return AccessOutcome::Redirect(PROFILE_SETUP_ROUTE);
    }

    AccessOutcome::Render
}

/// [`resolve_access`] gated on the session check: nothing is evaluated
/// until the session has finished loading.
pub fn resolve_session(
    session: &SessionState,
    required: PermissionSet,
    current_path: &str,
) -> AccessOutcome {
    match session {
        SessionState::Loading => AccessOutcome::Loading,
        SessionState::Anonymous => resolve_access(None, required, current_path),
        SessionState::Authenticated(principal) => {
            resolve_access(Some(principal), required, current_path)
        }
    }
}

/// Resolves a path against the route table. `None` for paths the table
/// doesn't know.
pub fn resolve_route(session: &SessionState, current_path: &str) -> Option<AccessOutcome> {
    route_for(current_path).map(|route| resolve_session(session, route.required, current_path))
}
