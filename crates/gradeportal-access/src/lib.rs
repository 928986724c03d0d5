//! # Grade Portal Access
//!
//! Decides what an authenticated principal may see in the grade portal.
//!
//! Everything here is pure computation over values that are already in
//! memory: the principal supplied by the authentication provider, the path
//! the router is about to render, and the static route table. Nothing in
//! this crate performs I/O or fails.
//!
//! - [`principal`]: the authenticated actor and its profile-completeness rule
//! - [`routes`]: the single declarative table shared by the route guard and the menu
//! - [`resolver`]: `render` / `redirect` / `blocked` / `loading` decisions per guarded view
//! - [`navigation`]: dashboard home and the ordered, sectioned link list
//! - [`guard`]: per-view redirect scheduling that never navigates twice
//! - [`session`]: the session state reducer and its watch-channel store
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_access::{AccessOutcome, resolve_access, visible_links, dashboard_home};
//!
//! let outcome = resolve_access(Some(&principal), required, "/teacher/grades");
//! if let AccessOutcome::Redirect(target) = outcome {
//!     router.navigate(target);
//! }
//!
//! let home = dashboard_home(&principal);
//! for link in visible_links(&principal) {
//!     println!("{} -> {}", link.label_key, link.path);
//! }
//! ```

pub mod guard;
pub mod navigation;
pub mod principal;
pub mod resolver;
pub mod routes;
pub mod session;

// Re-export commonly used types at crate root
pub use gradeportal_core::{Permission, PermissionSet, Role};
pub use guard::{Navigator, RouteGuard};
pub use navigation::{MenuSection, NavLink, dashboard_home, home_for, menu_sections, visible_links};
pub use principal::{Principal, UNDECLARED_DEPARTMENT};
pub use resolver::{AccessOutcome, resolve_access, resolve_route, resolve_session};
pub use routes::{
    ENTRY_ROUTE, MenuEntry, NavSection, PROFILE_SETUP_ROUTE, ROUTES, RouteEntry, normalize_path,
    route_for,
};
pub use session::{SessionEvent, SessionState, SessionStore};
