//! The portal's route table.
//!
//! One declarative table drives both the route guard (what a principal may
//! reach) and the menu (what a principal is shown), so a page's requirement
//! and its link can't disagree.

use gradeportal_core::{Permission, PermissionSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public entry route (the login page). Failed checks land here.
pub const ENTRY_ROUTE: &str = "/";

/// The only route reachable by a student who still needs to pick a department.
pub const PROFILE_SETUP_ROUTE: &str = "/student/setup";

/// Menu grouping, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Main,
    Administrative,
    System,
    Personal,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Main,
        NavSection::Administrative,
        NavSection::System,
        NavSection::Personal,
    ];

    /// Translation key for the section heading.
    pub const fn label_key(self) -> &'static str {
        match self {
            NavSection::Main => "nav.section.main",
            NavSection::Administrative => "nav.section.administrative",
            NavSection::System => "nav.section.system",
            NavSection::Personal => "nav.section.personal",
        }
    }
}

/// How a route appears in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label_key: &'static str,
    pub icon_key: &'static str,
    pub section: NavSection,
    /// Holding any of these hides the link even when the route is reachable.
    pub hidden_for: PermissionSet,
}

/// A guarded page and the permissions that unlock it.
///
/// `required` is an any-of set; an empty set admits any authenticated
/// principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub required: PermissionSet,
    pub menu: Option<MenuEntry>,
}

impl RouteEntry {
    const fn page(path: &'static str, required: &[Permission]) -> Self {
        Self {
            path,
            required: PermissionSet::of(required),
            menu: None,
        }
    }

    const fn linked(
        path: &'static str,
        required: &[Permission],
        section: NavSection,
        label_key: &'static str,
        icon_key: &'static str,
    ) -> Self {
        Self {
            path,
            required: PermissionSet::of(required),
            menu: Some(MenuEntry {
                label_key,
                icon_key,
                section,
                hidden_for: PermissionSet::EMPTY,
            }),
        }
    }

    const fn hidden_for(mut self, permissions: &[Permission]) -> Self {
        if let Some(mut menu) = self.menu {
            menu.hidden_for = PermissionSet::of(permissions);
            self.menu = Some(menu);
        }
        self
    }

    /// Whether a principal holding `granted` passes this route's requirement.
    pub const fn admits(&self, granted: PermissionSet) -> bool {
        self.required.is_empty() || self.required.intersects(granted)
    }
}

use NavSection::{Administrative, Main, Personal, System};
use Permission::*;

/// Every guarded route, in menu order.
///
/// Student-only links are hidden from anyone who also holds
/// `view_child_grades`: such a principal is a parent.
pub static ROUTES: &[RouteEntry] = &[
    // Dashboards; the menu's Dashboard link is synthesized from `dashboard_home`.
    RouteEntry::page("/admin", &[ManageUsers]),
    RouteEntry::page("/teacher", &[EnterGrades]),
    RouteEntry::page("/parent", &[ViewChildGrades]),
    RouteEntry::page("/student", &[ViewOwnGrades]),
    RouteEntry::page(PROFILE_SETUP_ROUTE, &[]),
    // Main
    RouteEntry::linked("/student/grades", &[ViewOwnGrades], Main, "nav.my_grades", "icon.grades")
        .hidden_for(&[ViewChildGrades]),
    RouteEntry::linked(
        "/student/attendance",
        &[ViewOwnGrades],
        Main,
        "nav.my_attendance",
        "icon.attendance",
    )
    .hidden_for(&[ViewChildGrades]),
    RouteEntry::linked("/student/schedule", &[ViewOwnGrades], Main, "nav.my_schedule", "icon.calendar")
        .hidden_for(&[ViewChildGrades]),
    RouteEntry::linked("/student/fees", &[ViewOwnGrades], Main, "nav.my_fees", "icon.wallet")
        .hidden_for(&[ViewChildGrades]),
    RouteEntry::linked("/parent/grades", &[ViewChildGrades], Main, "nav.child_grades", "icon.grades"),
    RouteEntry::linked(
        "/parent/attendance",
        &[ViewChildGrades],
        Main,
        "nav.child_attendance",
        "icon.attendance",
    ),
    RouteEntry::linked("/parent/fees", &[ViewChildGrades], Main, "nav.child_fees", "icon.wallet"),
    RouteEntry::linked("/teacher/grades", &[EnterGrades], Main, "nav.grade_entry", "icon.edit"),
    RouteEntry::linked(
        "/teacher/attendance",
        &[EnterGrades],
        Main,
        "nav.class_attendance",
        "icon.attendance",
    ),
    RouteEntry::linked("/teacher/schedule", &[EnterGrades], Main, "nav.teaching_schedule", "icon.calendar"),
    RouteEntry::linked("/messages", &[], Main, "nav.messages", "icon.chat"),
    // Administrative
    RouteEntry::linked("/admin/users", &[ManageUsers], Administrative, "nav.users", "icon.users"),
    RouteEntry::linked(
        "/admin/grades",
        &[ManageGrades],
        Administrative,
        "nav.grade_management",
        "icon.grades",
    ),
    RouteEntry::linked(
        "/admin/attendance",
        &[ManageAttendance],
        Administrative,
        "nav.attendance_management",
        "icon.attendance",
    ),
    RouteEntry::linked("/admin/fees", &[ManageFees], Administrative, "nav.fee_management", "icon.wallet"),
    RouteEntry::linked(
        "/admin/analytics",
        &[ViewAnalytics],
        Administrative,
        "nav.analytics",
        "icon.chart",
    ),
    // System
    RouteEntry::linked("/admin/settings", &[ManageSystem], System, "nav.system_settings", "icon.settings"),
    RouteEntry::linked("/admin/audit", &[ManageSystem], System, "nav.audit_log", "icon.shield"),
    // Personal
    RouteEntry::linked(
        "/notifications",
        &[ReceiveNotifications],
        Personal,
        "nav.notifications",
        "icon.bell",
    ),
    RouteEntry::linked("/profile", &[], Personal, "nav.profile", "icon.user"),
];

/// Canonical form of a router path: query string and fragment dropped,
/// trailing slashes trimmed (the root stays `/`), empty input becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        ENTRY_ROUTE
    } else {
        trimmed
    }
}

/// Looks up the table row for `path` after normalization.
pub fn route_for(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/student/setup"), "/student/setup");
        assert_eq!(normalize_path("/student/setup/"), "/student/setup");
        assert_eq!(normalize_path("/student/setup?step=2"), "/student/setup");
        assert_eq!(normalize_path("/student/setup#top"), "/student/setup");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_paths_are_unique() {
        let mut seen = HashSet::new();
        for route in ROUTES {
            assert!(seen.insert(route.path), "duplicate route {}", route.path);
        }
    }

    #[test]
    fn test_every_path_is_already_normalized() {
        for route in ROUTES {
            assert_eq!(normalize_path(route.path), route.path);
            assert_ne!(route.path, ENTRY_ROUTE);
        }
    }

    #[test]
    fn test_sections_appear_in_render_order() {
        let sections: Vec<NavSection> = ROUTES
            .iter()
            .filter_map(|route| route.menu.map(|menu| menu.section))
            .collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
    }

    #[test]
    fn test_route_lookup() {
        let route = route_for("/admin/users/").unwrap();
        assert_eq!(route.path, "/admin/users");
        assert!(route.required.contains(Permission::ManageUsers));

        let setup = route_for(PROFILE_SETUP_ROUTE).unwrap();
        assert!(setup.required.is_empty());
        assert!(setup.menu.is_none());

        assert!(route_for("/admin/nuclear-launch").is_none());
        assert!(route_for(ENTRY_ROUTE).is_none());
    }

    #[test]
    fn test_admits_uses_any_of() {
        let route = RouteEntry::page("/x", &[ManageUsers, ManageSystem]);
        assert!(route.admits(PermissionSet::from(ManageSystem)));
        assert!(!route.admits(PermissionSet::from(ManageFees)));

        let open = RouteEntry::page("/y", &[]);
        assert!(open.admits(PermissionSet::EMPTY));
    }

    #[test]
    fn test_student_links_hidden_for_parents() {
        for path in ["/student/grades", "/student/attendance", "/student/schedule", "/student/fees"] {
            let menu = route_for(path).and_then(|route| route.menu).unwrap();
            assert!(menu.hidden_for.contains(ViewChildGrades), "{path}");
        }
    }
}
