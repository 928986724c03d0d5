//! Text renderings of resolver decisions.

use anyhow::{Result, bail};
use gradeportal_access::{
    ROUTES, Principal, dashboard_home, menu_sections, resolve_access, route_for,
};
use gradeportal_core::{PermissionSet, Role};
use uuid::Uuid;

/// A throwaway principal for offline checks.
pub fn principal(role: Role, permissions: PermissionSet, department: Option<String>) -> Principal {
    Principal::new(Uuid::nil(), "cli", role)
        .with_permissions(permissions)
        .with_department(department)
}

/// One line: the outcome for `path`, and the redirect target if any.
pub fn resolve(principal: &Principal, path: &str) -> Result<String> {
    let Some(route) = route_for(path) else {
        bail!("Unknown route: {}", path);
    };

    let outcome = resolve_access(Some(principal), route.required, path);
    Ok(match outcome.redirect_target() {
        Some(target) => format!("{} -> {} {}", path, outcome.kind(), target),
        None => format!("{} -> {}", path, outcome.kind()),
    })
}

/// Dashboard home followed by the menu, grouped by section.
pub fn links(principal: &Principal) -> String {
    let mut lines = vec![format!("home: {}", dashboard_home(principal))];

    let sections = menu_sections(principal);
    if sections.is_empty() {
        lines.push("(no links)".to_string());
    }
    for section in sections {
        lines.push(format!("[{}]", section.label_key));
        lines.extend(section.links.iter().map(|link| {
            format!("  {:<24} {:<28} {}", link.path, link.label_key, link.icon_key)
        }));
    }

    lines.join("\n") + "\n"
}

/// The route table, one route per line.
pub fn routes() -> String {
    ROUTES
        .iter()
        .map(|route| {
            let required = if route.required.is_empty() {
                "(any signed-in)".to_string()
            } else {
                route.required.to_string()
            };
            let menu = route
                .menu
                .map(|menu| menu.section.label_key())
                .unwrap_or("-");
            format!("{:<24} {:<40} {}\n", route.path, required, menu)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeportal_core::Permission;

    #[test]
    fn test_resolve_reports_redirect_target() {
        let teacher = principal(Role::Teacher, PermissionSet::from(Permission::EnterGrades), None);
        assert_eq!(resolve(&teacher, "/teacher").unwrap(), "/teacher -> render");
        assert_eq!(resolve(&teacher, "/admin").unwrap(), "/admin -> redirect /");
    }

    #[test]
    fn test_resolve_holds_undeclared_student() {
        let student = principal(
            Role::Student,
            PermissionSet::from(Permission::ViewOwnGrades),
            Some("Undeclared".to_string()),
        );
        assert_eq!(
            resolve(&student, "/student/grades").unwrap(),
            "/student/grades -> redirect /student/setup"
        );
        assert_eq!(
            resolve(&student, "/student/setup").unwrap(),
            "/student/setup -> render"
        );
    }

    #[test]
    fn test_resolve_unknown_route() {
        let nobody = principal(Role::Student, PermissionSet::EMPTY, None);
        assert!(resolve(&nobody, "/nope").is_err());
    }

    #[test]
    fn test_links_lists_sections() {
        let parent = principal(
            Role::Parent,
            PermissionSet::from([Permission::ViewChildGrades, Permission::ReceiveNotifications]),
            None,
        );
        let out = links(&parent);
        assert!(out.starts_with("home: /parent\n"));
        assert!(out.contains("[nav.section.main]"));
        assert!(out.contains("[nav.section.personal]"));
        assert!(!out.contains("/student/grades"));
    }

    #[test]
    fn test_links_without_permissions() {
        let nobody = principal(Role::Admin, PermissionSet::EMPTY, None);
        assert_eq!(links(&nobody), "home: /student\n(no links)\n");
    }

    #[test]
    fn test_routes_lists_every_route() {
        let out = routes();
        assert_eq!(out.lines().count(), ROUTES.len());
        assert!(out.contains("/admin/users"));
    }
}
