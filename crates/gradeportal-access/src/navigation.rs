//! Dashboard home and menu links.
//!
//! Both are pure functions of the principal's permissions over the static
//! route table: the same principal always gets the same links, in the same
//! order.

use gradeportal_core::{Permission, PermissionSet};
use serde::Serialize;

use crate::principal::Principal;
use crate::routes::{NavSection, ROUTES, route_for};

/// Dashboard precedence. The first permission held wins.
const HOME_PRECEDENCE: [(Permission, &str); 3] = [
    (Permission::ManageUsers, "/admin"),
    (Permission::EnterGrades, "/teacher"),
    (Permission::ViewChildGrades, "/parent"),
];

const DEFAULT_HOME: &str = "/student";

/// A rendered menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label_key: &'static str,
    pub path: &'static str,
    pub icon_key: &'static str,
    pub section: NavSection,
}

/// Links of one section, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub section: NavSection,
    pub label_key: &'static str,
    pub links: Vec<NavLink>,
}

/// Landing page for a permission set: the most privileged dashboard it
/// qualifies for, falling back to the student home.
pub fn home_for(permissions: PermissionSet) -> &'static str {
    HOME_PRECEDENCE
        .iter()
        .find(|(permission, _)| permissions.contains(*permission))
        .map_or(DEFAULT_HOME, |(_, path)| *path)
}

pub fn dashboard_home(principal: &Principal) -> &'static str {
    home_for(principal.permissions)
}

/// Menu links for `principal`, in table order, led by a Dashboard link.
///
/// A link is kept when its route admits the principal and the principal
/// holds none of the link's `hidden_for` permissions. Principals that the
/// resolver would bounce everywhere (no permissions, or pending profile
/// setup) get no links.
pub fn visible_links(principal: &Principal) -> Vec<NavLink> {
    let granted = principal.permissions;
    if granted.is_empty() || principal.needs_profile_setup() {
        return Vec::new();
    }

    let mut links = Vec::new();

    let home = dashboard_home(principal);
    if route_for(home).is_some_and(|route| route.admits(granted)) {
        links.push(NavLink {
            label_key: "nav.dashboard",
            path: home,
            icon_key: "icon.home",
            section: NavSection::Main,
        });
    }

    links.extend(ROUTES.iter().filter_map(|route| {
        let menu = route.menu?;
        if !route.admits(granted) || menu.hidden_for.intersects(granted) {
            return None;
        }
        Some(NavLink {
            label_key: menu.label_key,
            path: route.path,
            icon_key: menu.icon_key,
            section: menu.section,
        })
    }));

    links
}

/// [`visible_links`] grouped by section. Empty sections are omitted.
pub fn menu_sections(principal: &Principal) -> Vec<MenuSection> {
    let links = visible_links(principal);

    NavSection::ALL
        .into_iter()
        .filter_map(|section| {
            let in_section: Vec<NavLink> = links
                .iter()
                .filter(|link| link.section == section)
                .cloned()
                .collect();
            (!in_section.is_empty()).then(|| MenuSection {
                section,
                label_key: section.label_key(),
                links: in_section,
            })
        })
        .collect()
}
