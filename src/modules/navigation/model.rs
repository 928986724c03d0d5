use gradeportal_access::{AccessOutcome, MenuEntry, MenuSection, NavLink, NavSection, RouteEntry};
use gradeportal_core::Permission;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavLinkDto {
    /// Translation key for the link text
    #[schema(example = "nav.my_grades")]
    pub label_key: String,
    #[schema(example = "/student/grades")]
    pub path: String,
    #[schema(example = "icon.grades")]
    pub icon_key: String,
    pub section: NavSection,
}

impl From<NavLink> for NavLinkDto {
    fn from(link: NavLink) -> Self {
        Self {
            label_key: link.label_key.to_string(),
            path: link.path.to_string(),
            icon_key: link.icon_key.to_string(),
            section: link.section,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MenuSectionDto {
    pub section: NavSection,
    #[schema(example = "nav.section.main")]
    pub label_key: String,
    pub links: Vec<NavLinkDto>,
}

impl From<MenuSection> for MenuSectionDto {
    fn from(section: MenuSection) -> Self {
        Self {
            section: section.section,
            label_key: section.label_key.to_string(),
            links: section.links.into_iter().map(NavLinkDto::from).collect(),
        }
    }
}

/// Landing page and menu for the caller.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    #[schema(example = "/teacher")]
    pub home: String,
    pub sections: Vec<MenuSectionDto>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccessQuery {
    /// Portal path to check, e.g. `/student/grades`
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessResponse {
    /// The path as checked, normalized
    pub path: String,
    /// One of `render`, `redirect`, `blocked`, `loading`
    #[schema(example = "redirect")]
    pub outcome: String,
    #[schema(example = "/student/setup")]
    pub redirect_to: Option<String>,
}

impl AccessResponse {
    pub fn new(path: &str, outcome: AccessOutcome) -> Self {
        Self {
            path: path.to_string(),
            outcome: outcome.kind().to_string(),
            redirect_to: outcome.redirect_target().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub label_key: String,
    pub icon_key: String,
    pub section: NavSection,
    /// Holding any of these hides the link
    pub hidden_for: Vec<Permission>,
}

impl From<MenuEntry> for MenuDto {
    fn from(menu: MenuEntry) -> Self {
        Self {
            label_key: menu.label_key.to_string(),
            icon_key: menu.icon_key.to_string(),
            section: menu.section,
            hidden_for: menu.hidden_for.iter().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub path: String,
    /// Any one of these unlocks the route; empty means any signed-in principal
    pub required: Vec<Permission>,
    pub menu: Option<MenuDto>,
}

impl From<&RouteEntry> for RouteDto {
    fn from(route: &RouteEntry) -> Self {
        Self {
            path: route.path.to_string(),
            required: route.required.iter().collect(),
            menu: route.menu.map(MenuDto::from),
        }
    }
}
