use gradeportal_access::{NavSection, Principal};
use gradeportal_core::{Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewerDto {
    pub id: Uuid,
    pub display_name: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub department: Option<String>,
}

impl From<&Principal> for ViewerDto {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            display_name: principal.display_name.clone(),
            role: principal.role,
            permissions: principal.permissions.iter().collect(),
            department: principal.department.clone(),
        }
    }
}

/// What the view layer needs to render a page the caller may see.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageView {
    #[schema(example = "/teacher/grades")]
    pub path: String,
    /// Translation key for the page title; `None` for pages outside the menu
    pub title_key: Option<String>,
    pub section: Option<NavSection>,
    /// The caller's dashboard home
    pub home: String,
    pub viewer: ViewerDto,
}
