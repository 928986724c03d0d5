//! The authenticated principal.

use gradeportal_core::{Permission, PermissionSet, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Department placeholder assigned to students who haven't declared one yet.
pub const UNDECLARED_DEPARTMENT: &str = "Undeclared";

/// The actor for whom access is being evaluated.
///
/// Created when a session is restored, replaced when the profile is updated,
/// dropped on logout. Components never hold a mutable reference to it; see
/// [`crate::session::SessionStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[schema(value_type = Vec<Permission>)]
    pub permissions: PermissionSet,
    pub department: Option<String>,
}

impl Principal {
    pub fn new(id: Uuid, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email: String::new(),
            role,
            permissions: PermissionSet::EMPTY,
            department: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_permissions(mut self, permissions: impl Into<PermissionSet>) -> Self {
        self.permissions = permissions.into();
        self
    }

    /// Returns the principal with its department replaced, as after a
    /// profile update.
    pub fn with_department<S: Into<String>>(mut self, department: Option<S>) -> Self {
        self.department = department.map(Into::into);
        self
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// True if the principal holds at least one of `permissions`.
    pub fn has_any_permission(&self, permissions: PermissionSet) -> bool {
        self.permissions.intersects(permissions)
    }

    /// Students must pick a department before anything but the setup page
    /// is reachable.
    pub fn needs_profile_setup(&self) -> bool {
        if self.role != Role::Student {
            return false;
        }

        match self.department.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(department) => department == UNDECLARED_DEPARTMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(department: Option<&str>) -> Principal {
        Principal::new(Uuid::new_v4(), "Ada Student", Role::Student)
            .with_permissions(Permission::ViewOwnGrades)
            .with_department(department)
    }

    #[test]
    fn test_student_without_department_needs_setup() {
        assert!(student(None).needs_profile_setup());
        assert!(student(Some("")).needs_profile_setup());
        assert!(student(Some("   ")).needs_profile_setup());
        assert!(student(Some("Undeclared")).needs_profile_setup());
    }

    #[test]
    fn test_student_with_department_is_complete() {
        assert!(!student(Some("Physics")).needs_profile_setup());
        // The sentinel is matched exactly, not case-folded.
        assert!(!student(Some("undeclared studies")).needs_profile_setup());
    }

    #[test]
    fn test_other_roles_never_need_setup() {
        for role in [Role::Parent, Role::Teacher, Role::Admin] {
            let principal = Principal::new(Uuid::new_v4(), "Someone", role);
            assert!(!principal.needs_profile_setup());
        }
    }

    #[test]
    fn test_permission_helpers() {
        let teacher = Principal::new(Uuid::new_v4(), "T", Role::Teacher).with_permissions([
            Permission::EnterGrades,
            Permission::ManageAttendance,
        ]);

        assert!(teacher.has_permission(Permission::EnterGrades));
        assert!(!teacher.has_permission(Permission::ManageUsers));
        assert!(teacher.has_any_permission(PermissionSet::from([
            Permission::ManageUsers,
            Permission::ManageAttendance
        ])));
        assert!(!teacher.has_any_permission(PermissionSet::EMPTY));
    }

    #[test]
    fn test_principal_serializes_permissions_as_tokens() {
        let principal = student(Some("History")).with_email("ada@uni.test");
        let json = serde_json::to_value(&principal).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["permissions"], serde_json::json!(["view_own_grades"]));
        assert_eq!(json["department"], "History");
    }
}
