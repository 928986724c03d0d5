//! JWT claim structure for access tokens.

use gradeportal_access::Principal;
use gradeportal_core::{AppError, PermissionSet, Role};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for access tokens.
///
/// Everything needed to build a [`Principal`] travels in the token, so no
/// lookup is needed per request.
///
/// # Fields
///
/// - `sub`: Principal ID (subject)
/// - `email`: Principal's email address
/// - `name`: Display name
/// - `role`: One of `student`, `parent`, `teacher`, `admin`
/// - `permissions`: Capability tokens granted to the principal
/// - `department`: Declared department, if any
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Principal ID (subject claim)
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Permission tokens, as issued
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Builds the principal described by verified claims.
///
/// Unknown permission tokens are logged and dropped, never granted. A
/// malformed subject or an unknown role rejects the token.
pub fn principal_from_claims(claims: &Claims) -> Result<Principal, AppError> {
    let id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized("Invalid principal ID in token"))?;

    let role: Role = claims
        .role
        .parse()
        .map_err(|e| AppError::unauthorized(format!("Invalid token: {}", e)))?;

    let (permissions, unknown) = PermissionSet::from_tokens_lossy(&claims.permissions);
    if !unknown.is_empty() {
        warn!(
            principal_id = %id,
            unknown = ?unknown,
            "Ignoring unknown permission tokens"
        );
    }

    Ok(Principal {
        id,
        display_name: claims.name.clone(),
        email: claims.email.clone(),
        role,
        permissions,
        department: claims.department.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeportal_core::Permission;

    fn claims(role: &str, permissions: &[&str]) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@uni.test".to_string(),
            name: "Test Principal".to_string(),
            role: role.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            department: Some("Physics".to_string()),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_claims_deserialize_with_defaults() {
        let json = r#"{"sub":"8a2c3f0e-6e8b-4a44-9a53-0d7c1f3f9b11","email":"p@uni.test","name":"P","role":"parent","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.permissions.is_empty());
        assert_eq!(claims.department, None);
        assert_eq!(claims.role, "parent");
    }

    #[test]
    fn test_principal_from_claims() {
        let claims = claims("teacher", &["enter_grades", "manage_attendance"]);
        let principal = principal_from_claims(&claims).unwrap();

        assert_eq!(principal.id.to_string(), claims.sub);
        assert_eq!(principal.role, Role::Teacher);
        assert_eq!(
            principal.permissions,
            PermissionSet::from([Permission::EnterGrades, Permission::ManageAttendance])
        );
        assert_eq!(principal.department.as_deref(), Some("Physics"));
        assert_eq!(principal.display_name, "Test Principal");
    }

    #[test]
    fn test_unknown_permissions_are_dropped() {
        let claims = claims("admin", &["manage_users", "users:delete", "root"]);
        let principal = principal_from_claims(&claims).unwrap();
        assert_eq!(principal.permissions, PermissionSet::from(Permission::ManageUsers));
    }

    #[test]
    fn test_invalid_role_is_rejected() {
        let err = principal_from_claims(&claims("system_admin", &["manage_users"])).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_invalid_subject_is_rejected() {
        let mut claims = claims("student", &["view_own_grades"]);
        claims.sub = "not-a-uuid".to_string();
        assert!(principal_from_claims(&claims).is_err());
    }
}
