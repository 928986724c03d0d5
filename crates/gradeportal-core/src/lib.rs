//! # Grade Portal Core
//!
//! Core types, errors, and the permission vocabulary shared by every crate in
//! the grade portal gateway.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: The closed set of capability tokens and a compact set type
//! - [`roles`]: The closed set of principal roles
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_core::{AppError, Permission, PermissionSet};
//!
//! let granted: PermissionSet = "view_own_grades,receive_notifications".parse()?;
//! if !granted.contains(Permission::ManageUsers) {
//!     return Err(AppError::forbidden("manage_users required"));
//! }
//! ```

pub mod errors;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{Permission, PermissionParseError, PermissionSet};
pub use roles::{Role, RoleParseError};
