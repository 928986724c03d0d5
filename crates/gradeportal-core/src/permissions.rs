//! Permission vocabulary for the grade portal.
//!
//! Permissions are capability tokens carried by an authenticated principal.
//! The set is closed: every token the portal understands is a [`Permission`]
//! variant, and a principal's grants are held in a [`PermissionSet`], a
//! `Copy` bit-set that makes membership and intersection tests trivial.
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_core::permissions::{Permission, PermissionSet};
//!
//! let granted = PermissionSet::from([Permission::EnterGrades, Permission::ManageAttendance]);
//! let required = PermissionSet::from([Permission::EnterGrades, Permission::ManageGrades]);
//!
//! // Route requirements use any-of semantics
//! assert!(granted.intersects(required));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use utoipa::ToSchema;

/// A capability token granted to a principal.
///
/// The wire form (`as_str`) is the snake_case token issued by the
/// authentication provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Permission {
    /// A student viewing their own grades
    ViewOwnGrades,
    /// A parent viewing a linked child's grades
    ViewChildGrades,
    /// A teacher entering grades for their classes
    EnterGrades,
    /// Administrative grade management
    ManageGrades,
    /// Attendance registers
    ManageAttendance,
    /// User accounts
    ManageUsers,
    /// Fee schedules and payments
    ManageFees,
    /// System configuration
    ManageSystem,
    /// Reporting dashboards
    ViewAnalytics,
    /// Real-time notification feed
    ReceiveNotifications,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 10] = [
        Permission::ViewOwnGrades,
        Permission::ViewChildGrades,
        Permission::EnterGrades,
        Permission::ManageGrades,
        Permission::ManageAttendance,
        Permission::ManageUsers,
        Permission::ManageFees,
        Permission::ManageSystem,
        Permission::ViewAnalytics,
        Permission::ReceiveNotifications,
    ];

    /// The token string as it appears in access-token claims.
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::ViewOwnGrades => "view_own_grades",
            Permission::ViewChildGrades => "view_child_grades",
            Permission::EnterGrades => "enter_grades",
            Permission::ManageGrades => "manage_grades",
            Permission::ManageAttendance => "manage_attendance",
            Permission::ManageUsers => "manage_users",
            Permission::ManageFees => "manage_fees",
            Permission::ManageSystem => "manage_system",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ReceiveNotifications => "receive_notifications",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token string names no known permission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionParseError {
    #[error("unknown permission: {0}")]
    Unknown(String),
}

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| PermissionParseError::Unknown(token.to_string()))
    }
}

/// A set of permissions.
///
/// Iteration yields permissions in declaration order, so two sets with the
/// same members always render identically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PermissionSet(u16);

impl PermissionSet {
    /// The empty set.
    pub const EMPTY: PermissionSet = PermissionSet(0);

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Const-friendly constructor for static tables.
    pub const fn of(permissions: &[Permission]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < permissions.len() {
            bits |= permissions[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn contains(self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    /// True if the two sets share at least one permission.
    pub const fn intersects(self, other: PermissionSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: PermissionSet) -> PermissionSet {
        PermissionSet(self.0 | other.0)
    }

    pub const fn intersection(self, other: PermissionSet) -> PermissionSet {
        PermissionSet(self.0 & other.0)
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        let added = !self.contains(permission);
        self.0 |= permission.bit();
        added
    }

    pub fn remove(&mut self, permission: Permission) -> bool {
        let present = self.contains(permission);
        self.0 &= !permission.bit();
        present
    }

    pub fn iter(self) -> impl Iterator<Item = Permission> {
        Permission::ALL.into_iter().filter(move |p| self.contains(*p))
    }

    /// Wire strings of the members, in declaration order.
    pub fn to_strings(self) -> Vec<String> {
        self.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Builds a set from claim strings, splitting out tokens this portal
    /// doesn't know about.
    pub fn from_tokens_lossy<I, S>(tokens: I) -> (PermissionSet, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = PermissionSet::EMPTY;
        let mut unknown = Vec::new();
        for token in tokens {
            match token.as_ref().parse::<Permission>() {
                Ok(permission) => {
                    set.insert(permission);
                }
                Err(_) => unknown.push(token.as_ref().to_string()),
            }
        }
        (set, unknown)
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().map(Permission::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(permissions: [Permission; N]) -> Self {
        PermissionSet::of(&permissions)
    }
}

impl From<Permission> for PermissionSet {
    fn from(permission: Permission) -> Self {
        PermissionSet(permission.bit())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        let mut set = PermissionSet::EMPTY;
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<T: IntoIterator<Item = Permission>>(&mut self, iter: T) {
        for permission in iter {
            self.insert(permission);
        }
    }
}

/// Parses a comma-separated token list. Empty input yields the empty set.
impl FromStr for PermissionSet {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<Permission>)
            .collect()
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let permissions = Vec::<Permission>::deserialize(deserializer)?;
        Ok(permissions.into_iter().collect())
    }
}
