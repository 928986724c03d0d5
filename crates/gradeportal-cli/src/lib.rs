//! # Grade portal CLI
//!
//! Offline inspection of the route table: what a given principal would see
//! and where a given path would send them. Nothing here talks to the
//! gateway; every answer comes straight from `gradeportal-access`.
//!
//! ## Usage
//!
//! ```ignore
//! use gradeportal_cli::report;
//!
//! let principal = report::principal(Role::Student, "view_own_grades".parse()?, None);
//! println!("{}", report::resolve(&principal, "/student/grades")?);
//! ```

pub mod report;
