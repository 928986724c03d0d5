//! # Grade Portal Gateway
//!
//! An HTTP gateway in front of the university grade portal's view layer. It
//! decides, for every guarded page, whether the caller may see it, where
//! they land after sign-in, and which menu links they are shown.
//!
//! ## Overview
//!
//! - **Access decisions**: `render`, `redirect` to the entry page, or
//!   `redirect` to profile setup for students without a department
//! - **Dashboard home**: one landing page per principal, by permission
//!   precedence (`manage_users` > `enter_grades` > `view_child_grades` > student)
//! - **Menu**: ordered links in Main, Administrative, System and Personal
//!   sections, drawn from the same table that guards the pages
//!
//! The decisions themselves live in `gradeportal-access`; this crate wires
//! them to axum.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token extractors
//! ├── modules/          # Feature modules
//! │   ├── navigation/  # /api/navigation, /api/access, /api/routes
//! │   ├── pages/       # /app/{*path} page guard
//! │   └── system/      # /health, /metrics
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module has:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: Response DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Callers present an access token issued by the portal's identity service
//! (`Authorization: Bearer <token>`). Its claims carry the principal's role,
//! permission tokens and department; nothing is looked up per request.
//! Unknown permission tokens are ignored.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! ALLOWED_ORIGINS=http://localhost:5173
//! PORT=3000
//! ```
//!
//! Swagger UI is served at `http://localhost:3000/swagger-ui`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use gradeportal_access;
pub use gradeportal_auth;
pub use gradeportal_config;
pub use gradeportal_core;
