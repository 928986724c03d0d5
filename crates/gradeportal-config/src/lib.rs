//! # Grade Portal Config
//!
//! Configuration types for the grade portal gateway.
//!
//! Every structure here is loaded from environment variables (a `.env` file
//! is read by the binaries through `dotenvy` before these are built):
//!
//! - [`jwt`]: access-token verification settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
