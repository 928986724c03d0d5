pub mod controller;
pub mod router;

pub use controller::HealthResponse;
pub use router::init_system_router;
