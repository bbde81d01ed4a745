pub mod config;
pub mod error;
pub mod flashcard;
pub mod metrics;
pub mod middleware;
pub mod page;
pub mod router;
pub mod state;
pub mod tracing;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
