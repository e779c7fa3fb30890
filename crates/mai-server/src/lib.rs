pub mod config;
pub mod error;
pub mod pipeline;
pub mod protocol;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::PipelineError;
pub use pipeline::{validate_region, MaiPipeline};
pub use server::{create_router, serve, AppState};
