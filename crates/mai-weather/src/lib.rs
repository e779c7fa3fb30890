pub mod config;
pub mod error;
pub mod factory;
pub mod providers;
pub mod traits;

pub use config::*;
pub use error::ProviderError;
pub use factory::*;
pub use traits::*;
