pub mod config;
pub mod error;
pub mod factory;
pub mod geocode;
pub mod narrative;
pub mod providers;
pub mod region;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::ProviderError;
pub use factory::*;
pub use geocode::LlmCoordinateResolver;
pub use narrative::LlmNarrativeGenerator;
pub use region::LlmRegionResolver;
pub use traits::*;
pub use types::*;
