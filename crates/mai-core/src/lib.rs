pub mod assessment;
pub mod factors;
pub mod index;
pub mod types;

pub use assessment::*;
pub use factors::*;
pub use index::*;
pub use types::*;
