//! Order data types.

pub mod order;
pub mod size;
pub mod status;

pub use order::*;
pub use size::*;
pub use status::*;
