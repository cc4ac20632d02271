pub mod error;
pub mod marker;

mod base;

pub use base::*;
pub use error::NodeNotFoundError;
