mod core;
mod error;

pub use self::core::*;
pub use error::RelayError;
