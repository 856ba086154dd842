pub mod convert;
pub mod maybe;
pub mod path;

pub use crate::core::convert::AsMaybe;
pub use crate::core::maybe::Maybe;
pub use crate::core::path::Path;
pub use crate::utils::error::Result;
