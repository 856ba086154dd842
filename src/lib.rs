pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{AbsencePolicy, MaybeConfig};
pub use crate::core::{AsMaybe, Maybe, Path};
pub use domain::model::Namespace;
pub use domain::ports::{Access, Object};
pub use domain::sentinel::{Empty, EMPTY};
pub use domain::value::{Func, Held, Key, Value};
pub use utils::error::{AbsenceKind, MaybeError, Result};
