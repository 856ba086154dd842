use crate::domain::value::{Held, Key, Value};
use crate::utils::error::{MaybeError, Result};
use std::fmt;

/// Attribute, item and call access on a payload.
///
/// Implementations report "nothing there" through the absence-shaped [`MaybeError`]
/// variants (`MissingAttribute`, `MissingKey`, `IndexOutOfRange`, `TypeMismatch`,
/// `NotCallable`). Any other error is treated as a real failure and is never swallowed
/// by [`Maybe`](crate::Maybe).
pub trait Access {
    fn type_name(&self) -> &str;

    fn get_attr(&self, name: &str) -> Result<Held> {
        Err(MaybeError::missing_attribute(name))
    }

    fn get_item(&self, _key: &Key) -> Result<Held> {
        Err(MaybeError::type_mismatch(self.type_name(), "item access"))
    }

    fn call(&self, _args: &[Value]) -> Result<Held> {
        Err(MaybeError::not_callable(self.type_name()))
    }
}

/// A user-defined payload that can live inside [`Value::Object`].
pub trait Object: Access + fmt::Debug + Send + Sync {}

impl<T: Access + fmt::Debug + Send + Sync> Object for T {}
