use crate::domain::ports::Access;
use crate::domain::value::{Held, Key, Value};
use crate::utils::error::{MaybeError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// 具名屬性與項目的簡單容器
///
/// Attributes and items are kept apart, so `ns.foo` and `ns["foo"]` can resolve to
/// different values.
#[derive(Clone, Default)]
pub struct Namespace {
    type_name: String,
    attrs: BTreeMap<String, Value>,
    items: Option<BTreeMap<String, Value>>,
}

impl Namespace {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attrs: BTreeMap::new(),
            items: None,
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// 加入項目；呼叫後此物件即支援 `[...]` 存取
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.items
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn into_value(self) -> Value {
        Value::object(self)
    }
}

impl Access for Namespace {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn get_attr(&self, name: &str) -> Result<Held> {
        self.attrs
            .get(name)
            .cloned()
            .map(Held::Value)
            .ok_or_else(|| MaybeError::missing_attribute(name))
    }

    fn get_item(&self, key: &Key) -> Result<Held> {
        let Some(items) = &self.items else {
            return Err(MaybeError::type_mismatch(&self.type_name, "item access"));
        };
        match key {
            Key::Name(name) => items
                .get(name)
                .cloned()
                .map(Held::Value)
                .ok_or_else(|| MaybeError::missing_key(key)),
            Key::Index(_) => Err(MaybeError::missing_key(key)),
        }
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, (name, value)) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        f.write_str(")")
    }
}

impl From<Namespace> for Value {
    fn from(ns: Namespace) -> Self {
        ns.into_value()
    }
}
