use crate::config::policy::AbsencePolicy;
use crate::domain::ports::Access;
use crate::domain::sentinel::{Empty, EMPTY};
use crate::domain::value::{Held, Key, Value};
use crate::utils::error::{MaybeError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A value that may be absent, with attribute, item and call access forwarded to it.
///
/// Every access returns another `Maybe`, so lookups chain without presence checks:
///
/// ```
/// use maybe_chain::{Maybe, Namespace, Value};
///
/// let obj = Namespace::new("Foo").with_attr("a", Namespace::new("Bar"));
/// let name = Maybe::new(obj).attr("a")?.attr("b")?.otherwise("Unknown");
/// assert_eq!(name, Value::from("Unknown"));
/// # Ok::<(), maybe_chain::MaybeError>(())
/// ```
///
/// Once absent, a chain stays absent. Failures that are not about missing data (errors raised
/// by a payload's own logic, for instance) come back as `Err` rather than absence.
#[derive(Clone)]
pub struct Maybe {
    held: Held,
    policy: Arc<AbsencePolicy>,
}

impl Maybe {
    /// Wraps a payload. `Value::None` is kept as a present payload.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::wrap(value.into())
    }

    /// Wraps a payload, the sentinel, or another `Maybe` (which is flattened).
    pub fn wrap(held: impl Into<Held>) -> Self {
        Self {
            held: held.into(),
            policy: AbsencePolicy::shared_default(),
        }
    }

    pub fn empty() -> Self {
        Self::wrap(&EMPTY)
    }

    pub fn with_policy(mut self, policy: impl Into<Arc<AbsencePolicy>>) -> Self {
        self.policy = policy.into();
        self
    }

    pub fn policy(&self) -> &AbsencePolicy {
        &self.policy
    }

    pub fn attr(&self, name: &str) -> Result<Maybe> {
        self.forward("attr", |payload| payload.get_attr(name))
    }

    /// Item lookup. A missing `Key::Name` item falls back to the attribute of that name
    /// unless the policy turns that off.
    pub fn item(&self, key: impl Into<Key>) -> Result<Maybe> {
        let key = key.into();
        let policy = Arc::clone(&self.policy);
        self.forward("item", |payload| {
            let sequence = matches!(payload, Value::List(_) | Value::Str(_) | Value::Bytes(_));
            if let (true, Key::Index(index)) = (sequence, &key) {
                if *index < 0 && !policy.negative_indices {
                    return Err(MaybeError::IndexOutOfRange {
                        index: *index,
                        len: payload.len().unwrap_or(0),
                    });
                }
            }

            match (payload.get_item(&key), &key) {
                (Err(err), Key::Name(name))
                    if policy.name_falls_back_to_attribute && policy.recognizes(&err) =>
                {
                    tracing::trace!(%name, "item lookup failed, trying attribute");
                    payload.get_attr(name).or_else(|attr_err| {
                        if attr_err.is_absence() {
                            Err(err)
                        } else {
                            Err(attr_err)
                        }
                    })
                }
                (result, _) => result,
            }
        })
    }

    pub fn call(&self, args: &[Value]) -> Result<Maybe> {
        self.forward("call", |payload| payload.call(args))
    }

    pub fn is_present(&self) -> bool {
        !self.held.is_empty()
    }

    pub fn is_absent(&self) -> bool {
        self.held.is_empty()
    }

    /// 缺值為假；有值時依內容判斷真假
    pub fn is_truthy(&self) -> bool {
        self.held.as_value().is_some_and(Value::is_truthy)
    }

    /// 取出值；缺值時回傳 `fallback`
    pub fn otherwise(self, fallback: impl Into<Value>) -> Value {
        match self.held {
            Held::Value(value) => value,
            Held::Empty(_) => fallback.into(),
        }
    }

    pub fn otherwise_else<F>(self, fallback: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        match self.held {
            Held::Value(value) => value,
            Held::Empty(_) => fallback(),
        }
    }

    /// The raw held value: the payload, or [`EMPTY`] when absent.
    pub fn just(&self) -> &Held {
        &self.held
    }

    pub fn into_held(self) -> Held {
        self.held
    }

    pub fn into_option(self) -> Option<Value> {
        self.held.into_value()
    }

    /// Runs `access` against the payload and classifies the outcome under the policy.
    pub(crate) fn forward<F>(&self, operation: &'static str, access: F) -> Result<Maybe>
    where
        F: FnOnce(&Value) -> Result<Held>,
    {
        let Held::Value(payload) = &self.held else {
            tracing::trace!(operation, "short-circuit on absent value");
            return Ok(self.absent());
        };

        match access(payload) {
            Ok(held) => Ok(self.rewrap(held)),
            Err(err) if self.policy.recognizes(&err) => {
                tracing::debug!(
                    operation,
                    payload_type = payload.type_name(),
                    error = %err,
                    "access converted to absence"
                );
                Ok(self.absent())
            }
            Err(err) => {
                tracing::debug!(operation, error = %err, "access failed, propagating");
                Err(err)
            }
        }
    }

    fn rewrap(&self, held: Held) -> Maybe {
        Maybe {
            held,
            policy: Arc::clone(&self.policy),
        }
    }

    fn absent(&self) -> Maybe {
        self.rewrap(Held::empty())
    }
}

impl From<Maybe> for Held {
    fn from(maybe: Maybe) -> Self {
        maybe.held
    }
}

impl From<Value> for Maybe {
    fn from(value: Value) -> Self {
        Maybe::new(value)
    }
}

impl From<&'static Empty> for Maybe {
    fn from(empty: &'static Empty) -> Self {
        Maybe::wrap(empty)
    }
}

impl PartialEq for Maybe {
    fn eq(&self, other: &Self) -> bool {
        self.held == other.held
    }
}

impl PartialEq<Value> for Maybe {
    fn eq(&self, other: &Value) -> bool {
        self.held == *other
    }
}

impl PartialEq<Maybe> for Value {
    fn eq(&self, other: &Maybe) -> bool {
        other.held == *self
    }
}

impl PartialEq<Empty> for Maybe {
    fn eq(&self, other: &Empty) -> bool {
        self.held == *other
    }
}

macro_rules! impl_maybe_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Maybe {
                fn eq(&self, other: &$ty) -> bool {
                    self.held.as_value().is_some_and(|value| value == other)
                }
            }
        )*
    };
}

impl_maybe_eq!(i64, i32, f64, bool, &str);

impl PartialOrd for Maybe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.held.as_value()?.partial_cmp(other.held.as_value()?)
    }
}

impl PartialOrd<Value> for Maybe {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        self.held.as_value()?.partial_cmp(other)
    }
}

impl PartialOrd<Maybe> for Value {
    fn partial_cmp(&self, other: &Maybe) -> Option<Ordering> {
        self.partial_cmp(other.held.as_value()?)
    }
}

impl fmt::Debug for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Maybe({:?})", self.held)
    }
}

impl fmt::Display for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.held, f)
    }
}
