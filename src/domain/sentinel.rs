use std::fmt;
use std::hash::{Hash, Hasher};

/// Marker for "no value here".
///
/// Only one instance exists, [`EMPTY`]. It is not a [`Value`](crate::Value), so it can never
/// collide with `Value::None` or any other payload. Comparison is by identity.
pub struct Empty {
    _private: (),
}

pub static EMPTY: Empty = Empty { _private: () };

impl Empty {
    pub fn is(&self, other: &Empty) -> bool {
        std::ptr::eq(self, other)
    }
}

impl PartialEq for Empty {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Empty {}

impl Hash for Empty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "MAYBE CHAIN EMPTY".hash(state);
    }
}

impl fmt::Debug for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EMPTY")
    }
}

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EMPTY")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let a: &'static Empty = &EMPTY;
        let b: &'static Empty = &EMPTY;
        assert!(a.is(b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_repr() {
        assert_eq!(format!("{:?}", EMPTY), "EMPTY");
        assert_eq!(EMPTY.to_string(), "EMPTY");
    }
}
