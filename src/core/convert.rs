use crate::core::maybe::Maybe;
use crate::domain::value::{Held, Value};
use crate::utils::error::{MaybeError, Result};

/// Type-changing conversions that keep the result inside a [`Maybe`].
///
/// A payload of the wrong type becomes absence. A payload of the right type with a bad
/// literal (`"foo"` as an int) is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsMaybe {
    Str,
    Bytes,
    Int,
    Float,
    Bool,
    Hash,
}

impl AsMaybe {
    fn operation(&self) -> &'static str {
        match self {
            AsMaybe::Str => "conversion to str",
            AsMaybe::Bytes => "conversion to bytes",
            AsMaybe::Int => "conversion to int",
            AsMaybe::Float => "conversion to float",
            AsMaybe::Bool => "conversion to bool",
            AsMaybe::Hash => "hashing",
        }
    }

    pub fn apply(&self, value: &Value) -> Result<Value> {
        match self {
            AsMaybe::Str => Ok(Value::Str(value.to_string())),
            AsMaybe::Bytes => to_bytes(value),
            AsMaybe::Int => to_int(value),
            AsMaybe::Float => to_float(value),
            AsMaybe::Bool => Ok(Value::Bool(value.is_truthy())),
            AsMaybe::Hash => value.hash_code().map(Value::Int),
        }
    }
}

impl Maybe {
    pub fn as_maybe(&self, conversion: AsMaybe) -> Result<Maybe> {
        self.forward(conversion.operation(), |payload| {
            conversion.apply(payload).map(Held::Value)
        })
    }
}

fn invalid_literal(target: &'static str, value: &Value) -> MaybeError {
    MaybeError::InvalidLiteral {
        target,
        literal: format!("{:?}", value),
    }
}

fn to_int(value: &Value) -> Result<Value> {
    match value {
        Value::Int(i) => Ok(Value::Int(*i)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Float(x) if x.is_finite() && x.abs() < 9.2e18 => Ok(Value::Int(x.trunc() as i64)),
        Value::Float(_) => Err(invalid_literal("int", value)),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid_literal("int", value)),
        _ => Err(MaybeError::type_mismatch(value.type_name(), "conversion to int")),
    }
}

fn to_float(value: &Value) -> Result<Value> {
    match value {
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        Value::Float(x) => Ok(Value::Float(*x)),
        Value::Bool(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| invalid_literal("float", value)),
        _ => Err(MaybeError::type_mismatch(value.type_name(), "conversion to float")),
    }
}

fn to_bytes(value: &Value) -> Result<Value> {
    match value {
        Value::Bytes(b) => Ok(Value::Bytes(b.clone())),
        // 整數 n 代表 n 個零位元組
        Value::Int(n) => {
            let len = usize::try_from(*n).map_err(|_| invalid_literal("bytes", value))?;
            let mut buf = Vec::new();
            buf.try_reserve_exact(len)
                .map_err(|_| MaybeError::AllocationFailed { requested: len })?;
            buf.resize(len, 0u8);
            Ok(Value::Bytes(buf))
        }
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Int(i) => u8::try_from(*i).map_err(|_| invalid_literal("bytes", item)),
                other => Err(MaybeError::type_mismatch(other.type_name(), "conversion to bytes")),
            })
            .collect::<Result<Vec<u8>>>()
            .map(Value::Bytes),
        _ => Err(MaybeError::type_mismatch(value.type_name(), "conversion to bytes")),
    }
}
