use crate::domain::ports::{Access, Object};
use crate::domain::sentinel::{Empty, EMPTY};
use crate::utils::error::{MaybeError, Result};
use serde::ser::{Error as _, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A dynamically shaped payload.
///
/// `Value::None` is the payload's own "no value" marker. It is ordinary data: a chain that
/// reaches it stays present. Absence is only ever represented by [`EMPTY`].
#[derive(Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Dict(BTreeMap<String, Value>),
    Func(Func),
    Object(Arc<dyn Object>),
}

/// Item selector for [`Access::get_item`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

type FuncBody = dyn Fn(&[Value]) -> Result<Held> + Send + Sync;

/// A named callable payload.
#[derive(Clone)]
pub struct Func {
    name: Arc<str>,
    body: Arc<FuncBody>,
}

/// What a wrapper holds: a payload or the absence sentinel.
#[derive(Clone)]
pub enum Held {
    Value(Value),
    Empty(&'static Empty),
}

impl Func {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Held> + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Held> {
        (self.body)(args)
    }

    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<func {}>", self.name)
    }
}

impl Held {
    pub fn empty() -> Self {
        Held::Empty(&EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Held::Empty(e) if e.is(&EMPTY))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Held::Value(v) => Some(v),
            Held::Empty(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Held::Value(v) => Some(v),
            Held::Empty(_) => None,
        }
    }
}

impl From<Value> for Held {
    fn from(value: Value) -> Self {
        Held::Value(value)
    }
}

impl From<&'static Empty> for Held {
    fn from(empty: &'static Empty) -> Self {
        Held::Empty(empty)
    }
}

impl PartialEq for Held {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Held::Value(a), Held::Value(b)) => a == b,
            (Held::Empty(a), Held::Empty(b)) => a.is(b),
            _ => false,
        }
    }
}

impl PartialEq<Value> for Held {
    fn eq(&self, other: &Value) -> bool {
        self.as_value() == Some(other)
    }
}

impl PartialEq<Empty> for Held {
    fn eq(&self, other: &Empty) -> bool {
        matches!(self, Held::Empty(e) if e.is(other))
    }
}

impl fmt::Debug for Held {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Held::Value(v) => fmt::Debug::fmt(v, f),
            Held::Empty(e) => fmt::Debug::fmt(e, f),
        }
    }
}

impl fmt::Display for Held {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Held::Value(v) => fmt::Display::fmt(v, f),
            Held::Empty(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Key::Name(name.into())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => write!(f, "{:?}", name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index.into())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// 2^63，i64 可表示範圍的上界（不含）
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// 僅當浮點數恰好等於某個 i64 時回傳該整數
fn exact_i64(x: f64) -> Option<i64> {
    (x.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&x)).then(|| x as i64)
}

fn cmp_int_float(i: i64, x: f64) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if let Some(j) = exact_i64(x) {
        return Some(i.cmp(&j));
    }
    if x >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if x < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    // x 非整數：i <= floor(x) 即小於 x
    if i <= x.floor() as i64 {
        Some(Ordering::Less)
    } else {
        Some(Ordering::Greater)
    }
}

/// 將可能為負數的索引轉換為實際位置
pub(crate) fn resolve_index(index: i64, len: usize) -> Result<usize> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 { len_i + index } else { index };
    if resolved < 0 || resolved >= len_i {
        return Err(MaybeError::IndexOutOfRange { index, len });
    }
    Ok(resolved as usize)
}

impl Value {
    pub fn object<O: Object + 'static>(object: O) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn func<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Held> + Send + Sync + 'static,
    {
        Value::Func(Func::new(name, body))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(content)?;
        Ok(json.into())
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Func(_) => "func",
            Value::Object(obj) => obj.type_name(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Bytes(b) => Some(b.len()),
            Value::List(items) => Some(items.len()),
            Value::Dict(map) => Some(map.len()),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bytes(b) => !b.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Dict(map) => !map.is_empty(),
            Value::Func(_) | Value::Object(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// 計算雜湊值；list 與 dict 不可雜湊
    pub fn hash_code(&self) -> Result<i64> {
        let mut hasher = DefaultHasher::new();
        self.hash_into(&mut hasher)?;
        Ok(hasher.finish() as i64)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) -> Result<()> {
        match self {
            Value::None => 0u8.hash(state),
            Value::Bool(b) => i64::from(*b).hash(state),
            Value::Int(i) => i.hash(state),
            // 與 Int 相等的 Float 必須得到相同雜湊
            Value::Float(x) => match exact_i64(*x) {
                Some(i) => i.hash(state),
                None => x.to_bits().hash(state),
            },
            Value::Str(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Func(func) => (Arc::as_ptr(&func.body) as *const () as usize).hash(state),
            Value::Object(obj) => (Arc::as_ptr(obj) as *const () as usize).hash(state),
            Value::List(_) | Value::Dict(_) => {
                return Err(MaybeError::type_mismatch(self.type_name(), "hashing"));
            }
        }
        Ok(())
    }

    fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.write_repr(f)?;
                }
                f.write_str("]")
            }
            Value::Dict(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: ", key)?;
                    item.write_repr(f)?;
                }
                f.write_str("}")
            }
            Value::Func(func) => write!(f, "{:?}", func),
            Value::Object(obj) => write!(f, "{:?}", obj),
        }
    }
}

impl Access for Value {
    fn type_name(&self) -> &str {
        Value::type_name(self)
    }

    fn get_attr(&self, name: &str) -> Result<Held> {
        match self {
            Value::Object(obj) => obj.get_attr(name),
            _ => Err(MaybeError::missing_attribute(name)),
        }
    }

    fn get_item(&self, key: &Key) -> Result<Held> {
        match (self, key) {
            (Value::List(items), Key::Index(index)) => {
                let at = resolve_index(*index, items.len())?;
                Ok(items[at].clone().into())
            }
            (Value::Str(s), Key::Index(index)) => {
                let chars: Vec<char> = s.chars().collect();
                let at = resolve_index(*index, chars.len())?;
                Ok(Value::Str(chars[at].to_string()).into())
            }
            (Value::Bytes(bytes), Key::Index(index)) => {
                let at = resolve_index(*index, bytes.len())?;
                Ok(Value::Int(i64::from(bytes[at])).into())
            }
            (Value::List(_) | Value::Str(_) | Value::Bytes(_), Key::Name(_)) => {
                Err(MaybeError::type_mismatch(self.type_name(), "indexing by name"))
            }
            (Value::Dict(map), Key::Name(name)) => map
                .get(name)
                .cloned()
                .map(Held::Value)
                .ok_or_else(|| MaybeError::missing_key(key)),
            (Value::Dict(_), Key::Index(_)) => Err(MaybeError::missing_key(key)),
            (Value::Object(obj), _) => obj.get_item(key),
            _ => Err(MaybeError::type_mismatch(self.type_name(), "item access")),
        }
    }

    fn call(&self, args: &[Value]) -> Result<Held> {
        match self {
            Value::Func(func) => func.invoke(args),
            Value::Object(obj) => obj.call(args),
            _ => Err(MaybeError::not_callable(self.type_name())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                exact_i64(*b) == Some(*a)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::Str(a), Value::Str(b)) => a.partial_cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.partial_cmp(b),
            (Value::List(a), Value::List(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

macro_rules! impl_value_eq {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    *self == Value::$variant((*other).into())
                }
            }
        )*
    };
}

impl_value_eq!(i64 => Int, i32 => Int, f64 => Float, bool => Bool, &str => Str);

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_repr(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            _ => self.write_repr(f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::List(items) => serializer.collect_seq(items),
            Value::Dict(map) => serializer.collect_map(map),
            Value::Func(_) | Value::Object(_) => Err(S::Error::custom(format!(
                "cannot serialize a '{}' value",
                self.type_name()
            ))),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Self {
        Value::Func(func)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::None, Into::into)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Dict(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_items_with_negative_index() {
        let list = Value::from(vec![1, 2, 3]);
        assert_eq!(list.get_item(&Key::Index(1)).unwrap(), Value::Int(2));
        assert_eq!(list.get_item(&Key::Index(-1)).unwrap(), Value::Int(3));

        let err = list.get_item(&Key::Index(3)).unwrap_err();
        assert!(matches!(err, MaybeError::IndexOutOfRange { index: 3, len: 3 }));
        assert!(list.get_item(&Key::Index(-4)).is_err());
    }

    #[test]
    fn test_dict_items() {
        let dict = Value::from(json!({"a": 1, "b": null}));
        assert_eq!(dict.get_item(&Key::from("a")).unwrap(), Value::Int(1));
        assert_eq!(dict.get_item(&Key::from("b")).unwrap(), Value::None);

        let err = dict.get_item(&Key::from("c")).unwrap_err();
        assert!(matches!(err, MaybeError::MissingKey { .. }));
        assert!(matches!(
            dict.get_item(&Key::Index(0)).unwrap_err(),
            MaybeError::MissingKey { .. }
        ));
    }

    #[test]
    fn test_str_and_bytes_items() {
        let s = Value::from("héllo");
        assert_eq!(s.get_item(&Key::Index(1)).unwrap(), Value::from("é"));
        let b = Value::bytes(vec![7u8, 8]);
        assert_eq!(b.get_item(&Key::Index(-1)).unwrap(), Value::Int(8));
        assert!(matches!(
            s.get_item(&Key::from("x")).unwrap_err(),
            MaybeError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_scalars_are_not_subscriptable_or_callable() {
        for value in [Value::None, Value::Int(1), Value::Bool(false), Value::Float(0.5)] {
            assert_eq!(
                value.get_item(&Key::Index(0)).unwrap_err().absence_kind(),
                Some(crate::AbsenceKind::TypeMismatch)
            );
            assert_eq!(
                value.call(&[]).unwrap_err().absence_kind(),
                Some(crate::AbsenceKind::NotCallable)
            );
            assert_eq!(
                value.get_attr("real").unwrap_err().absence_kind(),
                Some(crate::AbsenceKind::MissingAttribute)
            );
        }
    }

    #[test]
    fn test_func_call() {
        let add = Value::func("add", |args| {
            let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
            Ok(Value::Int(sum).into())
        });
        assert_eq!(
            add.call(&[Value::Int(2), Value::Int(3)]).unwrap(),
            Value::Int(5)
        );
        assert_eq!(format!("{:?}", add), "<func add>");
    }

    #[test]
    fn test_numeric_equality_and_ordering() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert!(Value::Int(2) < Value::Float(2.5));
        assert!(Value::from("a") < Value::from("b"));
        assert_eq!(Value::None.partial_cmp(&Value::Int(0)), None);
        assert_ne!(Value::None, Value::Int(0));
        assert_ne!(Value::None, Value::from(""));
        assert_ne!(Value::None, Value::Bool(false));
    }

    #[test]
    fn test_int_float_equality_is_exact() {
        let big = 1i64 << 53;
        assert_ne!(Value::Int(big + 1), Value::Float(big as f64));
        assert_eq!(Value::Int(big), Value::Float(big as f64));
        assert!(Value::Int(big + 1) > Value::Float(big as f64));
        assert!(Value::Float(big as f64) < Value::Int(big + 1));
        assert!(Value::Int(i64::MAX) < Value::Float(I64_BOUND));
        assert!(Value::Int(-3) < Value::Float(-2.5));
        assert_eq!(Value::Int(1).partial_cmp(&Value::Float(f64::NAN)), None);
        assert_eq!(
            Value::Int(i64::MIN).hash_code().unwrap(),
            Value::Float(-I64_BOUND).hash_code().unwrap()
        );
        assert_eq!(Value::Int(i64::MIN), Value::Float(-I64_BOUND));
    }

    #[test]
    fn test_equal_values_order_as_equal() {
        let func = Value::func("f", |_| Ok(Held::empty()));
        let obj = Value::object(crate::Namespace::new("Foo"));
        let equal_pairs = [
            (Value::None, Value::None),
            (Value::from(json!({"a": 1})), Value::from(json!({"a": 1}))),
            (func.clone(), func),
            (obj.clone(), obj),
        ];
        for (a, b) in equal_pairs {
            assert_eq!(a, b);
            assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
            assert!(a <= b && a >= b);
        }
        assert_eq!(Value::from(json!({"a": 1})).partial_cmp(&Value::from(json!({"a": 2}))), None);
    }

    #[test]
    fn test_repr_and_display() {
        let v = Value::from(json!({"k": [1, "x", null, 1.5]}));
        assert_eq!(format!("{:?}", v), r#"{"k": [1, "x", None, 1.5]}"#);
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(format!("{:?}", Value::from("plain")), "\"plain\"");
        assert_eq!(format!("{:?}", Value::bytes(b"a\0".to_vec())), "b\"a\\x00\"");
    }

    #[test]
    fn test_json_round_trip() {
        let v = Value::from_json_str(r#"{"a": [true, null, 2.5]}"#).unwrap();
        assert_eq!(v.to_json().unwrap(), json!({"a": [true, null, 2.5]}));
        assert!(Value::func("f", |_| Ok(Held::empty())).to_json().is_err());
    }

    #[test]
    fn test_hash_code() {
        assert_eq!(
            Value::Int(1).hash_code().unwrap(),
            Value::Float(1.0).hash_code().unwrap()
        );
        assert!(Value::from(vec![1]).hash_code().is_err());
        assert!(Value::from(json!({})).hash_code().is_err());
    }

    #[test]
    fn test_option_maps_to_native_none() {
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(4)), Value::Int(4));
    }

    #[test]
    fn test_held_identity() {
        assert!(Held::empty().is_empty());
        assert!(!Held::from(Value::None).is_empty());
        assert_eq!(Held::empty(), EMPTY);
        assert_ne!(Held::from(Value::None), Held::empty());
    }
}
