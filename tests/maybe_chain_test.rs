use anyhow::Result;
use maybe_chain::{
    Access, AsMaybe, Held, Key, Maybe, MaybeError, Namespace, Value, EMPTY,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("ledger is locked")]
struct LedgerLocked;

/// 會自行拋出業務錯誤的物件
#[derive(Debug)]
struct Ledger {
    balance: i64,
}

impl Access for Ledger {
    fn type_name(&self) -> &str {
        "Ledger"
    }

    fn get_attr(&self, name: &str) -> maybe_chain::Result<Held> {
        match name {
            "balance" => Ok(Value::Int(self.balance).into()),
            "withdraw" => Ok(Value::func("withdraw", |_| Err(MaybeError::domain(LedgerLocked))).into()),
            _ => Err(MaybeError::missing_attribute(name)),
        }
    }
}

fn samples() -> Vec<Value> {
    vec![
        Value::None,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::from(vec![Value::None]),
        Value::bytes(Vec::new()),
        Namespace::new("Foo").into_value(),
    ]
}

#[test]
fn test_every_payload_survives_otherwise() {
    for value in samples() {
        let out = Maybe::new(value.clone()).otherwise("default");
        assert_eq!(out, value, "payload {:?} was replaced", value);
    }
}

#[test]
fn test_native_none_is_data() {
    assert_eq!(Maybe::new(Value::None).otherwise("X"), Value::None);
    assert!(Maybe::new(Value::None).is_present());
    assert!(Maybe::new(None::<i64>).is_present());
}

#[test]
fn test_missing_attribute_in_the_middle() -> Result<()> {
    let obj = Namespace::new("Obj")
        .with_attr("a", Namespace::new("Inner").with_attr("c", 1))
        .into_value();

    let out = Maybe::new(obj).attr("a")?.attr("b")?.otherwise("Unknown");
    assert_eq!(out, Value::from("Unknown"));
    Ok(())
}

#[test]
fn test_absence_absorbs_any_chain_length() -> Result<()> {
    let v = Maybe::new(Namespace::new("Bare"));
    for depth in 1..20 {
        let mut m = v.attr("a")?;
        for _ in 0..depth {
            m = m.attr("b")?.item(0)?.call(&[])?;
        }
        assert!(m.is_absent());
        assert_eq!(m.otherwise("default"), Value::from("default"));
    }
    Ok(())
}

#[test]
fn test_present_item_holding_none() -> Result<()> {
    assert!(Maybe::new(vec![Value::None]).item(0)?.is_present());
    Ok(())
}

#[test]
fn test_out_of_range_index() -> Result<()> {
    let out = Maybe::new(vec![1, 2]).item(5)?.otherwise("oob");
    assert_eq!(out, Value::from("oob"));
    Ok(())
}

#[test]
fn test_wrapping_is_idempotent() {
    for value in samples() {
        let once = Maybe::new(value.clone());
        let twice = Maybe::wrap(Maybe::new(value));
        assert_eq!(once.is_present(), twice.is_present());
        assert_eq!(once.just(), twice.just());
        assert_eq!(once.otherwise(0), twice.otherwise(0));
    }

    let absent = Maybe::wrap(Maybe::wrap(&EMPTY));
    assert!(absent.is_absent());
}

#[test]
fn test_is_present_tracks_the_chain() -> Result<()> {
    let data = Maybe::new(Value::from_json_str(r#"{"a": {"b": [10, null]}}"#)?);
    assert!(data.item("a")?.item("b")?.item(1)?.is_present());
    assert!(!data.item("a")?.item("b")?.item(2)?.is_present());
    assert!(!data.item("a")?.item("c")?.is_present());
    Ok(())
}

#[test]
fn test_domain_error_propagates_out_of_the_chain() -> Result<()> {
    let ledger = Maybe::new(Value::object(Ledger { balance: 40 }));
    assert_eq!(ledger.attr("balance")?, 40);

    let err = ledger.attr("withdraw")?.call(&[Value::Int(10)]).unwrap_err();
    assert!(matches!(err, MaybeError::Domain(_)));
    assert_eq!(err.to_string(), "ledger is locked");
    Ok(())
}

#[test]
fn test_short_circuit_skips_the_operation() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counted = Value::func("counted", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Int(1).into())
    });

    let holder = Namespace::new("Holder").with_attr("f", counted).into_value();
    let m = Maybe::new(holder);

    m.attr("f")?.call(&[])?;
    m.attr("missing")?.attr("f")?.call(&[])?;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_raw_accessor_on_absent_returns_sentinel() -> Result<()> {
    let m = Maybe::new(vec![1]).item(4)?;
    assert!(matches!(m.just(), Held::Empty(e) if e.is(&EMPTY)));
    assert_eq!(m.just(), &Held::empty());
    assert_ne!(m.just(), &Held::Value(Value::None));
    Ok(())
}

#[test]
fn test_call_with_arguments() -> Result<()> {
    let parse = Value::func("parse_int", |args| match args {
        [Value::Str(s)] => Ok(s
            .parse::<i64>()
            .map(Value::Int)
            .map_or_else(|_| Held::empty(), Held::Value)),
        _ => Err(MaybeError::failed(format!("parse_int takes 1 argument, got {}", args.len()))),
    });
    let m = Maybe::new(parse);

    assert_eq!(m.call(&[Value::from("0")])?, 0);
    assert_eq!(m.call(&[Value::from("foo")])?.otherwise(0), Value::Int(0));
    // 參數數量錯誤屬於程式錯誤，不應被吞掉
    assert!(m.call(&[]).is_err());
    Ok(())
}

#[test]
fn test_conversions_inside_chain() -> Result<()> {
    let m = Maybe::new(Value::from_json_str(r#"{"count": "12", "ratio": null}"#)?);
    assert_eq!(m.item("count")?.as_maybe(AsMaybe::Int)?, 12);
    assert!(m.item("ratio")?.as_maybe(AsMaybe::Float)?.is_absent());
    assert!(m.item("missing")?.as_maybe(AsMaybe::Int)?.is_absent());
    Ok(())
}

#[test]
fn test_keys_from_various_types() -> Result<()> {
    let m = Maybe::new(vec!["a", "b", "c"]);
    assert_eq!(m.item(2usize)?, "c");
    assert_eq!(m.item(-3i64)?, "a");
    assert_eq!(m.item(Key::Index(1))?, "b");
    assert!(m.item(Key::name("len"))?.is_absent());
    Ok(())
}
