#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

fn params(names: &[&str]) -> Params {
    let forms: Vec<Value> = names.iter().map(|n| Value::symbol(*n)).collect();
    Params::parse(&forms).unwrap()
}

#[test]
fn test_set_returns_value_and_binds() {
    let env = Env::new();
    assert_eq!(env.set("x", Value::int(42)), Value::int(42));
    assert_eq!(env.lookup("x").unwrap(), Value::int(42));
}

#[test]
fn test_lookup_walks_parents() {
    let root = Env::new();
    root.set("x", Value::int(1));
    let inner = root.child().child();
    assert_eq!(inner.lookup("x").unwrap(), Value::int(1));
    assert_eq!(inner.depth(), 3);
}

#[test]
fn test_child_shadows_without_touching_parent() {
    let root = Env::new();
    root.set("x", Value::int(1));
    let child = root.child();
    child.set("x", Value::int(2));
    assert_eq!(child.lookup("x").unwrap(), Value::int(2));
    assert_eq!(root.lookup("x").unwrap(), Value::int(1));
}

#[test]
fn test_lookup_unbound_symbol_fails() {
    let err = Env::new().child().lookup("nope").unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::SymbolNotFound {
            name: "nope".to_string()
        }
    );
    assert_eq!(err.message(), "Symbol 'nope' not found");
}

#[test]
fn test_frames_are_shared_between_handles() {
    let env = Env::new();
    let alias = env.clone();
    alias.set("y", Value::Nil);
    assert!(env.ptr_eq(&alias));
    assert_eq!(env.lookup("y").unwrap(), Value::Nil);
}

#[test]
fn test_root_finds_outermost_frame() {
    let root = Env::new();
    let leaf = root.child().child().child();
    assert!(leaf.root().ptr_eq(&root));
    assert!(root.root().ptr_eq(&root));
}

#[test]
fn test_with_bindings_positional() {
    let root = Env::new();
    let env = Env::with_bindings(&root, &params(&["a", "b"]), vec![Value::int(1), Value::int(2)])
        .unwrap();
    assert_eq!(env.lookup("a").unwrap(), Value::int(1));
    assert_eq!(env.lookup("b").unwrap(), Value::int(2));
    assert!(root.get("a").is_none());
}

#[test]
fn test_with_bindings_variadic_collects_rest() {
    let env = Env::with_bindings(
        &Env::new(),
        &params(&["a", "&", "more"]),
        vec![Value::int(1), Value::int(2), Value::int(3)],
    )
    .unwrap();
    assert_eq!(env.lookup("a").unwrap(), Value::int(1));
    assert_eq!(
        env.lookup("more").unwrap(),
        Value::list(vec![Value::int(2), Value::int(3)])
    );
}

#[test]
fn test_with_bindings_variadic_may_be_empty() {
    let env = Env::with_bindings(&Env::new(), &params(&["&", "more"]), vec![]).unwrap();
    assert_eq!(env.lookup("more").unwrap(), Value::list(vec![]));
}

#[test]
fn test_with_bindings_too_few_arguments() {
    let err = Env::with_bindings(&Env::new(), &params(&["a", "b"]), vec![Value::int(1)])
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1
        }
    );

    let err = Env::with_bindings(&Env::new(), &params(&["a", "&", "r"]), vec![]).unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::TooFewArguments { min: 1, got: 0 });
}

#[test]
fn test_with_bindings_too_many_arguments() {
    let err = Env::with_bindings(&Env::new(), &params(&["a"]), vec![Value::Nil, Value::Nil])
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::ArityMismatch {
            expected: 1,
            got: 2
        }
    );
}

#[test]
fn test_params_reject_non_symbols() {
    assert!(Params::parse(&[Value::int(1)]).is_err());
    assert!(Params::parse(&[Value::symbol("&")]).is_err());
    assert!(Params::parse(&[
        Value::symbol("&"),
        Value::symbol("a"),
        Value::symbol("b")
    ])
    .is_err());
}

#[test]
fn test_params_accessors() {
    let p = params(&["x", "&", "ys"]);
    assert_eq!(p.positional(), &["x".to_string()]);
    assert_eq!(p.variadic(), Some("ys"));
}
