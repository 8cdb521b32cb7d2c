use super::*;
use crate::{Env, Params};
use pretty_assertions::assert_eq;

fn ints(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::int).collect()
}

#[test]
fn test_list_and_vector_compare_by_elements() {
    assert_eq!(Value::list(ints(&[1, 2])), Value::vector(ints(&[1, 2])));
    assert_ne!(Value::list(ints(&[1, 2])), Value::vector(ints(&[2, 1])));
    assert_ne!(Value::list(ints(&[1])), Value::list(ints(&[1, 1])));
}

#[test]
fn test_nested_sequences_compare_across_tags() {
    let a = Value::list(vec![Value::vector(ints(&[1])), Value::int(2)]);
    let b = Value::vector(vec![Value::list(ints(&[1])), Value::int(2)]);
    assert_eq!(a, b);
}

#[test]
fn test_map_equality_ignores_order() {
    let a = Value::map(vec![
        (Value::keyword("a"), Value::int(1)),
        (Value::keyword("b"), Value::int(2)),
    ]);
    let b = Value::map(vec![
        (Value::keyword("b"), Value::int(2)),
        (Value::keyword("a"), Value::int(1)),
    ]);
    assert_eq!(a, b);
}

#[test]
fn test_map_equality_checks_values_and_size() {
    let a = Value::map(vec![(Value::keyword("a"), Value::int(1))]);
    let b = Value::map(vec![(Value::keyword("a"), Value::int(2))]);
    let c = Value::map(vec![
        (Value::keyword("a"), Value::int(1)),
        (Value::keyword("b"), Value::int(1)),
    ]);
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_map_duplicate_key_keeps_last_value() {
    let map = Value::map(vec![
        (Value::string("k"), Value::int(1)),
        (Value::string("k"), Value::int(2)),
    ]);
    let Value::Map(entries) = &map else {
        panic!("expected a map");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1, Value::int(2));
}

#[test]
fn test_scalars_do_not_cross_compare() {
    assert_ne!(Value::string("a"), Value::symbol("a"));
    assert_ne!(Value::keyword("a"), Value::symbol("a"));
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::int(0), Value::Bool(false));
}

#[test]
fn test_atoms_compare_by_contents() {
    let a = Value::atom(Value::int(1));
    let b = Value::atom(Value::int(1));
    assert_eq!(a, b);

    let Value::Atom(cell) = &b else {
        panic!("expected an atom");
    };
    cell.set(Value::int(2));
    assert_ne!(a, b);
}

#[test]
fn test_self_referencing_atoms_compare() {
    let a = Value::atom(Value::Nil);
    let b = Value::atom(Value::Nil);
    for value in [&a, &b] {
        let Value::Atom(cell) = value else {
            panic!("expected an atom");
        };
        cell.set(Value::list(vec![Value::int(1), value.clone()]));
    }
    assert_eq!(a, a.clone());
    assert_eq!(a, b);

    let c = Value::atom(Value::list(vec![Value::int(2), a.clone()]));
    assert_ne!(a, c);
}

#[test]
fn test_atom_clones_share_the_slot() {
    let Value::Atom(cell) = Value::atom(Value::Nil) else {
        panic!("expected an atom");
    };
    let other = cell.clone();
    other.set(Value::int(7));
    assert_eq!(cell.get(), Value::int(7));
    assert!(cell.ptr_eq(&other));
}

#[test]
fn test_closures_compare_by_identity() {
    let closure = Value::closure(Closure::new(Params::default(), Value::Nil, Env::new()));
    let same = closure.clone();
    let other = Value::closure(Closure::new(Params::default(), Value::Nil, Env::new()));
    assert_eq!(closure, same);
    assert_ne!(closure, other);
}

#[test]
fn test_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::int(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::list(vec![]).is_truthy());
}

#[test]
fn test_to_macro_sets_flag_only_on_copy() {
    let closure = Closure::new(Params::default(), Value::int(1), Env::new());
    let mac = closure.to_macro();
    assert!(!closure.is_macro());
    assert!(mac.is_macro());
    assert_eq!(Value::closure(mac).type_name(), "macro");
}

#[test]
fn test_as_seq_accepts_lists_and_vectors_only() {
    assert_eq!(Value::list(ints(&[1])).as_seq(), Some(&ints(&[1])[..]));
    assert_eq!(Value::vector(ints(&[1])).as_seq(), Some(&ints(&[1])[..]));
    assert_eq!(Value::Nil.as_seq(), None);
    assert_eq!(Value::map(vec![]).as_seq(), None);
}
