#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn read(source: &str) -> Value {
    read_str(source).unwrap()
}

fn read_err(source: &str) -> String {
    read_str(source).unwrap_err().to_string()
}

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

// Atoms

#[test]
fn test_scalars() {
    assert_eq!(read("nil"), Value::Nil);
    assert_eq!(read("true"), Value::Bool(true));
    assert_eq!(read("false"), Value::Bool(false));
    assert_eq!(read("42"), Value::int(42));
    assert_eq!(read("-7"), Value::int(-7));
    assert_eq!(read("abc"), sym("abc"));
    assert_eq!(read(":kw"), Value::keyword("kw"));
    assert_eq!(read(r#""a\nb""#), Value::string("a\nb"));
}

#[test]
fn test_symbols_that_look_numeric() {
    assert_eq!(read("-"), sym("-"));
    assert_eq!(read("1abc"), sym("1abc"));
    assert_eq!(read("-x"), sym("-x"));
}

#[test]
fn test_lone_colon_is_a_symbol() {
    assert_eq!(read(":"), sym(":"));
}

#[test]
fn test_keyword_strips_one_colon() {
    assert_eq!(read("::a"), Value::keyword(":a"));
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(read("9223372036854775807"), Value::int(i64::MAX));
    assert_eq!(read("-9223372036854775808"), Value::int(i64::MIN));
    assert_eq!(
        read_str("9223372036854775808"),
        Err(ReadError::IntegerOutOfRange("9223372036854775808".to_owned()))
    );
}

#[test]
fn test_caret_reads_as_symbol() {
    assert_eq!(read("^"), sym("^"));
}

// Collections

#[test]
fn test_nested_list() {
    assert_eq!(
        read("(+ 1 (* 2 3))"),
        Value::list(vec![
            sym("+"),
            Value::int(1),
            Value::list(vec![sym("*"), Value::int(2), Value::int(3)]),
        ])
    );
}

#[test]
fn test_vector_keeps_its_tag() {
    let value = read("[1 2]");
    assert!(matches!(value, Value::Vector(_)));
    assert_eq!(value.as_seq().map(<[Value]>::len), Some(2));
}

#[test]
fn test_empty_collections() {
    assert_eq!(read("()"), Value::list(vec![]));
    assert!(matches!(read("[]"), Value::Vector(items) if items.is_empty()));
    assert!(matches!(read("{}"), Value::Map(entries) if entries.is_empty()));
}

#[test]
fn test_map() {
    let value = read(r#"{:a 1 "b" [2]}"#);
    let Value::Map(entries) = &value else {
        panic!("expected a map, got {value:?}");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], (Value::keyword("a"), Value::int(1)));
    assert_eq!(entries[1].0, Value::string("b"));
}

#[test]
fn test_map_duplicate_key_keeps_last_value() {
    let value = read("{:a 1 :b 2 :a 3}");
    let Value::Map(entries) = &value else {
        panic!("expected a map, got {value:?}");
    };
    assert_eq!(
        entries.to_vec(),
        vec![
            (Value::keyword("a"), Value::int(3)),
            (Value::keyword("b"), Value::int(2)),
        ]
    );
}

#[test]
fn test_commas_are_whitespace() {
    assert_eq!(read("(1,2,,3)"), read("(1 2 3)"));
}

// Reader macros

#[test]
fn test_quote_family() {
    assert_eq!(read("'a"), Value::list(vec![sym("quote"), sym("a")]));
    assert_eq!(read("`a"), Value::list(vec![sym("quasiquote"), sym("a")]));
    assert_eq!(read("~a"), Value::list(vec![sym("unquote"), sym("a")]));
    assert_eq!(read("~@a"), Value::list(vec![sym("splice-unquote"), sym("a")]));
    assert_eq!(read("@a"), Value::list(vec![sym("deref"), sym("a")]));
}

#[test]
fn test_quote_wraps_whole_form() {
    assert_eq!(
        read("'(1 2)"),
        Value::list(vec![
            sym("quote"),
            Value::list(vec![Value::int(1), Value::int(2)]),
        ])
    );
}

#[test]
fn test_quote_at_end_of_input() {
    assert_eq!(read_str("'"), Err(ReadError::UnexpectedEof));
    assert_eq!(read_str("(a ~@)"), Err(ReadError::UnexpectedDelimiter(')')));
}

// Comments and end of input

#[test]
fn test_empty_input_is_eof() {
    assert_eq!(read(""), Value::Eof);
    assert_eq!(read("  ,, \n"), Value::Eof);
}

#[test]
fn test_comment_alone_is_nil() {
    assert_eq!(read("; just a comment"), Value::Nil);
}

#[test]
fn test_comment_before_form_is_nil() {
    assert_eq!(read("; c\n1"), Value::Nil);
    assert_eq!(read("; leading\n;; more\n(1)"), Value::Nil);
}

#[test]
fn test_form_after_comment_is_still_readable() {
    let mut reader = Reader::new("; leading\n(1)");
    assert_eq!(reader.read_form().unwrap(), Value::Nil);
    assert_eq!(reader.read_form().unwrap(), Value::list(vec![Value::int(1)]));
    assert!(reader.is_at_end());
}

#[test]
fn test_comments_inside_collections_are_skipped() {
    assert_eq!(
        read("(1 ; one\n 2 ; two\n)"),
        Value::list(vec![Value::int(1), Value::int(2)])
    );
}

#[test]
fn test_only_first_form_is_read() {
    assert_eq!(read("1 2 3"), Value::int(1));
}

#[test]
fn test_reader_continues_after_first_form() {
    let mut reader = Reader::new("1 (2)");
    assert_eq!(reader.read_form().unwrap(), Value::int(1));
    assert_eq!(reader.read_form().unwrap(), Value::list(vec![Value::int(2)]));
    assert!(reader.is_at_end());
    assert_eq!(reader.read_form().unwrap(), Value::Eof);
}

// Errors

#[test]
fn test_unclosed_collections() {
    assert_eq!(read_err("(1 2"), "Unexpected EOF");
    assert_eq!(read_err("[1 (2)"), "Unexpected EOF");
    assert_eq!(read_err("{:a 1"), "Unexpected EOF");
}

#[test]
fn test_stray_closer() {
    assert_eq!(read_err(")"), "Unexpected ')'");
    assert_eq!(read_err("]"), "Unexpected ']'");
    assert_eq!(read_err("(1 }"), "Unexpected '}'");
}

#[test]
fn test_map_missing_value() {
    assert_eq!(read_err("{:a 1 :b}"), "Missing value for key=:b");
    assert_eq!(read_err(r#"{"k"}"#), r#"Missing value for key="k""#);
}

#[test]
fn test_string_errors_propagate() {
    assert_eq!(read_err(r#""abc"#), "unbalanced string");
    assert_eq!(read_err(r#"(str "a\qb")"#), "Invalid escaped character 'q'");
}

#[test]
fn test_read_error_converts_to_eval_error() {
    let err: EvalError = ReadError::UnexpectedEof.into();
    assert_eq!(err.message(), "Unexpected EOF");
}

#[test]
fn test_deep_nesting() {
    let depth = 5_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let mut value = read(&source);
    let mut seen = 0;
    while let Value::List(items) = value {
        seen += 1;
        match items.first() {
            Some(inner) => value = inner.clone(),
            None => break,
        }
    }
    assert_eq!(seen, depth);
}
