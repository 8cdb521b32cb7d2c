//! Tail positions must not grow the host stack.
//!
//! Every test also checks how deeply `eval` nested: `eval` grows the stack on
//! demand, so a broken trampoline would still produce the right answer, just
//! with nesting proportional to the iteration count.

use super::rep_all;
use crate::interpreter::eval_depth::{high_water, reset_high_water};
use pretty_assertions::assert_eq;

/// Nesting allowed for a tail-recursive loop, whatever its length.
const TAIL_DEPTH_LIMIT: usize = 10;

/// Run `sources` in one interpreter and return the last result together
/// with the deepest `eval` nesting seen.
fn rep_all_measured(sources: &[&str]) -> (String, usize) {
    reset_high_water();
    let output = rep_all(sources);
    (output, high_water())
}

#[test]
fn self_recursive_tail_call() {
    let (output, depth) = rep_all_measured(&[
        "(def! sum (fn* (n acc) (if (= n 0) acc (sum (- n 1) (+ acc n)))))",
        "(sum 100000 0)",
    ]);
    assert_eq!(output, "5000050000");
    assert!(depth <= TAIL_DEPTH_LIMIT, "eval nested {depth} deep");
}

#[test]
fn tail_call_through_do_and_let() {
    let (output, depth) = rep_all_measured(&[
        "(def! count-down (fn* (n) (do (def! last n) (let* (m (- n 1)) (if (> m 0) (count-down m) m)))))",
        "(count-down 150000)",
    ]);
    assert_eq!(output, "0");
    assert!(depth <= TAIL_DEPTH_LIMIT, "eval nested {depth} deep");
}

#[test]
fn mutual_tail_recursion() {
    let (output, depth) = rep_all_measured(&[
        "(def! even? (fn* (n) (if (= n 0) true (odd? (- n 1)))))",
        "(def! odd? (fn* (n) (if (= n 0) false (even? (- n 1)))))",
        "(even? 100001)",
    ]);
    assert_eq!(output, "false");
    assert!(depth <= TAIL_DEPTH_LIMIT, "eval nested {depth} deep");
}

#[test]
fn tail_call_through_macro_expansion() {
    let (output, depth) = rep_all_measured(&[
        "(defmacro! unless (fn* (c a b) (list 'if c b a)))",
        "(def! loop (fn* (n) (unless (= n 0) (loop (- n 1)) :done)))",
        "(loop 50000)",
    ]);
    assert_eq!(output, ":done");
    assert!(depth <= TAIL_DEPTH_LIMIT, "eval nested {depth} deep");
}

#[test]
fn deep_non_tail_recursion_grows_stack() {
    let (output, depth) = rep_all_measured(&[
        "(def! depth (fn* (n) (if (= n 0) 0 (+ 1 (depth (- n 1))))))",
        "(depth 10000)",
    ]);
    assert_eq!(output, "10000");
    assert!(depth >= 10000, "eval nested only {depth} deep");
}
