//! Printing values back to source text.
//!
//! `print_string(value, true)` is the inverse of the reader for every
//! literal-constructible value (integers, strings, symbols, keywords,
//! booleans, nil, lists, vectors, maps). Callables, atoms, errors and the
//! EOF sentinel render as placeholders that do not read back.

use crate::{ensure_sufficient_stack, Value};

/// Render `value` as text.
///
/// With `readably`, strings are quoted and escaped so the output can be read
/// back; without it they are written raw (no quotes, no escapes). An atom
/// reached again while its own contents are being printed renders as `...`.
pub fn print_string(value: &Value, readably: bool) -> String {
    let mut printer = Printer {
        out: String::new(),
        readably,
        open_atoms: Vec::new(),
    };
    printer.write_value(value);
    printer.out
}

struct Printer {
    out: String,
    readably: bool,
    /// Atoms whose contents are currently being written.
    open_atoms: Vec<*const ()>,
}

impl Printer {
    fn write_value(&mut self, value: &Value) {
        ensure_sufficient_stack(|| self.write_value_inner(value));
    }

    fn write_value_inner(&mut self, value: &Value) {
        match value {
            Value::Int(n) => self.out.push_str(&n.to_string()),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Nil => self.out.push_str("nil"),
            Value::Eof => self.out.push_str("<EOF>"),
            Value::Symbol(name) => self.out.push_str(name),
            Value::Keyword(name) => {
                self.out.push(':');
                self.out.push_str(name);
            }
            Value::Str(s) if self.readably => {
                self.out.push('"');
                self.out.push_str(&escape_string(s));
                self.out.push('"');
            }
            Value::Str(s) => self.out.push_str(s),
            Value::List(items) => self.write_seq(items, "(", ")"),
            Value::Vector(items) => self.write_seq(items, "[", "]"),
            Value::Map(entries) => {
                self.out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    self.write_value(key);
                    self.out.push(' ');
                    self.write_value(value);
                }
                self.out.push('}');
            }
            Value::Function(f) => {
                self.out.push_str("#<function ");
                self.out.push_str(f.name());
                self.out.push('>');
            }
            Value::Closure(c) if c.is_macro() => self.out.push_str("#<macro>"),
            Value::Closure(_) => self.out.push_str("#<function>"),
            Value::Atom(cell) => {
                let addr = cell.addr();
                if self.open_atoms.contains(&addr) {
                    self.out.push_str("...");
                    return;
                }
                self.open_atoms.push(addr);
                self.out.push_str("(atom ");
                self.write_value(&cell.get());
                self.out.push(')');
                self.open_atoms.pop();
            }
            Value::Error(message) => {
                self.out.push_str("*** ");
                self.out.push_str(message);
            }
        }
    }

    fn write_seq(&mut self, items: &[Value], open: &str, close: &str) {
        self.out.push_str(open);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.write_value(item);
        }
        self.out.push_str(close);
    }
}

/// Escape `\`, `"`, tab, newline and carriage return.
pub fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
