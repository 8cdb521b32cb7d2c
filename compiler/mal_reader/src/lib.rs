//! MAL Reader - turns source text into `Value`s.
//!
//! Reading happens in two passes:
//! - [`tokenize`]: a `logos` lexer splitting text into raw tokens
//! - [`Reader`]: a cursor over those tokens building one form at a time
//!
//! String tokens are kept raw (quotes and escapes included) by the lexer and
//! validated by [`parse_string_literal`] when the reader turns them into
//! values.

mod lexer;
mod reader;
mod string_literal;

pub use lexer::{tokenize, Token, TokenKind};
pub use reader::{read_str, ReadError, Reader};
pub use string_literal::{parse_string_literal, StringLiteralError};
