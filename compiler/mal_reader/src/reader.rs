//! Reader: builds `Value` forms from tokens.
//!
//! `read_form` dispatches on the current token:
//!
//! | token        | result                              |
//! |--------------|-------------------------------------|
//! | `(` `[` `{`  | List / Vector / Map up to the close |
//! | `'` form     | `(quote form)`                      |
//! | `` ` `` form | `(quasiquote form)`                 |
//! | `~` form     | `(unquote form)`                    |
//! | `~@` form    | `(splice-unquote form)`             |
//! | `@` form     | `(deref form)`                      |
//! | `;...`       | skipped; `nil` if nothing follows   |
//! | none left    | `Value::Eof`                        |
//! | other        | atom (nil, integer, string, ...)    |

use mal_ir::errors::read_error;
use mal_ir::{ensure_sufficient_stack, print_string, EvalError, Value};
use tracing::trace;

use crate::lexer::{tokenize, Token, TokenKind};
use crate::string_literal::{parse_string_literal, StringLiteralError};

/// Why source text could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// Input ended inside a collection or after a quote prefix.
    #[error("Unexpected EOF")]
    UnexpectedEof,
    /// A closing delimiter with no matching opener.
    #[error("Unexpected '{0}'")]
    UnexpectedDelimiter(char),
    /// A map literal with an odd number of forms.
    #[error("Missing value for key={0}")]
    MissingMapValue(String),
    #[error("Integer literal out of range: {0}")]
    IntegerOutOfRange(String),
    #[error(transparent)]
    StringLiteral(#[from] StringLiteralError),
}

impl From<ReadError> for EvalError {
    fn from(error: ReadError) -> Self {
        read_error(error.to_string())
    }
}

/// Cursor over the tokens of one source text.
pub struct Reader<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Reader<'src> {
    pub fn new(source: &'src str) -> Self {
        Reader {
            tokens: tokenize(source),
            pos: 0,
        }
    }

    /// Whether every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_comments(&mut self) {
        while self.peek().is_some_and(|t| t.kind == TokenKind::Comment) {
            self.advance();
        }
    }

    /// Read the next complete form, or `Value::Eof` when no tokens remain.
    pub fn read_form(&mut self) -> Result<Value, ReadError> {
        ensure_sufficient_stack(|| self.read_form_inner())
    }

    fn read_form_inner(&mut self) -> Result<Value, ReadError> {
        let Some(token) = self.peek() else {
            return Ok(Value::Eof);
        };
        trace!(kind = ?token.kind, text = token.text, "read_form");
        match token.kind {
            // A comment in form position reads as nil; the next form stays
            // in the stream.
            TokenKind::Comment => {
                self.skip_comments();
                Ok(Value::Nil)
            }
            TokenKind::LParen => self.read_seq(TokenKind::RParen).map(Value::list),
            TokenKind::LBracket => self.read_seq(TokenKind::RBracket).map(Value::vector),
            TokenKind::LBrace => self.read_map(),
            TokenKind::RParen => Err(ReadError::UnexpectedDelimiter(')')),
            TokenKind::RBracket => Err(ReadError::UnexpectedDelimiter(']')),
            TokenKind::RBrace => Err(ReadError::UnexpectedDelimiter('}')),
            TokenKind::Quote => self.read_wrapped("quote"),
            TokenKind::Quasiquote => self.read_wrapped("quasiquote"),
            TokenKind::Unquote => self.read_wrapped("unquote"),
            TokenKind::SpliceUnquote => self.read_wrapped("splice-unquote"),
            TokenKind::At => self.read_wrapped("deref"),
            TokenKind::Caret | TokenKind::Str | TokenKind::Atom => {
                self.advance();
                read_atom(token.text)
            }
        }
    }

    /// Read `(symbol form)` for a reader-macro prefix such as `'`.
    fn read_wrapped(&mut self, symbol: &str) -> Result<Value, ReadError> {
        self.advance();
        match self.read_form()? {
            Value::Eof => Err(ReadError::UnexpectedEof),
            form => Ok(Value::list(vec![Value::symbol(symbol), form])),
        }
    }

    /// Read forms up to (and consuming) `close`; the opener is the current token.
    fn read_seq(&mut self, close: TokenKind) -> Result<Vec<Value>, ReadError> {
        self.advance();
        let mut items = Vec::new();
        loop {
            self.skip_comments();
            match self.peek() {
                None => return Err(ReadError::UnexpectedEof),
                Some(token) if token.kind == close => {
                    self.advance();
                    return Ok(items);
                }
                Some(_) => items.push(self.read_form()?),
            }
        }
    }

    fn read_map(&mut self) -> Result<Value, ReadError> {
        let mut forms = self.read_seq(TokenKind::RBrace)?;
        if forms.len() % 2 != 0 {
            let key = forms.pop().unwrap_or(Value::Nil);
            return Err(ReadError::MissingMapValue(print_string(&key, true)));
        }
        let mut entries = Vec::with_capacity(forms.len() / 2);
        let mut forms = forms.into_iter();
        while let (Some(key), Some(value)) = (forms.next(), forms.next()) {
            entries.push((key, value));
        }
        Ok(Value::map(entries))
    }
}

/// Read the first form of `source`.
///
/// Any tokens after the first form are ignored; empty input yields `Value::Eof`.
pub fn read_str(source: &str) -> Result<Value, ReadError> {
    Reader::new(source).read_form()
}

/// Classify a single non-delimiter token.
fn read_atom(text: &str) -> Result<Value, ReadError> {
    match text {
        "nil" => return Ok(Value::Nil),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if is_integer(text) {
        return text
            .parse::<i64>()
            .map(Value::int)
            .map_err(|_| ReadError::IntegerOutOfRange(text.to_owned()));
    }
    if text.starts_with('"') {
        return Ok(Value::string(parse_string_literal(text)?));
    }
    if let Some(name) = text.strip_prefix(':').filter(|name| !name.is_empty()) {
        return Ok(Value::keyword(name));
    }
    Ok(Value::symbol(text))
}

/// Matches `-?\d+` exactly.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests;
