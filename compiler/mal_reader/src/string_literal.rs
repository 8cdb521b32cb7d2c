//! Validation and unescaping of raw string tokens.
//!
//! The lexer keeps string tokens exactly as written. A valid literal starts
//! and ends with an unescaped `"` and only uses the escapes `\t`, `\n`, `\r`,
//! `\\` and `\"`.

/// Why a raw string token is not a valid literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StringLiteralError {
    /// Missing closing quote, or the closing quote is escaped.
    #[error("unbalanced string")]
    Unbalanced,
    /// An unescaped `"` before the final position (char index).
    #[error("Unexpected end of string (at position {position})")]
    UnexpectedEnd { position: usize },
    #[error("Invalid escaped character '{0}'")]
    InvalidEscape(char),
}

/// Decode a raw string token (quotes included) into its contents.
pub fn parse_string_literal(raw: &str) -> Result<String, StringLiteralError> {
    let len = raw.chars().count();
    if len < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(StringLiteralError::Unbalanced);
    }
    let last = len - 1;

    let mut contents = String::with_capacity(raw.len());
    let mut escaped = false;
    for (position, c) in raw.chars().enumerate().take(last).skip(1) {
        if escaped {
            contents.push(match c {
                't' => '\t',
                'n' => '\n',
                'r' => '\r',
                '\\' | '"' => c,
                other => return Err(StringLiteralError::InvalidEscape(other)),
            });
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Err(StringLiteralError::UnexpectedEnd { position });
        } else {
            contents.push(c);
        }
    }

    // A pending escape would consume the closing quote.
    if escaped {
        return Err(StringLiteralError::Unbalanced);
    }
    Ok(contents)
}
