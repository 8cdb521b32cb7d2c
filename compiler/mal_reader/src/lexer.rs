//! Tokenizer for MAL using logos.
//!
//! Whitespace and commas separate tokens and are skipped. Every other
//! character starts exactly one of the token kinds below, so tokenizing
//! never fails: an unterminated string is still a `Str` token (its raw text
//! is validated later), and anything that is not a delimiter is an `Atom`.

use logos::Logos;

/// Raw token kinds.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[\s,]+")]
pub enum TokenKind {
    /// `~@`
    #[token("~@")]
    SpliceUnquote,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    /// `'`
    #[token("'")]
    Quote,
    /// `` ` ``
    #[token("`")]
    Quasiquote,
    /// `~`
    #[token("~")]
    Unquote,
    /// `^`
    #[token("^")]
    Caret,
    /// `@`
    #[token("@")]
    At,

    /// Double-quoted string, possibly unterminated; escapes are not decoded here.
    #[regex(r#""([^"\\]|\\.)*"?"#)]
    Str,

    /// `;` to end of line.
    #[regex(r";[^\n]*")]
    Comment,

    /// Maximal run of non-delimiter characters (symbols, numbers, keywords, `nil`, ...).
    #[regex(r#"[^\s\[\]{}()'"`,;~^@][^\s\[\]{}()'"`,;]*"#)]
    Atom,
}

/// A token and the source text it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

/// Split `source` into tokens, left to right.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    TokenKind::lexer(source)
        .spanned()
        .map(|(kind, span)| Token {
            // Every character is covered by some pattern; keep the text as an atom if not.
            kind: kind.unwrap_or(TokenKind::Atom),
            text: &source[span],
        })
        .collect()
}
