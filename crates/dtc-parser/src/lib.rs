//! Lexer/parser **contract** for the dtc front end (spec §1, §4 "External
//! collaborator contracts"; out of scope per spec — "the lexer and
//! LALR-style grammar driver that produces AST values from source text").
//!
//! This crate names the *interface* the parser must satisfy — token
//! kinds, the reserved-word and multi-character-operator tables, and the
//! `Lexer`/`Parser` traits — without implementing a scanner or grammar.
//! [`dtc_ast`] is the type the implementation would have to produce.

use dtc_ast::TranslationUnit;
use dtc_common::{Context, Diagnostic};

/// The language's reserved words (spec §4, "External collaborator
/// contracts"). An identifier lexing to one of these is a keyword token,
/// never an `Ident`.
pub const RESERVED_WORDS: &[&str] = &[
    "type", "void", "u8", "s8", "u16", "s16", "u32", "s32", "u64", "s64", "bool", "true", "false",
    "struct", "union", "return", "if", "else",
];

/// Multi-character operator spellings the lexer must recognize (spec §4).
/// Every other punctuation character is passed through literally as its
/// own single-character token.
pub const MULTI_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">="];

#[must_use]
pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS.contains(&text)
}

/// One lexical token. The scanner's concrete token stream is out of
/// scope; this is the shape a conforming implementation would hand to
/// [`Parser::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Reserved(&'static str),
    Ident,
    IntegerLiteral(u64),
    /// Any single- or multi-character punctuation/operator token, stored
    /// verbatim (e.g. `"=="`, `"{"`, `"+"`).
    Punct(&'static str),
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: dtc_common::Span,
}

/// A lexical or syntactic failure (spec §7, kinds 1-2).
///
/// Lexical diagnostics ("unknown character") are non-fatal: the
/// character is skipped and lexing continues, so a conforming
/// implementation reports them out-of-band (to stderr) rather than
/// through this type. `ParseError` models the fatal case: a syntax error
/// that aborts parsing, reported with (line, column) via [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError(pub Diagnostic);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Produces a token stream from source text. Unknown characters are
/// skipped after a diagnostic (spec §7, kind 1); this trait does not
/// specify *how* that diagnostic is delivered, only that lexing does not
/// stop because of it.
pub trait Lexer {
    fn next_token(&mut self, ctx: &mut Context) -> Token;
}

/// Produces a [`TranslationUnit`] from a token stream. A syntax error
/// aborts parsing (spec §7, kind 2); there is no error-recovery mode
/// beyond token-level skip during lexing (spec §1 Non-goals).
pub trait Parser {
    fn parse(&mut self, ctx: &mut Context) -> Result<TranslationUnit, ParseError>;
}
