//! A Monkey language lexer, which splits one line of input into tokens.
//!
//! The lexer hands out light-weight [Token] structures one at a time from the [Cursor] returned
//! by [tokenize()]. Nothing is scanned ahead of the caller: each pull does just enough work to
//! produce the next token. The lexer is tolerant of erroneous input; characters it doesn't
//! recognize come back as [TokenKind::Unknown] tokens and scanning carries on, so every line ends
//! with exactly one [TokenKind::EndOfInput] token. It does no processing beyond tokenization, for
//! example number strings are not converted to their binary representation.
//!

pub mod cursor;
pub mod token;

pub use cursor::Cursor;
pub use cursor::ScanState;
pub use token::Token;
pub use token::TokenKind;

use crate::toolchain::diagnostics::DiagnosticConsumer;

/// Returns a fresh [Cursor] over `line`, reporting problems with the input to `diags`.
pub fn tokenize<'s, 'd>(line: &'s str, diags: &'d mut dyn DiagnosticConsumer) -> Cursor<'s, 'd> {
    Cursor::new(line, diags)
}

#[cfg(test)]
mod cursor_unittests;
