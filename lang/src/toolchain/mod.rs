//! Source input, lexing, and diagnostics for the Monkey language.

pub mod diagnostics;
pub mod lexer;
pub mod source;
