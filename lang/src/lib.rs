//! Monkey language tokenizer front-end.
//!
//! This crate reads Monkey source text one line at a time, splits every line into
//! [toolchain::lexer::token::Token]s and dumps them back out. It is the entry point of a larger
//! toolchain; parsing and evaluation live elsewhere.
//!

#[macro_use]
extern crate static_assertions;

pub mod repl;
pub mod toolchain;
