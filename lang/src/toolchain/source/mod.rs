//! Input handling, turning a byte stream into the lines the lexer scans.

pub mod line_source;

pub use line_source::LineSource;
