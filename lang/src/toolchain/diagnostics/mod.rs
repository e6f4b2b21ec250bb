//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! Toolchain code reports problems as structured [Diagnostic]s and hands them to a
//! [DiagnosticConsumer], which decides how, or whether, the user gets to see them. The lexer
//! never fails on bad input, so diagnostics are its only way to say something went wrong.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticMessage;
pub use diagnostic_emitter::LogDiagnosticConsumer;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;
