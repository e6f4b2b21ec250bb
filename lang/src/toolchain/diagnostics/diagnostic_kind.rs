/// The enumerated type of all diagnostics the toolchain emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// Character doesn't match any defined pattern.
    UnknownToken,

    /// A double quote with no closing quote on the same line. Reported as a warning, the quote
    /// is still lexed as an unknown character.
    UnterminatedString,
}
