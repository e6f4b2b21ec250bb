use std::iter::FusedIterator;
use std::str::Chars;

use crate::toolchain::diagnostics::Diagnostic;
use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::diagnostics::DiagnosticKind;
use crate::toolchain::diagnostics::DiagnosticLevel;
use crate::toolchain::diagnostics::DiagnosticLocation;
use crate::toolchain::diagnostics::DiagnosticMessage;
use crate::toolchain::diagnostics::LexerDiagnosticKind;

use super::token::DelimiterKind;
use super::token::LiteralKind;
use super::token::OperatorKind;
use super::token::ReservedKind;
use super::token::Token;
use super::token::TokenKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// There may be more tokens before the end of the line.
    Scanning,

    /// The end of the line was reached. Only [TokenKind::EndOfInput] comes out from here on.
    AtEnd,
}

/// Token source over a single line of input.
///
/// A Cursor is bound to one line for its whole life and cannot be rewound; scanning another
/// line takes a new Cursor. Tokens are produced on demand by [Cursor::next_token], which keeps
/// returning [TokenKind::EndOfInput] once the line is exhausted. As an [Iterator] the Cursor
/// yields the end token exactly once and then stops.
///
/// Design roughly inspired by the rustc lexer Cursor.
pub struct Cursor<'s, 'd> {
    // An iterator over the input character string.
    chars: Chars<'s>,
    // The unconsumed input, starting at the beginning of the token being scanned.
    string: &'s str,
    bytes_remaining: usize,
    column: usize,
    line: &'s str,
    state: ScanState,
    diags: &'d mut dyn DiagnosticConsumer,
}

impl<'s, 'd> Iterator for Cursor<'s, 'd> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        match self.state {
            ScanState::Scanning => Some(self.next_token()),
            ScanState::AtEnd => None,
        }
    }
}

impl<'s, 'd> FusedIterator for Cursor<'s, 'd> {}

impl<'s, 'd> Cursor<'s, 'd> {
    pub const EOF: char = '\0';

    pub fn new(line: &'s str, diags: &'d mut dyn DiagnosticConsumer) -> Cursor<'s, 'd> {
        Cursor {
            chars: line.chars(),
            string: line,
            bytes_remaining: line.len(),
            column: 1,
            line,
            state: ScanState::Scanning,
            diags,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn line(&self) -> &'s str {
        self.line
    }

    /// Scans and returns the next token on the line.
    pub fn next_token(&mut self) -> Token<'s> {
        if self.state == ScanState::AtEnd {
            return Token::end();
        }

        // Blank space separates tokens but never becomes one.
        self.eat_while(is_blank_space);
        self.extract_substring();

        let column = self.column;
        let first_char = match self.bump() {
            Some(c) => c,
            None => {
                self.state = ScanState::AtEnd;
                return Token::end();
            }
        };

        let token_kind = match first_char {
            c if is_identifier_start(c) => {
                self.eat_while(is_identifier);
                TokenKind::Identifier
            }

            '0'..='9' => {
                self.eat_while(|c| c.is_ascii_digit());
                TokenKind::Literal { kind: LiteralKind::Integer }
            }

            '"' => self.string(column),

            // Single-character delimiters.
            ',' => TokenKind::Delimiter { kind: DelimiterKind::Comma },
            ';' => TokenKind::Delimiter { kind: DelimiterKind::Semicolon },
            ':' => TokenKind::Delimiter { kind: DelimiterKind::Colon },
            '(' => TokenKind::Delimiter { kind: DelimiterKind::ParenOpen },
            ')' => TokenKind::Delimiter { kind: DelimiterKind::ParenClose },
            '{' => TokenKind::Delimiter { kind: DelimiterKind::BraceOpen },
            '}' => TokenKind::Delimiter { kind: DelimiterKind::BraceClose },
            '[' => TokenKind::Delimiter { kind: DelimiterKind::BracketOpen },
            ']' => TokenKind::Delimiter { kind: DelimiterKind::BracketClose },

            // Operators that may pair up with a trailing '='.
            '=' => self.followed_by_equals(OperatorKind::Assign, OperatorKind::Equal),
            '!' => self.followed_by_equals(OperatorKind::Bang, OperatorKind::NotEqual),

            '+' => TokenKind::Operator { kind: OperatorKind::Plus },
            '-' => TokenKind::Operator { kind: OperatorKind::Minus },
            '*' => TokenKind::Operator { kind: OperatorKind::Asterisk },
            '/' => TokenKind::Operator { kind: OperatorKind::Slash },
            '<' => TokenKind::Operator { kind: OperatorKind::LessThan },
            '>' => TokenKind::Operator { kind: OperatorKind::GreaterThan },

            // Unknown characters are reported one at a time, and scanning resumes with the next
            // character.
            c => {
                self.report(
                    LexerDiagnosticKind::UnknownToken,
                    column,
                    format!("Unrecognized character {:?}.", c),
                );
                TokenKind::Unknown
            }
        };

        // End of token, extract the substring.
        let literal = self.extract_substring();

        // Fixup identifiers to match against reserved words
        match token_kind {
            TokenKind::Identifier => match ReservedKind::lookup(literal) {
                Some(kind) => Token::new(TokenKind::Reserved { kind }, literal),
                None => Token::new(TokenKind::Identifier, literal),
            },
            _ => Token::new(token_kind, literal),
        }
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.column += 1;
        Some(c)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn extract_substring(&mut self) -> &'s str {
        let new_bytes_remaining = self.chars.as_str().len();
        let (prefix, suffix) = self.string.split_at(self.bytes_remaining - new_bytes_remaining);
        self.string = suffix;
        self.bytes_remaining = new_bytes_remaining;
        prefix
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }

    fn followed_by_equals(&mut self, single: OperatorKind, double: OperatorKind) -> TokenKind {
        if self.first() == '=' {
            self.bump();
            TokenKind::Operator { kind: double }
        } else {
            TokenKind::Operator { kind: single }
        }
    }

    // Strings must close on the line they open. An unmatched quote is lexed as an unknown
    // character on its own.
    fn string(&mut self, column: usize) -> TokenKind {
        if !self.chars.as_str().contains('"') {
            self.report(
                LexerDiagnosticKind::UnterminatedString,
                column,
                "Unterminated string literal.".to_string(),
            );
            return TokenKind::Unknown;
        }

        self.eat_while(|c| c != '"');
        // Consume the closing quote.
        self.bump();
        TokenKind::Literal { kind: LiteralKind::String }
    }

    fn report(&mut self, kind: LexerDiagnosticKind, column_number: usize, body: String) {
        let msg = DiagnosticMessage {
            kind: DiagnosticKind::LexerError { kind },
            location: DiagnosticLocation { column_number, line: self.line },
            body,
        };
        let level = match kind {
            LexerDiagnosticKind::UnknownToken => DiagnosticLevel::Error,
            LexerDiagnosticKind::UnterminatedString => DiagnosticLevel::Warning,
        };
        let diag = Diagnostic::new(level, msg);
        self.diags.handle_diagnostic(&diag);
    }
}

fn is_blank_space(c: char) -> bool {
    // Copied from the rustc lexer.
    matches!(
        c,
        // Usual ASCII suspects
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space

        // NEXT LINE from latin1
        | '\u{0085}'

        // Bidi markers
        | '\u{200E}' // LEFT-TO-RIGHT MARK
        | '\u{200F}' // RIGHT-TO-LEFT MARK

        // Dedicated whitespace characters from Unicode
        | '\u{2028}' // LINE SEPARATOR
        | '\u{2029}' // PARAGRAPH SEPARATOR
    )
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
