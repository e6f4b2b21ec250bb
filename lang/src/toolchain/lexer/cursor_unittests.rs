#[cfg(test)]
mod tests {
    use crate::toolchain::diagnostics::Diagnostic;
    use crate::toolchain::diagnostics::DiagnosticConsumer;
    use crate::toolchain::diagnostics::DiagnosticKind;
    use crate::toolchain::diagnostics::DiagnosticLevel;
    use crate::toolchain::diagnostics::LexerDiagnosticKind;
    use crate::toolchain::diagnostics::NullDiagnosticConsumer;

    use crate::toolchain::lexer::token::DelimiterKind;
    use crate::toolchain::lexer::token::LiteralKind;
    use crate::toolchain::lexer::token::OperatorKind;
    use crate::toolchain::lexer::token::ReservedKind;
    use crate::toolchain::lexer::token::Token;
    use crate::toolchain::lexer::token::TokenKind::*;

    use crate::toolchain::lexer::tokenize;
    use crate::toolchain::lexer::ScanState;

    // Keeps the kind, column, and level of every diagnostic it receives.
    #[derive(Default)]
    struct RecordingDiagnosticConsumer {
        seen: Vec<(LexerDiagnosticKind, usize)>,
        levels: Vec<DiagnosticLevel>,
    }

    impl DiagnosticConsumer for RecordingDiagnosticConsumer {
        fn handle_diagnostic(&mut self, diag: &Diagnostic) {
            let DiagnosticKind::LexerError { kind } = diag.message.kind;
            self.seen.push((kind, diag.message.location.column_number));
            self.levels.push(diag.level);
        }
    }

    // Lexing helper function to compare the full token sequence of a line, sentinel included.
    fn check_lexing(line: &str, expect: Vec<Token>) {
        let mut diags = NullDiagnosticConsumer {};
        let tokens: Vec<Token> = tokenize(line, &mut diags).collect();
        assert_eq!(tokens, expect);
    }

    #[test]
    fn assignment_statement() {
        check_lexing(
            "x = 5;",
            vec![
                Token { kind: Identifier, literal: "x" },
                Token { kind: Operator { kind: OperatorKind::Assign }, literal: "=" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "5" },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn empty_line() {
        check_lexing("", vec![Token::end()]);
    }

    #[test]
    fn blank_line() {
        check_lexing(" \t \u{2028}\r", vec![Token::end()]);
    }

    #[test]
    fn unknown_character() {
        check_lexing("@", vec![Token { kind: Unknown, literal: "@" }, Token::end()]);
    }

    #[test]
    fn identifier_with_digits() {
        check_lexing(
            "foo123 + 1",
            vec![
                Token { kind: Identifier, literal: "foo123" },
                Token { kind: Operator { kind: OperatorKind::Plus }, literal: "+" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "1" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn identifiers() {
        check_lexing(
            "_ a_b A9 x1y",
            vec![
                Token { kind: Identifier, literal: "_" },
                Token { kind: Identifier, literal: "a_b" },
                Token { kind: Identifier, literal: "A9" },
                Token { kind: Identifier, literal: "x1y" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn integer_followed_by_name() {
        check_lexing(
            "123abc",
            vec![
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "123" },
                Token { kind: Identifier, literal: "abc" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn reserved_words() {
        check_lexing(
            "fn let true false if else return lets",
            vec![
                Token { kind: Reserved { kind: ReservedKind::Function }, literal: "fn" },
                Token { kind: Reserved { kind: ReservedKind::Let }, literal: "let" },
                Token { kind: Reserved { kind: ReservedKind::True }, literal: "true" },
                Token { kind: Reserved { kind: ReservedKind::False }, literal: "false" },
                Token { kind: Reserved { kind: ReservedKind::If }, literal: "if" },
                Token { kind: Reserved { kind: ReservedKind::Else }, literal: "else" },
                Token { kind: Reserved { kind: ReservedKind::Return }, literal: "return" },
                Token { kind: Identifier, literal: "lets" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn single_character_operators() {
        check_lexing(
            "=+-!*/<>",
            vec![
                Token { kind: Operator { kind: OperatorKind::Assign }, literal: "=" },
                Token { kind: Operator { kind: OperatorKind::Plus }, literal: "+" },
                Token { kind: Operator { kind: OperatorKind::Minus }, literal: "-" },
                Token { kind: Operator { kind: OperatorKind::Bang }, literal: "!" },
                Token { kind: Operator { kind: OperatorKind::Asterisk }, literal: "*" },
                Token { kind: Operator { kind: OperatorKind::Slash }, literal: "/" },
                Token { kind: Operator { kind: OperatorKind::LessThan }, literal: "<" },
                Token { kind: Operator { kind: OperatorKind::GreaterThan }, literal: ">" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn two_character_operators() {
        check_lexing(
            "10 == 10; 9 != 10; a === b",
            vec![
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "10" },
                Token { kind: Operator { kind: OperatorKind::Equal }, literal: "==" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "10" },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "9" },
                Token { kind: Operator { kind: OperatorKind::NotEqual }, literal: "!=" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "10" },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token { kind: Identifier, literal: "a" },
                Token { kind: Operator { kind: OperatorKind::Equal }, literal: "==" },
                Token { kind: Operator { kind: OperatorKind::Assign }, literal: "=" },
                Token { kind: Identifier, literal: "b" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn delimiters() {
        check_lexing(
            "(){}[],;:",
            vec![
                Token { kind: Delimiter { kind: DelimiterKind::ParenOpen }, literal: "(" },
                Token { kind: Delimiter { kind: DelimiterKind::ParenClose }, literal: ")" },
                Token { kind: Delimiter { kind: DelimiterKind::BraceOpen }, literal: "{" },
                Token { kind: Delimiter { kind: DelimiterKind::BraceClose }, literal: "}" },
                Token { kind: Delimiter { kind: DelimiterKind::BracketOpen }, literal: "[" },
                Token { kind: Delimiter { kind: DelimiterKind::BracketClose }, literal: "]" },
                Token { kind: Delimiter { kind: DelimiterKind::Comma }, literal: "," },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token { kind: Delimiter { kind: DelimiterKind::Colon }, literal: ":" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn function_literal() {
        check_lexing(
            "let add = fn(x, y) { x + y; };",
            vec![
                Token { kind: Reserved { kind: ReservedKind::Let }, literal: "let" },
                Token { kind: Identifier, literal: "add" },
                Token { kind: Operator { kind: OperatorKind::Assign }, literal: "=" },
                Token { kind: Reserved { kind: ReservedKind::Function }, literal: "fn" },
                Token { kind: Delimiter { kind: DelimiterKind::ParenOpen }, literal: "(" },
                Token { kind: Identifier, literal: "x" },
                Token { kind: Delimiter { kind: DelimiterKind::Comma }, literal: "," },
                Token { kind: Identifier, literal: "y" },
                Token { kind: Delimiter { kind: DelimiterKind::ParenClose }, literal: ")" },
                Token { kind: Delimiter { kind: DelimiterKind::BraceOpen }, literal: "{" },
                Token { kind: Identifier, literal: "x" },
                Token { kind: Operator { kind: OperatorKind::Plus }, literal: "+" },
                Token { kind: Identifier, literal: "y" },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token { kind: Delimiter { kind: DelimiterKind::BraceClose }, literal: "}" },
                Token { kind: Delimiter { kind: DelimiterKind::Semicolon }, literal: ";" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn strings() {
        check_lexing(
            r#""foo bar" "" "a@b""#,
            vec![
                Token { kind: Literal { kind: LiteralKind::String }, literal: "\"foo bar\"" },
                Token { kind: Literal { kind: LiteralKind::String }, literal: "\"\"" },
                Token { kind: Literal { kind: LiteralKind::String }, literal: "\"a@b\"" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn unterminated_string() {
        let mut diags = RecordingDiagnosticConsumer::default();
        let tokens: Vec<Token> = tokenize("let s = \"abc", &mut diags).collect();
        assert_eq!(
            tokens,
            vec![
                Token { kind: Reserved { kind: ReservedKind::Let }, literal: "let" },
                Token { kind: Identifier, literal: "s" },
                Token { kind: Operator { kind: OperatorKind::Assign }, literal: "=" },
                Token { kind: Unknown, literal: "\"" },
                Token { kind: Identifier, literal: "abc" },
                Token::end(),
            ]
        );
        assert_eq!(diags.seen, vec![(LexerDiagnosticKind::UnterminatedString, 9)]);
        assert_eq!(diags.levels, vec![DiagnosticLevel::Warning]);
    }

    #[test]
    fn unknown_characters_do_not_stop_scanning() {
        check_lexing(
            "a @# b",
            vec![
                Token { kind: Identifier, literal: "a" },
                Token { kind: Unknown, literal: "@" },
                Token { kind: Unknown, literal: "#" },
                Token { kind: Identifier, literal: "b" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn unknown_multibyte_characters() {
        check_lexing(
            "é\u{fffd}1",
            vec![
                Token { kind: Unknown, literal: "é" },
                Token { kind: Unknown, literal: "\u{fffd}" },
                Token { kind: Literal { kind: LiteralKind::Integer }, literal: "1" },
                Token::end(),
            ],
        );
    }

    #[test]
    fn unknown_characters_are_reported() {
        let mut diags = RecordingDiagnosticConsumer::default();
        let count = tokenize("x @ $", &mut diags).count();
        assert_eq!(count, 4);
        assert_eq!(
            diags.seen,
            vec![(LexerDiagnosticKind::UnknownToken, 3), (LexerDiagnosticKind::UnknownToken, 5)]
        );
        assert_eq!(diags.levels, vec![DiagnosticLevel::Error, DiagnosticLevel::Error]);
    }

    #[test]
    fn columns_count_characters_on_long_lines() {
        let mut diags = RecordingDiagnosticConsumer::default();
        let line = format!("{}é@", "a".repeat(70_000));
        let count = tokenize(&line, &mut diags).count();
        assert_eq!(count, 4);
        assert_eq!(
            diags.seen,
            vec![
                (LexerDiagnosticKind::UnknownToken, 70_001),
                (LexerDiagnosticKind::UnknownToken, 70_002),
            ]
        );
    }

    #[test]
    fn end_is_idempotent() {
        let mut diags = NullDiagnosticConsumer {};
        let mut cursor = tokenize("x", &mut diags);
        assert_eq!(cursor.state(), ScanState::Scanning);
        assert_eq!(cursor.next_token(), Token { kind: Identifier, literal: "x" });
        assert_eq!(cursor.next_token(), Token::end());
        assert_eq!(cursor.state(), ScanState::AtEnd);
        for _ in 0..4 {
            assert_eq!(cursor.next_token(), Token::end());
        }
        assert_eq!(cursor.state(), ScanState::AtEnd);
    }

    #[test]
    fn iterator_yields_end_once() {
        let mut diags = NullDiagnosticConsumer {};
        let mut cursor = tokenize("", &mut diags);
        assert_eq!(cursor.next(), Some(Token::end()));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn token_display() {
        assert_eq!(Token { kind: Identifier, literal: "foo" }.to_string(), "identifier 'foo'");
        assert_eq!(Token { kind: Unknown, literal: "@" }.to_string(), "unknown '@'");
        assert_eq!(
            Token { kind: Operator { kind: OperatorKind::NotEqual }, literal: "!=" }.to_string(),
            "not equals '!='"
        );
        assert_eq!(Token::end().to_string(), "end of input");
    }
}
