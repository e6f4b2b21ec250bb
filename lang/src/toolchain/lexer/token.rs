use std::fmt::Display;

/// Represents a single lexical token of the Monkey language.
///
/// Blank space is never represented by a [Token], but every other character on a line is
/// covered by one, as unrecognized characters become [TokenKind::Unknown] tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of Token.
    pub kind: TokenKind,

    // The substring of the line representing the Token.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str) -> Token<'a> {
        Token { kind, literal }
    }

    pub fn end() -> Token<'a> {
        Token { kind: TokenKind::EndOfInput, literal: "" }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// An enumeration of all possible Token types in Monkey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Delimiter {
        kind: DelimiterKind,
    },

    /// Marks the end of the line being scanned. Every token sequence ends with exactly one of
    /// these, and a finished lexer keeps returning it.
    EndOfInput,

    /// A name starting with an ASCII letter or underscore, followed by 0 or more ASCII
    /// alphanumeric characters or underscores.
    Identifier,

    /// A literal value in the code.
    Literal {
        kind: LiteralKind,
    },

    Operator {
        kind: OperatorKind,
    },

    Reserved {
        kind: ReservedKind,
    },

    /// A single character the lexer didn't recognize as valid Monkey input.
    Unknown,
}

assert_impl_all!(Token<'static>: Copy, Send, Sync);
const_assert!(std::mem::size_of::<TokenKind>() <= 2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelimiterKind {
    /// `}` single-character delimiter.
    BraceClose,

    /// `{` single-character delimiter.
    BraceOpen,

    /// `]` single-character delimiter.
    BracketClose,

    /// `[` single-character delimiter.
    BracketOpen,

    /// `:` single-character delimiter.
    Colon,

    /// `,` single-character delimiter.
    Comma,

    /// `)` single-character delimiter.
    ParenClose,

    /// `(` single-character delimiter.
    ParenOpen,

    /// `;` single-character delimiter.
    Semicolon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// A sequence of decimal digits, `42` for example.
    Integer,

    /// A double-quoted character sequence closed on the same line. The token literal keeps both
    /// quotes.
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    /// The `=` operator.
    Assign,

    /// The `*` operator.
    Asterisk,

    /// The `!` operator.
    Bang,

    /// The `==` operator.
    Equal,

    /// The `>` operator.
    GreaterThan,

    /// The `<` operator.
    LessThan,

    /// The `-` operator.
    Minus,

    /// The `!=` operator.
    NotEqual,

    /// The `+` operator.
    Plus,

    /// The `/` operator.
    Slash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservedKind {
    Else,
    False,

    /// `fn` introduces a function literal.
    Function,

    If,
    Let,
    Return,
    True,
}

impl ReservedKind {
    /// Matches `word` against the reserved words, returning `None` for plain identifiers.
    pub fn lookup(word: &str) -> Option<ReservedKind> {
        match word {
            "else" => Some(ReservedKind::Else),
            "false" => Some(ReservedKind::False),
            "fn" => Some(ReservedKind::Function),
            "if" => Some(ReservedKind::If),
            "let" => Some(ReservedKind::Let),
            "return" => Some(ReservedKind::Return),
            "true" => Some(ReservedKind::True),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Delimiter { kind: DelimiterKind::BraceClose } => "closing brace '}'",
            TokenKind::Delimiter { kind: DelimiterKind::BraceOpen } => "opening brace '{'",
            TokenKind::Delimiter { kind: DelimiterKind::BracketClose } => "closing bracket ']'",
            TokenKind::Delimiter { kind: DelimiterKind::BracketOpen } => "opening bracket '['",
            TokenKind::Delimiter { kind: DelimiterKind::Colon } => "colon ':'",
            TokenKind::Delimiter { kind: DelimiterKind::Comma } => "comma ','",
            TokenKind::Delimiter { kind: DelimiterKind::ParenClose } => "closing parenthesis ')'",
            TokenKind::Delimiter { kind: DelimiterKind::ParenOpen } => "opening parenthesis '('",
            TokenKind::Delimiter { kind: DelimiterKind::Semicolon } => "semicolon ';'",

            TokenKind::EndOfInput => "end of input",

            TokenKind::Identifier => "identifier",

            TokenKind::Literal { kind: LiteralKind::Integer } => "integer literal",
            TokenKind::Literal { kind: LiteralKind::String } => "string literal",

            TokenKind::Operator { kind: OperatorKind::Assign } => "equals '='",
            TokenKind::Operator { kind: OperatorKind::Asterisk } => "asterisk '*'",
            TokenKind::Operator { kind: OperatorKind::Bang } => "bang '!'",
            TokenKind::Operator { kind: OperatorKind::Equal } => "double equals '=='",
            TokenKind::Operator { kind: OperatorKind::GreaterThan } => "greater than '>'",
            TokenKind::Operator { kind: OperatorKind::LessThan } => "less than '<'",
            TokenKind::Operator { kind: OperatorKind::Minus } => "minus '-'",
            TokenKind::Operator { kind: OperatorKind::NotEqual } => "not equals '!='",
            TokenKind::Operator { kind: OperatorKind::Plus } => "plus '+'",
            TokenKind::Operator { kind: OperatorKind::Slash } => "slash '/'",

            TokenKind::Reserved { kind: ReservedKind::Else } => "reserved word 'else'",
            TokenKind::Reserved { kind: ReservedKind::False } => "reserved word 'false'",
            TokenKind::Reserved { kind: ReservedKind::Function } => "reserved word 'fn'",
            TokenKind::Reserved { kind: ReservedKind::If } => "reserved word 'if'",
            TokenKind::Reserved { kind: ReservedKind::Let } => "reserved word 'let'",
            TokenKind::Reserved { kind: ReservedKind::Return } => "reserved word 'return'",
            TokenKind::Reserved { kind: ReservedKind::True } => "reserved word 'true'",

            TokenKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Literal { kind: _ } | TokenKind::Unknown => {
                f.write_fmt(format_args!("{} '{}'", self.kind, self.literal))
            }

            // Many tokens are text-invariant, so repeating the token text is redundant.
            TokenKind::Delimiter { kind: _ }
            | TokenKind::EndOfInput
            | TokenKind::Operator { kind: _ }
            | TokenKind::Reserved { kind: _ } => f.write_fmt(format_args!("{}", self.kind)),
        }
    }
}
