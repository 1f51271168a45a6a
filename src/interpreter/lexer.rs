use std::fmt;

use logos::{Lexer, Logos, Skip};

/// Maximum number of characters captured in a token's text. Anything past
/// this is dropped from the captured text (the characters are still consumed).
pub const TOKEN_TEXT_MAX: usize = 99;

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The input is exhausted. Produced again on every later request.
    EndOfInput,
    /// `+`
    Add,
    /// `*`
    Mul,
    /// `-`
    Sub,
    /// `/`
    Div,
    /// A numeric literal such as `42` or `3.25`.
    NumberLiteral,
    /// A variable name such as `sum` or `x_1`.
    Identifier,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `:=`
    Assign,
    /// `READ`, in any letter case.
    ReadKeyword,
    /// `WRITE`, in any letter case.
    WriteKeyword,
    /// An unrecognized character or a malformed numeric literal.
    Error,
}

impl TokenKind {
    /// Returns the name used for this kind in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfInput => "end of input",
            Self::Add => "'+'",
            Self::Mul => "'*'",
            Self::Sub => "'-'",
            Self::Div => "'/'",
            Self::NumberLiteral => "number",
            Self::Identifier => "identifier",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Assign => "':='",
            Self::ReadKeyword => "READ",
            Self::WriteKeyword => "WRITE",
            Self::Error => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit with its captured source text and the line it
/// started on. Tokens are never modified after the tokenizer produces them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text of the token, at most [`TOKEN_TEXT_MAX`] characters.
    pub text: String,
    /// The 1-based source line on which the token started.
    pub line: usize,
    /// The value of a [`TokenKind::NumberLiteral`], parsed from the whole
    /// literal rather than the truncated `text`.
    pub value: Option<f64>,
}

impl Token {
    fn new(kind: TokenKind, slice: &str, line: usize) -> Self {
        let value = match kind {
            TokenKind::NumberLiteral => slice.parse().ok(),
            _ => None,
        };

        Self { kind,
               text: slice.chars().take(TOKEN_TEXT_MAX).collect(),
               line,
               value }
    }

    /// Describes the token for error messages, e.g. `identifier 'sum'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier | TokenKind::NumberLiteral | TokenKind::Error => {
                format!("{} '{}'", self.kind, self.text)
            },
            _ => self.kind.name().to_string(),
        }
    }
}

/// Line tracking carried through the scanner.
///
/// Starts at line 1 and is bumped for every newline consumed, including the
/// ones inside block comments. It is never reset.
pub struct LineCounter {
    /// The line the scanner is currently on.
    pub line: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Raw lexemes recognized by the scanner.
///
/// Whitespace, newlines and block comments are skipped here; the remaining
/// lexemes map one-to-one onto [`TokenKind`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LineCounter)]
#[logos(skip r"[ \t\r\f]+")]
enum Lexeme {
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":=")]
    ColonEquals,
    /// Digits with at most one fractional part, such as `7` or `7.25`.
    #[regex(r"[0-9]+", fraction)]
    Number,
    #[token("read", ignore(ascii_case))]
    Read,
    #[token("write", ignore(ascii_case))]
    Write,
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Identifier,
    #[token("\n", newline)]
    NewLine,
    #[token("/*", block_comment)]
    BlockComment,
}

fn newline(lex: &mut Lexer<Lexeme>) -> Skip {
    lex.extras.line += 1;
    Skip
}

/// Extends an integer part over its fraction.
///
/// A `.` is only taken when digits follow it, so `1.x` leaves `.x` in place.
/// A literal that runs into a second decimal point, such as `1.2.`, is
/// consumed through that point and rejected.
fn fraction(lex: &mut Lexer<Lexeme>) -> bool {
    let rest = lex.remainder().as_bytes();
    if rest.first() != Some(&b'.') {
        return true;
    }

    let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    if rest.get(digits + 1) == Some(&b'.') {
        lex.bump(digits + 2);
        return false;
    }
    if digits > 0 {
        lex.bump(digits + 1);
    }
    true
}

/// Skips a comment through its closing `*/`. An unterminated comment runs to
/// the end of the input.
fn block_comment(lex: &mut Lexer<Lexeme>) -> Skip {
    let remainder = lex.remainder();
    let length = remainder.find("*/").map_or(remainder.len(), |end| end + 2);
    lex.extras.line += remainder[..length].matches('\n').count();
    lex.bump(length);
    Skip
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Plus => Self::Add,
            Lexeme::Star => Self::Mul,
            Lexeme::Minus => Self::Sub,
            Lexeme::Slash => Self::Div,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            Lexeme::ColonEquals => Self::Assign,
            Lexeme::Number => Self::NumberLiteral,
            Lexeme::Read => Self::ReadKeyword,
            Lexeme::Write => Self::WriteKeyword,
            Lexeme::Identifier => Self::Identifier,
            Lexeme::NewLine | Lexeme::BlockComment => {
                unreachable!("newlines and comments are skipped by their callbacks")
            },
        }
    }
}

/// Turns program text into [`Token`]s on demand.
///
/// The tokenizer never reads past the token it returns: the character that
/// begins the next token is left in place for the following call.
///
/// # Example
/// ```
/// use calc_interp::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("sum := 2 * x");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = tokenizer.next_token();
///                                 (token.kind != TokenKind::EndOfInput).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::NumberLiteral,
///             TokenKind::Mul,
///             TokenKind::Identifier]);
/// ```
pub struct Tokenizer<'src> {
    lexer: Lexer<'src, Lexeme>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Lexeme::lexer_with_extras(source, LineCounter::default()) }
    }

    /// Returns the line the tokenizer has reached.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every call returns
    /// [`TokenKind::EndOfInput`]. Characters that start no token come back as
    /// a one-character [`TokenKind::Error`] token, and a literal with a second
    /// decimal point comes back whole as an error token.
    pub fn next_token(&mut self) -> Token {
        match self.lexer.next() {
            Some(Ok(lexeme)) => Token::new(lexeme.into(), self.lexer.slice(), self.line()),
            Some(Err(())) => Token::new(TokenKind::Error, self.lexer.slice(), self.line()),
            None => Token::new(TokenKind::EndOfInput, "", self.line()),
        }
    }
}
