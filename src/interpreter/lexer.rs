use logos::Logos;
use tracing::{debug, trace};

use crate::token::{Function, Operator, Token};

/// Raw lexemes recognized by the scanner, before classification into
/// [`Token`]s.
///
/// Whitespace is removed before scanning, so no variant covers it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"[0-9]+")]
    Number,
    /// Identifier tokens; variable or function names such as `x1` or `sqrt`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    fn into_token(self, slice: &str) -> Token {
        match self {
            Self::Number => Token::number(slice),
            Self::Identifier => match Function::from_name(slice) {
                Some(function) => Token::function(function),
                None => Token::variable(slice),
            },
            Self::Plus => Token::operator(Operator::Add),
            Self::Minus => Token::operator(Operator::Sub),
            Self::Star => Token::operator(Operator::Mul),
            Self::Slash => Token::operator(Operator::Div),
            Self::LParen => Token::left_paren(),
            Self::RParen => Token::right_paren(),
        }
    }
}

/// Splits an infix expression into tokens.
///
/// All whitespace is removed first, so `"1 0 0"` is the single number `100`.
/// The remaining text is scanned left to right with the longest match winning
/// (`3.14` is one number, not `3`, `.`, `14`). Characters that belong to no
/// lexical class are dropped without error.
///
/// # Example
/// ```
/// use postfixer::{
///     interpreter::lexer::tokenize,
///     token::{Function, Operator, TokenKind},
/// };
///
/// let kinds: Vec<_> = tokenize("sqrt(x) * 2").iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            [TokenKind::Function(Function::Sqrt),
///             TokenKind::LeftParen,
///             TokenKind::Variable,
///             TokenKind::RightParen,
///             TokenKind::Operator(Operator::Mul),
///             TokenKind::Number]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let source: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source.as_str());

    while let Some(lexeme) = lexer.next() {
        if let Ok(lexeme) = lexeme {
            tokens.push(lexeme.into_token(lexer.slice()));
        } else {
            trace!(dropped = lexer.slice(), "ignoring unrecognized input");
        }
    }

    debug!(expression, count = tokens.len(), "tokenized expression");
    tokens
}
