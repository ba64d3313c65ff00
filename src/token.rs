use std::fmt;

/// Names of the built-in unary functions, in the order of [`Function`]
/// variants.
pub const FUNCTION_NAMES: &[&str] = &["sin", "cos", "sqrt"];

/// Binary arithmetic operators.
///
/// The set is closed: the lexer only ever produces these four, and every
/// dispatch over them is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl Operator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use postfixer::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Looks up the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine of an angle in radians.
    Sin,
    /// Cosine of an angle in radians.
    Cos,
    /// Square root of a nonnegative number.
    Sqrt,
}

impl Function {
    /// The name the function is called by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sqrt => "sqrt",
        }
    }

    /// Looks up a function by its exact, case-sensitive name.
    ///
    /// # Example
    /// ```
    /// use postfixer::token::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("SIN"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of lexeme a [`Token`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal literal such as `42` or `3.14`.
    Number,
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A call to one of the built-in functions.
    Function(Function),
    /// Any other identifier; its value comes from a variable provider.
    Variable,
}

/// A classified lexeme.
///
/// Tokens are immutable once built. The operator, function and parenthesis
/// constructors derive the text from the kind, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// A numeric literal. The text is parsed during evaluation.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self { kind: TokenKind::Number,
               text: text.into(), }
    }

    /// A variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self { kind: TokenKind::Variable,
               text: name.into(), }
    }

    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self { kind: TokenKind::Operator(op),
               text: op.symbol().to_string(), }
    }

    #[must_use]
    pub fn function(function: Function) -> Self {
        Self { kind: TokenKind::Function(function),
               text: function.name().to_string(), }
    }

    #[must_use]
    pub fn left_paren() -> Self {
        Self { kind: TokenKind::LeftParen,
               text: "(".to_string(), }
    }

    #[must_use]
    pub fn right_paren() -> Self {
        Self { kind: TokenKind::RightParen,
               text: ")".to_string(), }
    }

    /// Classifies a single lexeme.
    ///
    /// Numbers are `\d+` or `\d+\.\d+`; identifiers are
    /// `[A-Za-z][A-Za-z0-9]*` and become a function only on an exact match
    /// against [`FUNCTION_NAMES`]. Anything else yields `None`.
    ///
    /// # Example
    /// ```
    /// use postfixer::token::{Function, Token, TokenKind};
    ///
    /// assert_eq!(Token::classify("cos").unwrap().kind(),
    ///            TokenKind::Function(Function::Cos));
    /// assert_eq!(Token::classify("Cos").unwrap().kind(), TokenKind::Variable);
    /// assert!(Token::classify("1.").is_none());
    /// ```
    #[must_use]
    pub fn classify(lexeme: &str) -> Option<Self> {
        if is_number(lexeme) {
            return Some(Self::number(lexeme));
        }
        if is_identifier(lexeme) {
            return Some(Function::from_name(lexeme).map_or_else(|| Self::variable(lexeme),
                                                                Self::function));
        }
        match lexeme {
            "(" => Some(Self::left_paren()),
            ")" => Some(Self::right_paren()),
            _ => Operator::from_symbol(lexeme).map(Self::operator),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Joins the texts of `tokens` with single spaces.
///
/// # Example
/// ```
/// use postfixer::token::{Operator, Token, render};
///
/// let postfix = [Token::number("2"), Token::number("3"), Token::operator(Operator::Add)];
/// assert_eq!(render(&postfix), "2 3 +");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(Token::text)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Returns `true` if `text` is a valid variable name: an identifier that is
/// not reserved for a built-in function.
#[must_use]
pub fn is_variable_name(text: &str) -> bool {
    is_identifier(text) && Function::from_name(text).is_none()
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_number(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}
