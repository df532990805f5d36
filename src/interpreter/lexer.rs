use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Classification is longest/first match: keywords win ties against
/// identifiers of the same length, and a signed integer literal wins against
/// a lone `-` (so `n-1` lexes as `n` followed by the literal `-1`, while
/// `n - 1` is a subtraction).
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `Defun`
    #[token("Defun")]
    Defun,
    /// `name`
    #[token("name")]
    Name,
    /// `arguments`
    #[token("arguments")]
    Arguments,
    /// `Lambd`
    #[token("Lambd")]
    Lambd,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens: `True` or `False`.
    #[token("True", parse_bool)]
    #[token("False", parse_bool)]
    Bool(bool),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `%`
    #[token("%")]
    Percent,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,

    /// Line endings; counted for positions but never emitted as tokens.
    #[token("\n", |lex| {
        lex.extras.line       += 1;
        lex.extras.line_start  = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the most recent
/// line start, so each token can report a line/column position.
pub struct LexerExtras {
    /// The current 1-based line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the character just after the most recent newline.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A source position attached to every emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    /// The 1-based line number.
    pub line:   usize,
    /// Offset from the most recent line start.
    pub column: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`True` or
/// `False`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"True"`.
/// - `Some(false)` if the slice is `"False"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}

/// Tokenizes a complete source string.
///
/// Produces the ordered sequence of tokens paired with their source
/// positions, in a single pass. Whitespace, newlines and `#` comments are
/// discarded; newlines advance the line counter and reset the column
/// origin.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token sequence, or a [`ParseError::UnexpectedCharacter`] carrying the
/// offending slice and its 1-based line number.
///
/// # Errors
/// Returns an error when the input contains a character no token rule
/// matches, or an integer literal that does not fit in 64 bits.
///
/// # Example
/// ```
/// use lambra::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("factorial(5)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(token, _)| token.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("factorial".to_string()),
///                 Token::LParen,
///                 Token::Integer(5),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Pos)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let pos = Pos { line:   lexer.extras.line,
                        column: lexer.span().start - lexer.extras.line_start, };
        match token {
            Ok(tok) => tokens.push((tok, pos)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                             line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
