use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are matched as whole words: logos always prefers the longest
/// match, so `iffy` is one identifier and never `if` followed by `fy`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Decimal literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_decimal)]
    Decimal(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens in either quote style, such as `"hi"` or `'hi'`.
    /// The stored value has its quotes removed and escapes resolved.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    #[regex(r"'([^'\\\n]|\\.)*'", parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `drucken`
    #[token("drucken")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `elf`
    #[token("elf")]
    Elf,
    /// `el` or `else`
    #[token("el")]
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `func`
    #[token("func")]
    Func,
    /// `return`
    #[token("return")]
    Return,
    /// `eingabe`
    #[token("eingabe")]
    Input,
    /// `len`
    #[token("len")]
    Len,
    /// `num`
    #[token("num")]
    TypeNum,
    /// `dec`
    #[token("dec")]
    TypeDec,
    /// `str`
    #[token("str")]
    TypeStr,
    /// `chr`
    #[token("chr")]
    TypeChr,
    /// `bool`
    #[token("bool")]
    TypeBool,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
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
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks. Never emitted; only counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Terminates every token sequence produced by [`tokenize`].
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into an ordered token sequence.
///
/// Each token is paired with the line it starts on. Whitespace, newlines and
/// comments are dropped, and the sequence always ends with
/// [`Token::EndOfInput`].
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] naming the first character no token
///   pattern accepts, together with its byte offset.
/// - [`ParseError::IntegerOutOfRange`] for an integer literal beyond `i64`.
///
/// # Example
/// ```
/// use lip::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2.5").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Decimal(2.5),
///                 Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else if !lexer.slice().is_empty() && lexer.slice().bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::IntegerOutOfRange { literal: lexer.slice().to_string(),
                                                       line:    lexer.extras.line, });
        } else {
            let offset = lexer.span().start;
            let character = source[offset..].chars().next().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter { character,
                                                         offset,
                                                         line: lexer.extras.line });
        }
    }

    tokens.push((Token::EndOfInput, lexer.extras.line));
    Ok(tokens)
}

impl Token {
    /// Returns `true` for the five type keywords `num`, `dec`, `str`, `chr`
    /// and `bool`.
    #[must_use]
    pub const fn is_type_keyword(&self) -> bool {
        matches!(self,
                 Self::TypeNum | Self::TypeDec | Self::TypeStr | Self::TypeChr | Self::TypeBool)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal(d) => write!(f, "{d:?}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Print => write!(f, "drucken"),
            Self::If => write!(f, "if"),
            Self::Elf => write!(f, "elf"),
            Self::Else => write!(f, "el"),
            Self::For => write!(f, "for"),
            Self::Func => write!(f, "func"),
            Self::Return => write!(f, "return"),
            Self::Input => write!(f, "eingabe"),
            Self::Len => write!(f, "len"),
            Self::TypeNum => write!(f, "num"),
            Self::TypeDec => write!(f, "dec"),
            Self::TypeStr => write!(f, "str"),
            Self::TypeChr => write!(f, "chr"),
            Self::TypeBool => write!(f, "bool"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Equals => write!(f, "="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Parses a decimal literal from the current token slice.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`; [`tokenize`] reports
///   it as [`ParseError::IntegerOutOfRange`].
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes of a string literal and resolves escapes.
///
/// Supported escapes are `\n`, `\t`, `\\` and an escaped quote of either
/// style. Any other escaped character is kept verbatim, backslash included.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(q @ ('"' | '\'' | '\\')) => out.push(q),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }
    out
}
