use std::iter::Peekable;

use crate::{
    ast::TypeTag,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Describes a token the way error messages quote it.
#[must_use]
pub fn describe(token: &Token) -> String {
    match token {
        Token::EndOfInput => "end of input".to_string(),
        Token::Str(_) | Token::Integer(_) | Token::Decimal(_) => format!("literal {token}"),
        _ => format!("'{token}'"),
    }
}

/// Builds the error for finding `found` where `expected` was required.
///
/// Reaching [`Token::EndOfInput`] yields `UnexpectedEndOfInput`, any other
/// token `UnexpectedToken`.
pub(in crate::interpreter::parser) fn unexpected(found: &Token,
                                                 expected: &str,
                                                 line: usize)
                                                 -> ParseError {
    if *found == Token::EndOfInput {
        ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                           line }
    } else {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found: describe(found),
                                      line }
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming the expected token if a different token or
/// the end of input is found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(unexpected(tok, &format!("'{expected}'"), *line)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'"),
                                                       line:     0, }),
    }
}

/// Skips any `;` separators between statements.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(unexpected(tok, &format!("',' or '{closing}'"), *line));
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: format!("'{closing}'"),
                                                              line:     0, });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are separate tokens,
/// so they can never be returned here.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(unexpected(tok, "identifier", *line)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string(),
                                                       line:     0, }),
    }
}

/// Maps a type keyword token to its [`TypeTag`].
///
/// Returns `None` for every other token.
///
/// # Example
/// ```
/// use lip::{
///     ast::TypeTag,
///     interpreter::{lexer::Token, parser::utils::token_to_type_tag},
/// };
///
/// assert_eq!(token_to_type_tag(&Token::TypeDec), Some(TypeTag::Dec));
/// assert_eq!(token_to_type_tag(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_to_type_tag(token: &Token) -> Option<TypeTag> {
    match token {
        Token::TypeNum => Some(TypeTag::Num),
        Token::TypeDec => Some(TypeTag::Dec),
        Token::TypeStr => Some(TypeTag::Str),
        Token::TypeChr => Some(TypeTag::Chr),
        Token::TypeBool => Some(TypeTag::Bool),
        _ => None,
    }
}
