use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_separators},
        },
    },
};

/// Parses a block body delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// `;`. Parsing continues until a closing `}` token is encountered.
/// Leading and trailing separators inside the block are ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` naming the missing `}` if the input ends
/// inside the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, eof_line)) => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                              line:     *eof_line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                              line });
            },
            Some(_) => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}

/// Parses `{` followed by a block body.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `{`, or if the block body
/// fails to parse.
pub fn parse_braced_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace)?;
    parse_block(tokens, line)
}
