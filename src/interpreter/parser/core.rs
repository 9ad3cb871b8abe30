use std::iter::Peekable;

use crate::{
    ast::{ElseBranch, Expr, IfStatement, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_relational,
            block::parse_braced_block,
            statement::parse_statement,
            utils::skip_separators,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into its ordered top-level statements.
///
/// Statements need no terminator; `;` separators between them are skipped.
/// Parsing stops at [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first `ParseError` encountered. No partial program is
/// returned.
///
/// # Example
/// ```
/// use lip::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 1; drucken(x)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut iter);
        match iter.peek() {
            None | Some((Token::EndOfInput, _)) => break,
            Some(_) => statements.push(parse_statement(&mut iter)?),
        }
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_relational(tokens)
}

/// Parses an `if` statement with optional `elf` and `el` clauses.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     elf <condition> { ... }
///     el { ... }
/// ```
/// Every `elf` clause becomes a nested [`IfStatement`] in the `else_branch`
/// of its predecessor, so a trailing `el` block ends up attached to the last
/// conditional of the chain. `el if` is accepted as a spelling of `elf`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` (or `elf`) keyword.
/// - `line`: Line number of that keyword.
///
/// # Returns
/// The head [`IfStatement`] of the chain.
///
/// # Errors
/// - `UnexpectedToken` if a clause is not followed by a `{` block.
/// - Propagates any errors from sub-expression and block parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    let body = parse_braced_block(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Elf, elf_line)) => {
            tokens.next();
            ElseBranch::ElseIf(Box::new(parse_if(tokens, *elf_line)?))
        },

        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, if_line)) => {
                    tokens.next();
                    ElseBranch::ElseIf(Box::new(parse_if(tokens, *if_line)?))
                },
                _ => ElseBranch::Block(parse_braced_block(tokens)?),
            }
        },

        _ => ElseBranch::None,
    };

    Ok(IfStatement { condition,
                     body,
                     else_branch,
                     line })
}
