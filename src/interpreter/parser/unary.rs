use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, TypeTag},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, token_to_type_tag, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`. It is right-associative and desugars to a
/// subtraction from zero, so `-x` becomes `0 - x` and no dedicated node is
/// needed.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::BinaryOp`] for negations, otherwise the primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 0.into(),
                                                             line:  *line, }),
                            op:    BinaryOperator::Sub,
                            right: Box::new(expr),
                            line:  *line, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, decimal, string, character and boolean literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - `eingabe(...)` input expressions
/// - `len(...)` length expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
///              | input
///              | length
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or_else(|| ParseError::UnexpectedEndOfInput {
                                      expected: "expression".to_string(),
                                      line: 0,
                                  })?;

    match peeked {
        (Token::Decimal(..) | Token::Integer(..) | Token::Bool(..) | Token::Str(..), _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (Token::Input, _) => parse_input(tokens),
        (Token::Len, _) => parse_length(tokens),
        (tok, line) if tok.is_type_keyword() => {
            Err(ParseError::TypeInExpression { name: tok.to_string(),
                                               line: *line, })
        },
        (tok, line) => Err(unexpected(tok, "expression", *line)),
    }
}

/// Parses a literal value.
///
/// Integer, decimal and boolean tokens map directly onto their literal. A
/// quoted string of exactly one character becomes a character literal, any
/// other quoted string (including the empty one) a string literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = match tokens.next() {
        Some((tok, line)) => (tok, *line),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "literal".to_string(),
                                                          line:     0, });
        },
    };

    let value = match tok {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Decimal(d) => LiteralValue::Decimal(*d),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Str(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => LiteralValue::Character(c),
                _ => LiteralValue::Str(s.clone()),
            }
        },
        other => return Err(unexpected(other, "literal", line)),
    };

    Ok(Expr::Literal { value, line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses an input expression.
///
/// Accepted forms:
/// ```text
///     eingabe()
///     eingabe("prompt")
///     eingabe("prompt", type)
///     eingabe(type)
/// ```
/// where `type` is one of `num`, `dec`, `str`, `chr`, `bool`.
///
/// # Returns
/// An [`Expr::Input`] node.
///
/// # Errors
/// Returns a `ParseError` if something other than a type keyword follows the
/// comma, or if the closing `)` is missing.
fn parse_input<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Input)?;
    expect(tokens, &Token::LParen)?;

    let mut prompt = None;
    let mut ty = None;

    if let Some((Token::Str(text), _)) = tokens.peek() {
        prompt = Some(text.clone());
        tokens.next();

        if let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            ty = Some(parse_type_tag(tokens)?);
        }
    } else if let Some((tok, _)) = tokens.peek()
              && tok.is_type_keyword()
    {
        ty = Some(parse_type_tag(tokens)?);
    }

    expect(tokens, &Token::RParen)?;
    Ok(Expr::Input { prompt, ty, line })
}

/// Consumes a type keyword and returns its tag.
fn parse_type_tag<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeTag>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) => token_to_type_tag(tok).ok_or_else(|| unexpected(tok, "type", *line)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "type".to_string(),
                                                       line:     0, }),
    }
}

/// Parses `len(expression)`.
///
/// Exactly one argument is accepted; a second argument is reported as a
/// missing `)`.
fn parse_length<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Len)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(Expr::Length { expr: Box::new(expr),
                      line })
}

/// Parses an identifier, which may be a variable or a function call.
///
/// If the identifier is immediately followed by `(`, it is parsed as a
/// function call with a comma-separated argument list. Otherwise it is a
/// variable reference.
///
/// # Returns
/// - [`Expr::FunctionCall`] for `name(args...)`,
/// - [`Expr::Variable`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => return Err(unexpected(tok, "identifier", *line)),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string(),
                                                          line:     0, });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
