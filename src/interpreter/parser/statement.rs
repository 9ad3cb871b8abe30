use std::iter::Peekable;

use crate::{
    ast::{ForLoop, FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_braced_block,
            core::{ParseResult, parse_expression, parse_if},
            utils::{expect, parse_comma_separated, parse_identifier, token_to_type_tag},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a function definition (`func name(a, b) { ... }`).
/// - a `return` statement.
/// - a `drucken(...)` statement.
/// - an `if` statement with its `elf`/`el` chain.
/// - a `for` loop.
/// - a typed declaration, with or without initializer.
/// - a plain assignment.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_return(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_print(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_if_statement(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_for_loop(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_typed_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;
    let line = expr.line_number();

    Ok(Statement::Expression { expr, line })
}

/// Parses a function definition of the form
/// `func <name>(param1, param2, ...) { body }`.
///
/// If the next token is not `func`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if a definition is parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - the parameter list is malformed,
/// - the body block fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Func, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = parse_identifier(tokens)?;
        expect(tokens, &Token::LParen)?;
        let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
        let body = parse_braced_block(tokens)?;

        return Ok(Some(Statement::Function(FunctionDef { name,
                                                         params,
                                                         body,
                                                         line })));
    }
    Ok(None)
}

/// Parses `return <expression>`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Return, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::Return { value, line }));
    }
    Ok(None)
}

/// Parses `drucken(<expression>)`.
///
/// # Errors
/// Returns a `ParseError` if either parenthesis is missing or the expression
/// is malformed.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Print, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        expect(tokens, &Token::LParen)?;
        let expr = parse_expression(tokens)?;
        expect(tokens, &Token::RParen)?;

        return Ok(Some(Statement::Print { expr, line }));
    }
    Ok(None)
}

/// Parses an `if` statement; the chain itself is handled by [`parse_if`].
fn parse_if_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::If, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        return Ok(Some(Statement::If(parse_if(tokens, line)?)));
    }
    Ok(None)
}

/// Parses a counted loop of the form
/// `for (<init>; <condition>; <update>) { body }`.
///
/// `init` and `update` are full statements (usually assignments), the
/// condition is an expression.
///
/// # Errors
/// Returns a `ParseError` if the header is missing a parenthesis or one of
/// its two `;` separators, or if any part fails to parse.
fn parse_for_loop<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::For, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        expect(tokens, &Token::LParen)?;
        let init = parse_statement(tokens)?;
        expect(tokens, &Token::Semicolon)?;
        let condition = parse_expression(tokens)?;
        expect(tokens, &Token::Semicolon)?;
        let update = parse_statement(tokens)?;
        expect(tokens, &Token::RParen)?;
        let body = parse_braced_block(tokens)?;

        return Ok(Some(Statement::For(ForLoop { init: Box::new(init),
                                                condition,
                                                update: Box::new(update),
                                                body,
                                                line })));
    }
    Ok(None)
}

/// Parses a typed declaration.
///
/// Supported forms:
///
/// - `<type> <identifier>` declares the variable with the type's zero value,
/// - `<type> <identifier> = <expression>` declares and assigns it.
///
/// If the next token is not a type keyword, this function returns `Ok(None)`
/// and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if no identifier follows the type, or if the
/// initializer fails to parse.
fn parse_typed_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, line)) = tokens.peek()
       && let Some(ty) = token_to_type_tag(token)
    {
        let line = *line;
        tokens.next();

        let name = parse_identifier(tokens)?;

        if let Some((Token::Equals, _)) = tokens.peek() {
            tokens.next();
            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::TypedAssignment { name,
                                                        ty,
                                                        value,
                                                        line }));
        }

        return Ok(Some(Statement::Declaration { name, ty, line }));
    }
    Ok(None)
}

/// Parses an assignment statement, `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` for assignments,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, line)) = lookahead.peek() {
            let line = *line;
            let name = parse_identifier(tokens)?;
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}
