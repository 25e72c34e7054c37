//! Recursive-descent grammar building [`Statement`] trees.
//!
//! ```text
//! program       := statement* end
//! statement     := function_def | assignment ';' | if_else ';'? | expr ';'
//! function_def  := 'fn' variable '(' params(variable)? ')' block
//! block         := '{' statement* '}'
//! assignment    := variable '=' expression
//! expression    := if_else | expr
//! if_else       := 'if' '(' expression ')' block ('else' (if_else | block))?
//! expr          := term (('+' | '-') expr)?
//! term          := factor (('*' | '/') term)?
//! factor        := '(' expression ')' | function_call | natural | variable
//! function_call := variable '(' params(expression)? ')'
//! ```
//!
//! Whitespace is allowed between all tokens. Binary operators group to the right.
use lparse::{
    alternative, choice, delimited, end_of_input, identifier, many, map, natural, optional, params,
    preceded, sequence, space, symbol, terminated, token, verify, Parsed, Parser,
};

use crate::{Program, Scalar, Statement};

/// Names that cannot be used as variable or function names.
pub const KEYWORDS: &[&str] = &["fn", "if", "else"];

fn keyword<'a>(word: &'static str) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    verify(token(identifier), move |name| *name == word)
}

fn binary(operator: &str, lhs: Statement, rhs: Statement) -> Statement {
    Statement::new(operator, vec![lhs, rhs])
}

/// Parses a variable or function name, which is an [`identifier`] that is not a keyword.
pub fn variable(input: &str) -> Parsed<'_, &str> {
    verify(token(identifier), |name| !KEYWORDS.contains(name)).parse(input)
}

/// Parses a call `name(args...)` with zero or more comma separated argument expressions.
pub fn function_call(input: &str) -> Parsed<'_, Statement> {
    map(
        sequence((
            variable,
            symbol("("),
            optional(params(expression)),
            symbol(")"),
        )),
        |(name, _, args, _)| {
            let operands = Some(Statement::leaf(name))
                .into_iter()
                .chain(args.into_iter().flatten())
                .collect();
            Statement::new("call", operands)
        },
    )
    .parse(input)
}

/// Parses a parenthesized expression, a call, a number or a variable.
pub fn factor(input: &str) -> Parsed<'_, Statement> {
    choice((
        delimited(symbol("("), expression, symbol(")")),
        function_call,
        map(natural, |value| Statement::Leaf(Scalar::Number(value))),
        map(variable, Statement::leaf),
    ))
    .parse(input)
}

/// Parses `operand`, optionally followed by `operator` and `rest`.
///
/// The operand is parsed once, whether or not an operator follows.
fn right_chain<'a>(
    input: &'a str,
    operand: fn(&str) -> Parsed<'_, Statement>,
    operator: impl Parser<'a, &'a str>,
    rest: fn(&str) -> Parsed<'_, Statement>,
) -> Parsed<'a, Statement> {
    map(
        sequence((operand, optional(sequence((operator, rest))))),
        |(lhs, tail)| match tail {
            Some((operator, rhs)) => binary(operator, lhs, rhs),
            None => lhs,
        },
    )
    .parse(input)
}

/// Parses a product or quotient of factors.
pub fn term(input: &str) -> Parsed<'_, Statement> {
    right_chain(input, factor, alternative(symbol("*"), symbol("/")), term)
}

/// Parses a sum or difference of terms.
pub fn expr(input: &str) -> Parsed<'_, Statement> {
    right_chain(input, term, alternative(symbol("+"), symbol("-")), expr)
}

/// Parses a block of statements enclosed in braces.
pub fn block(input: &str) -> Parsed<'_, Statement> {
    map(
        delimited(symbol("{"), many(statement), symbol("}")),
        |statements| Statement::new("block", statements),
    )
    .parse(input)
}

/// Parses a conditional with an optional `else` branch.
///
/// The `else` branch is either a block or another conditional.
pub fn if_else(input: &str) -> Parsed<'_, Statement> {
    map(
        sequence((
            keyword("if"),
            delimited(symbol("("), expression, symbol(")")),
            block,
            optional(preceded(keyword("else"), alternative(if_else, block))),
        )),
        |(_, condition, then, otherwise)| {
            let operands = [condition, then].into_iter().chain(otherwise).collect();
            Statement::new("if", operands)
        },
    )
    .parse(input)
}

/// Parses a conditional or an arithmetic expression.
pub fn expression(input: &str) -> Parsed<'_, Statement> {
    alternative(if_else, expr).parse(input)
}

/// Parses `name = value`.
pub fn assignment(input: &str) -> Parsed<'_, Statement> {
    map(
        sequence((variable, symbol("="), expression)),
        |(name, _, value)| Statement::new("=", vec![Statement::leaf(name), value]),
    )
    .parse(input)
}

/// Parses a function definition `fn name(params...) { body }`.
pub fn function_def(input: &str) -> Parsed<'_, Statement> {
    map(
        sequence((
            keyword("fn"),
            variable,
            delimited(symbol("("), optional(params(variable)), symbol(")")),
            block,
        )),
        |(_, name, names, body)| {
            let names = names
                .unwrap_or_default()
                .into_iter()
                .map(Statement::leaf)
                .collect();
            Statement::new(
                "fn",
                vec![Statement::leaf(name), Statement::new("params", names), body],
            )
        },
    )
    .parse(input)
}

/// Parses a single statement.
///
/// Assignments and expressions are terminated by `;`, which is optional after a conditional.
pub fn statement(input: &str) -> Parsed<'_, Statement> {
    choice((
        function_def,
        terminated(assignment, symbol(";")),
        terminated(if_else, optional(symbol(";"))),
        terminated(expr, symbol(";")),
    ))
    .parse(input)
}

/// Parses a sequence of statements extending to the end of the input.
pub fn program(input: &str) -> Parsed<'_, Program> {
    map(
        terminated(many(statement), preceded(space, end_of_input)),
        |statements| Program { statements },
    )
    .parse(input)
}
