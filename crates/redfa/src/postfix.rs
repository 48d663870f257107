//! Infix to postfix (reverse polish) rewriting of regular expressions.
//!
//! Classic operator-precedence rewrite with a stack of pending
//! operators. Precedence, highest to lowest: `*`/`+`, then `.`
//! (concatenation), then `|`. Parentheses carry no precedence and are
//! handled structurally. Juxtaposition (`ab`, `(a|b)c`) is accepted by
//! inserting the explicit concatenation operator before rewriting.

use crate::errors::Error;

/// One token of a postfix expression. Parentheses never survive
/// rewriting, so they have no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An alphanumeric operand.
    Literal(char),
    /// Binary concatenation (`.`).
    Concat,
    /// Binary alternation (`|`).
    Alternate,
    /// Unary postfix Kleene star (`*`).
    Star,
    /// Unary postfix one-or-more (`+`).
    Plus,
}

impl Token {
    /// The character this token prints as.
    pub fn glyph(self) -> char {
        match self {
            Self::Literal(c) => c,
            Self::Concat => '.',
            Self::Alternate => '|',
            Self::Star => '*',
            Self::Plus => '+',
        }
    }
}

fn priority(op: char) -> i8 {
    match op {
        '*' | '+' => 3,
        '.' => 2,
        '|' => 1,
        _ => -1,
    }
}

fn operator_token(op: char) -> Token {
    match op {
        '.' => Token::Concat,
        '|' => Token::Alternate,
        '*' => Token::Star,
        '+' => Token::Plus,
        // The stack only ever holds the four operators and '(' which
        // both callers filter out first.
        _ => unreachable!("non-operator on the operator stack"),
    }
}

/// Pop-and-emit every stacked operator with priority at least that of
/// `incoming`, then push `incoming`.
fn shunt(incoming: char, stack: &mut Vec<char>, output: &mut Vec<Token>) {
    while let Some(&top) = stack.last() {
        if priority(top) >= priority(incoming) {
            output.push(operator_token(top));
            stack.pop();
        } else {
            break;
        }
    }
    stack.push(incoming);
}

/// True if a `.` must be inserted between the characters `prev` and `next`.
fn implies_concat(prev: char, next: char) -> bool {
    let prev_ends_operand = prev.is_ascii_alphanumeric() || matches!(prev, ')' | '*' | '+');
    let next_starts_operand = next.is_ascii_alphanumeric() || next == '(';
    prev_ends_operand && next_starts_operand
}

/// Rewrite an infix expression into postfix token order.
///
/// Fails on unmatched parentheses (either direction) and on any
/// character outside literals, operators, and parentheses.
pub fn to_postfix(expr: &str) -> Result<Vec<Token>, Error> {
    let mut output: Vec<Token> = Vec::new();
    let mut stack: Vec<char> = Vec::new();
    let mut prev: Option<char> = None;

    for c in expr.chars() {
        if prev.is_some_and(|p| implies_concat(p, c)) {
            shunt('.', &mut stack, &mut output);
        }

        match c {
            c if c.is_ascii_alphanumeric() => output.push(Token::Literal(c)),
            '(' => stack.push('('),
            ')' => loop {
                match stack.pop() {
                    None => return Err(Error::UnbalancedParens),
                    Some('(') => break,
                    Some(op) => output.push(operator_token(op)),
                }
            },
            '.' | '|' | '*' | '+' => shunt(c, &mut stack, &mut output),
            other => return Err(Error::UnexpectedChar(other)),
        }
        prev = Some(c);
    }

    while let Some(op) = stack.pop() {
        if op == '(' {
            return Err(Error::UnbalancedParens);
        }
        output.push(operator_token(op));
    }

    Ok(output)
}
