//! Error codes for the construction pipeline.
//!
//! Word rejection is not an error; see [`Verdict`](crate::Verdict).

use std::fmt::Display;

/// Errors produced while compiling an expression or gating an automaton.
///
/// All variants except the last are malformed-expression failures raised by
/// the postfix rewriter or the NFA builder; construction aborts as soon
/// as one occurs. [`InvalidAutomaton`](Error::InvalidAutomaton) is the
/// refusal to simulate with an automaton that failed the
/// well-formedness check.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A closing parenthesis without a matching `(`, or an `(` that is
    /// never closed.
    UnbalancedParens,

    /// A character that is neither an alphanumeric literal, an
    /// operator, nor a parenthesis.
    UnexpectedChar(char),

    /// The expression produced no automaton at all.
    EmptyExpression,

    /// An operator was missing one or both of its operands.
    DanglingOperator(char),

    /// Two operands with no operator joining them; more than one
    /// automaton was left once every token was consumed.
    MissingOperator,

    /// The automaton failed the structural well-formedness check.
    InvalidAutomaton,
}

impl Error {
    /// True for every failure raised while rewriting or building, as
    /// opposed to the validation gate.
    pub fn is_malformed_expression(&self) -> bool {
        !matches!(self, Self::InvalidAutomaton)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParens => write!(f, "unbalanced parentheses in expression"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character '{c}' in expression"),
            Self::EmptyExpression => write!(f, "expression is empty"),
            Self::DanglingOperator(c) => write!(f, "operator '{c}' is missing an operand"),
            Self::MissingOperator => write!(f, "operands are not joined by an operator"),
            Self::InvalidAutomaton => write!(f, "automaton is not well-formed"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy() {
        assert!(Error::UnbalancedParens.is_malformed_expression());
        assert!(Error::UnexpectedChar('?').is_malformed_expression());
        assert!(Error::EmptyExpression.is_malformed_expression());
        assert!(Error::DanglingOperator('|').is_malformed_expression());
        assert!(Error::MissingOperator.is_malformed_expression());
        assert!(!Error::InvalidAutomaton.is_malformed_expression());
    }

    #[test]
    fn display_names_the_offender() {
        assert_eq!(
            Error::UnexpectedChar('?').to_string(),
            "unexpected character '?' in expression"
        );
        assert_eq!(
            Error::DanglingOperator('*').to_string(),
            "operator '*' is missing an operand"
        );
    }
}
