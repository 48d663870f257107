//! Compile regular expressions to deterministic finite automata.
//!
//! # Overview
//!
//! The pipeline rewrites an infix expression into postfix form, builds
//! an epsilon-NFA from it by Thompson construction, and determinizes
//! the result with the subset construction:
//!
//! ```text
//! expression -> postfix tokens -> epsilon-NFA -> DFA
//! ```
//!
//! [`build_dfa`] runs the whole pipeline. The resulting [`Automaton`]
//! should be gated through [`is_well_formed`] before words are tested
//! with [`accepts`], which reports acceptance or one of three distinct
//! rejection reasons.
//!
//! Supported syntax: alphanumeric literals, concatenation (`.` or
//! juxtaposition), alternation (`|`), Kleene star (`*`), one-or-more
//! (`+`), and grouping parentheses. The DFA is determinized but not
//! minimized.

mod automaton;
mod errors;
mod postfix;
mod simulate;
mod state;
mod subset;
mod thompson;
mod validate;

pub use automaton::{Automaton, Label};
pub use errors::Error;
pub use postfix::{Token, to_postfix};
pub use simulate::{RejectReason, Verdict, accepts};
pub use state::{StateId, StateSet};
pub use subset::determinize;
pub use thompson::build_nfa;
pub use validate::is_well_formed;

/// Run the full pipeline: postfix rewriting, Thompson construction,
/// determinization. Fails on a malformed expression; no partial
/// automaton is ever returned.
pub fn build_dfa(expr: &str) -> Result<Automaton, Error> {
    let tokens = to_postfix(expr)?;
    let nfa = build_nfa(&tokens)?;
    Ok(determinize(&nfa))
}
