//! Word acceptance.
//!
//! One stepping rule covers both NFAs and DFAs: the current
//! configuration is a set of states, and for a DFA that set simply
//! never grows past one. Rejection is a first-class outcome with a
//! reason, not an error.

use std::fmt;

use crate::automaton::Automaton;
use crate::state::StateSet;

/// Why a word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The word contains a symbol outside the automaton's alphabet.
    InvalidSymbol(char),
    /// No state in the current configuration had a transition on the
    /// next symbol.
    NoTransition,
    /// The word was consumed but the final configuration contains no
    /// accepting state.
    NotAccepting,
}

/// The outcome of simulating a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The word is in the automaton's language.
    Accepted,
    /// The word is not, with the reason.
    Rejected(RejectReason),
}

impl Verdict {
    /// True for [`Verdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol(c) => write!(f, "symbol '{c}' is not in the alphabet"),
            Self::NoTransition => write!(f, "no transition found"),
            Self::NotAccepting => write!(f, "word ends in a non-accepting state"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected(reason) => write!(f, "rejected ({reason})"),
        }
    }
}

/// Run `word` against the automaton and report the verdict.
///
/// The starting configuration is the epsilon closure of the initial
/// state; each consumed symbol steps to the epsilon closure of the
/// union of its targets. Never panics and never mutates the automaton.
pub fn accepts(automaton: &Automaton, word: &str) -> Verdict {
    let n = automaton.num_states() as usize;
    let mut current = match automaton.initial() {
        Some(initial) => automaton.epsilon_closure(&StateSet::singleton(initial, n)),
        None => StateSet::with_capacity(n),
    };

    for symbol in word.chars() {
        if !automaton.alphabet().contains(&symbol) {
            return Verdict::Rejected(RejectReason::InvalidSymbol(symbol));
        }
        let next = automaton.move_on_symbol(&current, symbol);
        if next.is_empty() {
            return Verdict::Rejected(RejectReason::NoTransition);
        }
        current = next;
    }

    if current.intersects(automaton.accepting()) {
        Verdict::Accepted
    } else {
        Verdict::Rejected(RejectReason::NotAccepting)
    }
}
