//! Structural well-formedness checking.

use crate::automaton::{Automaton, Label};

/// Check that an automaton is structurally sound before it is used.
///
/// All of the following must hold: at least one state; a non-empty
/// alphabet; an in-range initial state with at least one outgoing edge;
/// every edge endpoint in range; every symbol edge labeled from the
/// alphabet; every accepting state in range. Pure predicate, no side
/// effects.
pub fn is_well_formed(automaton: &Automaton) -> bool {
    let n = automaton.num_states();
    if n == 0 || automaton.alphabet().is_empty() {
        return false;
    }

    let Some(initial) = automaton.initial() else {
        return false;
    };
    if initial >= n || automaton.edges_from(initial).is_empty() {
        return false;
    }

    for (from, label, to) in automaton.transitions() {
        if from >= n || to >= n {
            return false;
        }
        if let Label::Symbol(c) = label {
            if !automaton.alphabet().contains(&c) {
                return false;
            }
        }
    }

    automaton.accepting().iter().all(|s| s < n)
}
