//! Subset construction: epsilon-NFA to DFA.

use indexmap::IndexMap;
use std::collections::VecDeque;

use crate::automaton::{Automaton, Label};
use crate::state::{StateId, StateSet};

/// Convert an epsilon-NFA into an equivalent DFA.
///
/// Each DFA state stands for a set of NFA states; the canonical key for
/// such a set is its sorted id vector, so two paths reaching the same
/// set of NFA states always reuse one DFA state. That reuse is what
/// bounds the construction and makes it terminate. The alphabet is
/// carried over verbatim and iterated in sorted order, which makes the
/// DFA's state numbering reproducible.
pub fn determinize(nfa: &Automaton) -> Automaton {
    let mut dfa = Automaton::new();
    for &symbol in nfa.alphabet() {
        dfa.insert_symbol(symbol);
    }

    let Some(nfa_initial) = nfa.initial() else {
        return dfa;
    };

    let mut mapping: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut worklist: VecDeque<StateSet> = VecDeque::new();

    let start_set =
        nfa.epsilon_closure(&StateSet::singleton(nfa_initial, nfa.num_states() as usize));
    let start = dfa.add_state();
    dfa.set_initial(start);
    if start_set.intersects(nfa.accepting()) {
        dfa.mark_accepting(start);
    }
    mapping.insert(start_set.to_vec(), start);
    worklist.push_back(start_set);

    while let Some(current) = worklist.pop_front() {
        let from = *mapping.get(&current.to_vec()).unwrap();

        for &symbol in nfa.alphabet() {
            let next = nfa.move_on_symbol(&current, symbol);
            if next.is_empty() {
                // The DFA simply has no transition on this symbol.
                continue;
            }

            let key = next.to_vec();
            let to = if let Some(&existing) = mapping.get(&key) {
                existing
            } else {
                let fresh = dfa.add_state();
                if next.intersects(nfa.accepting()) {
                    dfa.mark_accepting(fresh);
                }
                mapping.insert(key, fresh);
                worklist.push_back(next);
                fresh
            };

            dfa.add_edge(from, Label::Symbol(symbol), to);
        }
    }

    dfa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postfix::to_postfix;
    use crate::simulate::accepts;
    use crate::thompson::build_nfa;

    fn dfa(expr: &str) -> Automaton {
        determinize(&build_nfa(&to_postfix(expr).unwrap()).unwrap())
    }

    #[test]
    fn output_is_deterministic() {
        for expr in ["a", "ab", "a|b", "a*", "a+", "(a|b)*c"] {
            let d = dfa(expr);
            assert!(d.is_deterministic(), "{expr} produced a nondeterministic result");
        }
    }

    #[test]
    fn alphabet_carried_verbatim() {
        let d = dfa("(a|b)*c");
        assert_eq!(d.alphabet().iter().collect::<Vec<_>>(), vec![&'a', &'b', &'c']);
    }

    #[test]
    fn accepting_propagates_from_any_member() {
        // a* : the start set already contains the NFA accepting state.
        let d = dfa("a*");
        let start = d.initial().unwrap();
        assert!(d.accepting().contains(start));

        // a+ : it must not.
        let d = dfa("a+");
        let start = d.initial().unwrap();
        assert!(!d.accepting().contains(start));
    }

    #[test]
    fn one_dfa_state_per_distinct_closure() {
        // a|b reaches exactly two distinct closures from the start set,
        // one per branch, so the DFA has three states in total.
        let d = dfa("a|b");
        assert_eq!(d.num_states(), 3);
    }

    #[test]
    fn repeated_closures_reuse_states() {
        // Every 'a' consumed by a* leads back to the same closure, so
        // looping does not mint new DFA states.
        let d = dfa("a*");
        assert!(d.num_states() <= 2);
    }

    #[test]
    fn determinize_is_idempotent_on_language() {
        let first = dfa("(a|b)*c");
        let second = determinize(&first);

        for word in ["c", "abc", "aabbc", "ab", "cc", "", "ba", "bbac"] {
            assert_eq!(
                accepts(&first, word).is_accepted(),
                accepts(&second, word).is_accepted(),
                "languages diverge on {word:?}"
            );
        }
    }

    #[test]
    fn no_initial_state_yields_empty_dfa() {
        let empty = Automaton::new();
        let d = determinize(&empty);
        assert_eq!(d.num_states(), 0);
        assert!(d.initial().is_none());
    }
}
