//! The shared automaton model.
//!
//! A single [`Automaton`] structure covers both the epsilon-NFA produced
//! by Thompson construction and the DFA produced by subset construction;
//! the two differ only in whether the transition relation happens to be
//! deterministic. States are dense indices into the automaton's own
//! arena, so composing automatons can never alias identifiers.

use std::collections::BTreeSet;
use std::fmt;

use crate::state::{StateId, StateSet};

/// An edge label: either an epsilon move or an input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Label {
    /// A transition consuming no input.
    Epsilon,
    /// A transition consuming one input symbol.
    Symbol(char),
}

/// A finite automaton over `char` symbols.
///
/// Outgoing edges are kept per state as small ordered lists. The
/// alphabet holds every symbol seen on an edge (epsilon excluded) plus
/// anything added explicitly with [`insert_symbol`](Automaton::insert_symbol).
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Outgoing edges, indexed by source state.
    edges: Vec<Vec<(Label, StateId)>>,
    alphabet: BTreeSet<char>,
    initial: Option<StateId>,
    accepting: StateSet,
}

impl Automaton {
    /// Create an automaton with no states.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            alphabet: BTreeSet::new(),
            initial: None,
            accepting: StateSet::with_capacity(16),
        }
    }

    /// Allocate a fresh state and return its id.
    pub fn add_state(&mut self) -> StateId {
        let id = self.edges.len() as StateId;
        self.edges.push(Vec::new());
        id
    }

    /// Number of states; state ids range over `0..num_states()`.
    pub fn num_states(&self) -> StateId {
        self.edges.len() as StateId
    }

    /// Add an edge. Symbol labels are recorded in the alphabet.
    /// Duplicate edges are ignored.
    pub fn add_edge(&mut self, from: StateId, label: Label, to: StateId) {
        debug_assert!(from < self.num_states() && to < self.num_states());
        if let Label::Symbol(c) = label {
            self.alphabet.insert(c);
        }
        let out = &mut self.edges[from as usize];
        if !out.contains(&(label, to)) {
            out.push((label, to));
        }
    }

    /// Record a symbol in the alphabet without adding an edge.
    ///
    /// Determinization uses this to carry the NFA alphabet over
    /// verbatim, even for symbols with no surviving transition.
    pub fn insert_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Set the initial state.
    pub fn set_initial(&mut self, state: StateId) {
        self.initial = Some(state);
    }

    /// The initial state, if one was set.
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// Mark a state as accepting.
    pub fn mark_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// The accepting states.
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// The input alphabet, in sorted order.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Outgoing edges of a state.
    pub fn edges_from(&self, state: StateId) -> &[(Label, StateId)] {
        &self.edges[state as usize]
    }

    /// All edges as `(source, label, destination)` triples.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.edges.iter().enumerate().flat_map(|(from, out)| {
            out.iter()
                .map(move |&(label, to)| (from as StateId, label, to))
        })
    }

    /// The set of states reachable from `seed` by zero or more epsilon
    /// moves, computed by an iterative depth-first traversal. The seed
    /// states are always part of the closure.
    pub fn epsilon_closure(&self, seed: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.edges.len());
        let mut stack: Vec<StateId> = seed.iter().collect();

        while let Some(state) = stack.pop() {
            if closure.contains(state) {
                continue;
            }
            closure.insert(state);

            for &(label, to) in self.edges_from(state) {
                if label == Label::Epsilon && !closure.contains(to) {
                    stack.push(to);
                }
            }
        }

        closure
    }

    /// States reachable from `states` by consuming `symbol` once,
    /// followed by the epsilon closure of the result.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut reached = StateSet::with_capacity(self.edges.len());

        for state in states.iter() {
            for &(label, to) in self.edges_from(state) {
                if label == Label::Symbol(symbol) {
                    reached.insert(to);
                }
            }
        }

        if reached.is_empty() {
            return reached;
        }
        self.epsilon_closure(&reached)
    }

    /// True if the transition relation is deterministic: no epsilon
    /// edges and at most one destination per `(state, symbol)` pair.
    pub fn is_deterministic(&self) -> bool {
        for out in &self.edges {
            let mut seen = BTreeSet::new();
            for &(label, _) in out {
                match label {
                    Label::Epsilon => return false,
                    Label::Symbol(c) => {
                        if !seen.insert(c) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Deterministic textual dump of the automaton.
    ///
    /// Transition lines are sorted by (source, label, destination) so
    /// the output is byte-stable for a given automaton.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "States:")?;
        for s in 0..self.num_states() {
            write!(f, " q{s}")?;
        }
        writeln!(f)?;

        write!(f, "Alphabet:")?;
        for c in &self.alphabet {
            write!(f, " {c}")?;
        }
        writeln!(f)?;

        match self.initial {
            Some(s) => writeln!(f, "Initial state: q{s}")?,
            None => writeln!(f, "Initial state: -")?,
        }

        write!(f, "Accepting states:")?;
        for s in self.accepting.iter() {
            write!(f, " q{s}")?;
        }
        writeln!(f)?;

        writeln!(f, "Transitions:")?;
        let mut triples: Vec<_> = self.transitions().collect();
        triples.sort_unstable();
        for (from, label, to) in triples {
            match label {
                Label::Epsilon => writeln!(f, "(q{from}, ε) -> q{to}")?,
                Label::Symbol(c) => writeln!(f, "(q{from}, {c}) -> q{to}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Automaton {
        // q0 -ε-> q1 -ε-> q2, q2 -a-> q3
        let mut a = Automaton::new();
        let s: Vec<_> = (0..4).map(|_| a.add_state()).collect();
        a.set_initial(s[0]);
        a.add_edge(s[0], Label::Epsilon, s[1]);
        a.add_edge(s[1], Label::Epsilon, s[2]);
        a.add_edge(s[2], Label::Symbol('a'), s[3]);
        a.mark_accepting(s[3]);
        a
    }

    #[test]
    fn closure_follows_epsilon_chains() {
        let a = chain();
        let closure = a.epsilon_closure(&StateSet::singleton(0, 4));
        assert_eq!(closure.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn closure_contains_seed() {
        let a = chain();
        let closure = a.epsilon_closure(&StateSet::singleton(3, 4));
        assert_eq!(closure.to_vec(), vec![3]);
    }

    #[test]
    fn move_unions_targets_and_closes() {
        // q0 -a-> q1, q0 -a-> q2, q1 -ε-> q3
        let mut a = Automaton::new();
        let s: Vec<_> = (0..4).map(|_| a.add_state()).collect();
        a.add_edge(s[0], Label::Symbol('a'), s[1]);
        a.add_edge(s[0], Label::Symbol('a'), s[2]);
        a.add_edge(s[1], Label::Epsilon, s[3]);

        let next = a.move_on_symbol(&StateSet::singleton(0, 4), 'a');
        assert_eq!(next.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn move_on_missing_symbol_is_empty() {
        let a = chain();
        let next = a.move_on_symbol(&StateSet::singleton(0, 4), 'z');
        assert!(next.is_empty());
    }

    #[test]
    fn determinism_check() {
        let mut a = Automaton::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.add_edge(s0, Label::Symbol('a'), s1);
        assert!(a.is_deterministic());

        a.add_edge(s0, Label::Symbol('a'), s0);
        assert!(!a.is_deterministic());
    }

    #[test]
    fn epsilon_edge_is_nondeterministic() {
        let a = chain();
        assert!(!a.is_deterministic());
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut a = Automaton::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.add_edge(s0, Label::Symbol('a'), s1);
        a.add_edge(s0, Label::Symbol('a'), s1);
        assert_eq!(a.edges_from(s0).len(), 1);
    }

    #[test]
    fn render_is_sorted_and_stable() {
        let mut a = Automaton::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.set_initial(s0);
        a.mark_accepting(s1);
        // Insert edges out of order; render must sort them.
        a.add_edge(s0, Label::Symbol('b'), s1);
        a.add_edge(s0, Label::Symbol('a'), s1);

        let text = a.render();
        assert_eq!(
            text,
            "States: q0 q1\n\
             Alphabet: a b\n\
             Initial state: q0\n\
             Accepting states: q1\n\
             Transitions:\n\
             (q0, a) -> q1\n\
             (q0, b) -> q1\n"
        );
        assert_eq!(text, a.render());
    }
}
