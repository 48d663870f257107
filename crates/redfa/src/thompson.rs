//! Thompson construction of an epsilon-NFA from postfix tokens.
//!
//! Every composition takes its operands by reference and assembles a
//! brand-new automaton, remapping operand states into the result's own
//! arena. Each rule below yields exactly one accepting state, which is
//! what lets concatenation merge "the" accepting state of its left
//! operand with the initial state of its right operand.

use crate::automaton::{Automaton, Label};
use crate::errors::Error;
use crate::postfix::Token;
use crate::state::StateId;

/// Copy every edge of `src` into `out`, translating state ids through `map`.
fn copy_edges(out: &mut Automaton, src: &Automaton, map: &[StateId]) {
    for (from, label, to) in src.transitions() {
        out.add_edge(map[from as usize], label, map[to as usize]);
    }
}

/// Allocate fresh states in `out` for every state of `src`, copy the
/// edges over, and return the id translation table.
fn embed(out: &mut Automaton, src: &Automaton) -> Vec<StateId> {
    let map: Vec<StateId> = (0..src.num_states()).map(|_| out.add_state()).collect();
    copy_edges(out, src, &map);
    map
}

/// The single accepting state every composition rule guarantees.
fn sole_accepting(a: &Automaton) -> StateId {
    debug_assert_eq!(a.accepting().len(), 1);
    a.accepting().iter().next().unwrap()
}

/// The initial state, which every constructed operand has.
fn initial_of(a: &Automaton) -> StateId {
    debug_assert!(a.initial().is_some());
    a.initial().unwrap_or(0)
}

/// Two states joined by one symbol edge.
fn literal(symbol: char) -> Automaton {
    let mut out = Automaton::new();
    let start = out.add_state();
    let end = out.add_state();
    out.set_initial(start);
    out.mark_accepting(end);
    out.add_edge(start, Label::Symbol(symbol), end);
    out
}

/// `ab`: merge a's accepting state with b's initial state.
///
/// Both map onto one fresh state, so the merge needs no follow-up
/// rewriting of edges and no compatibility epsilon edge.
fn concatenate(a: &Automaton, b: &Automaton) -> Automaton {
    let mut out = Automaton::new();

    let map_a: Vec<StateId> = (0..a.num_states()).map(|_| out.add_state()).collect();
    let joint = map_a[sole_accepting(a) as usize];

    let b_initial = initial_of(b);
    let mut map_b: Vec<StateId> = Vec::with_capacity(b.num_states() as usize);
    for s in 0..b.num_states() {
        map_b.push(if s == b_initial { joint } else { out.add_state() });
    }

    copy_edges(&mut out, a, &map_a);
    copy_edges(&mut out, b, &map_b);

    out.set_initial(map_a[initial_of(a) as usize]);
    for s in b.accepting().iter() {
        out.mark_accepting(map_b[s as usize]);
    }
    out
}

/// `a|b`: fresh start forks by epsilon into both operands; every
/// operand accepting state joins a fresh end by epsilon.
fn alternate(a: &Automaton, b: &Automaton) -> Automaton {
    let mut out = Automaton::new();
    let start = out.add_state();
    let map_a = embed(&mut out, a);
    let map_b = embed(&mut out, b);
    let end = out.add_state();

    out.set_initial(start);
    out.mark_accepting(end);
    out.add_edge(start, Label::Epsilon, map_a[initial_of(a) as usize]);
    out.add_edge(start, Label::Epsilon, map_b[initial_of(b) as usize]);
    for s in a.accepting().iter() {
        out.add_edge(map_a[s as usize], Label::Epsilon, end);
    }
    for s in b.accepting().iter() {
        out.add_edge(map_b[s as usize], Label::Epsilon, end);
    }
    out
}

/// `a*`: zero or more repeats. The fresh start can skip straight to
/// the fresh end; accepting states loop back or exit.
fn kleene_star(a: &Automaton) -> Automaton {
    let mut out = Automaton::new();
    let start = out.add_state();
    let map = embed(&mut out, a);
    let end = out.add_state();
    let inner_start = map[initial_of(a) as usize];

    out.set_initial(start);
    out.mark_accepting(end);
    out.add_edge(start, Label::Epsilon, inner_start);
    out.add_edge(start, Label::Epsilon, end);
    for s in a.accepting().iter() {
        out.add_edge(map[s as usize], Label::Epsilon, inner_start);
        out.add_edge(map[s as usize], Label::Epsilon, end);
    }
    out
}

/// `a+`: like star but without the skip edge, so at least one pass
/// through the operand is mandatory.
fn plus(a: &Automaton) -> Automaton {
    let mut out = Automaton::new();
    let start = out.add_state();
    let map = embed(&mut out, a);
    let end = out.add_state();
    let inner_start = map[initial_of(a) as usize];

    out.set_initial(start);
    out.mark_accepting(end);
    out.add_edge(start, Label::Epsilon, inner_start);
    for s in a.accepting().iter() {
        out.add_edge(map[s as usize], Label::Epsilon, inner_start);
        out.add_edge(map[s as usize], Label::Epsilon, end);
    }
    out
}

/// Evaluate a postfix token sequence into an epsilon-NFA.
///
/// Operands push a fresh literal automaton; binary operators pop two
/// (the second pop is the left operand); unary operators pop one.
/// Anything other than exactly one automaton left at the end is a
/// malformed expression.
pub fn build_nfa(tokens: &[Token]) -> Result<Automaton, Error> {
    let mut stack: Vec<Automaton> = Vec::new();

    for &token in tokens {
        match token {
            Token::Literal(c) => stack.push(literal(c)),
            Token::Concat | Token::Alternate => {
                let b = stack.pop().ok_or(Error::DanglingOperator(token.glyph()))?;
                let a = stack.pop().ok_or(Error::DanglingOperator(token.glyph()))?;
                stack.push(match token {
                    Token::Concat => concatenate(&a, &b),
                    _ => alternate(&a, &b),
                });
            }
            Token::Star | Token::Plus => {
                let a = stack.pop().ok_or(Error::DanglingOperator(token.glyph()))?;
                stack.push(match token {
                    Token::Star => kleene_star(&a),
                    _ => plus(&a),
                });
            }
        }
    }

    match stack.len() {
        1 => Ok(stack.pop().unwrap_or_default()),
        0 => Err(Error::EmptyExpression),
        _ => Err(Error::MissingOperator),
    }
}
