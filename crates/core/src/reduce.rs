//! Bounded-exception model reduction.
//!
//! Rewrites every probabilistic effect so that at most one exceptional
//! outcome can occur before the model renormalizes to its primary
//! behavior. Two auxiliary 0-ary fluents gate the two regimes: while `k-0`
//! holds, all outcomes remain reachable and any exception sets `k-1`; once
//! `k-1` holds, only the primary outcomes remain, with their probabilities
//! renormalized to sum to 1. Relative likelihoods among primary outcomes
//! are preserved exactly.
//!
//! An outcome is primary when it carries the `(primary)` marker, either as
//! the entire outcome or as one conjunct of an `and`. The marker is
//! stripped during reduction. Effects with no primary outcome are left
//! untouched.

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::ast::Node;
use crate::determinize::outcome_pairs;
use crate::error::RecastError;
use crate::prob::{format_probability, parse_probability};

/// Gate fluent: exceptions still allowed.
pub const GATE_OPEN: &str = "k-0";
/// Gate fluent: exception budget exhausted.
pub const GATE_CLOSED: &str = "k-1";

/// Reduce every probabilistic effect of the tree, post-order, and declare
/// the gate fluents in the domain's `:predicates` list (exactly once).
pub fn reduce_model(node: &mut Node) -> Result<(), RecastError> {
    if node.head() == Some(":predicates") {
        declare_gates(node);
    }
    let Node::List(children) = node else {
        return Ok(());
    };
    for child in children.iter_mut() {
        reduce_model(child)?;
        // Post-order: a nested effect's context is already reduced by the
        // time its enclosing probabilistic node is rebuilt.
        if child.head() == Some("probabilistic") {
            reduce_effect(child)?;
        }
    }
    Ok(())
}

fn declare_gates(node: &mut Node) {
    let Node::List(children) = node else { return };
    for gate in [GATE_OPEN, GATE_CLOSED] {
        if !children.iter().any(|c| c.head() == Some(gate)) {
            children.push(Node::list(vec![Node::atom(gate)]));
        }
    }
}

fn reduce_effect(node: &mut Node) -> Result<(), RecastError> {
    let mut primaries: Vec<(Node, BigRational)> = Vec::new();
    let mut exceptions: Vec<(Node, BigRational)> = Vec::new();
    let mut total = BigRational::zero();
    let mut total_primary = BigRational::zero();

    for (literal, outcome) in outcome_pairs(node)? {
        let probability = parse_probability(literal)?;
        total += probability.clone();
        let mut outcome = outcome.clone();
        if strip_primary_marker(&mut outcome) {
            total_primary += probability.clone();
            primaries.push((outcome, probability));
        } else {
            exceptions.push((outcome, probability));
        }
    }
    if total > BigRational::one() {
        return Err(RecastError::ProbabilitySum {
            action: None,
            sum: format_probability(&total),
        });
    }
    if primaries.is_empty() {
        return Ok(());
    }

    *node = Node::list(vec![
        Node::atom("and"),
        before_limit(&primaries, &exceptions),
        after_limit(&primaries, &total_primary),
    ]);
    Ok(())
}

/// `(when (k-0) (probabilistic ...))`: every outcome stays reachable at its
/// original probability; exceptional outcomes additionally set `k-1`.
fn before_limit(primaries: &[(Node, BigRational)], exceptions: &[(Node, BigRational)]) -> Node {
    let mut effect = vec![Node::atom("probabilistic")];
    for (outcome, probability) in primaries {
        effect.push(Node::atom(format_probability(probability)));
        effect.push(outcome.clone());
    }
    for (outcome, probability) in exceptions {
        effect.push(Node::atom(format_probability(probability)));
        effect.push(Node::list(vec![
            Node::atom("and"),
            Node::list(vec![Node::atom(GATE_CLOSED)]),
            outcome.clone(),
        ]));
    }
    Node::list(vec![
        Node::atom("when"),
        Node::list(vec![Node::atom(GATE_OPEN)]),
        Node::list(effect),
    ])
}

/// `(when (k-1) (probabilistic ...))`: primary outcomes only, renormalized
/// by the total primary probability.
fn after_limit(primaries: &[(Node, BigRational)], total_primary: &BigRational) -> Node {
    let mut effect = vec![Node::atom("probabilistic")];
    for (outcome, probability) in primaries {
        effect.push(Node::atom(format_probability(&(probability / total_primary))));
        effect.push(outcome.clone());
    }
    Node::list(vec![
        Node::atom("when"),
        Node::list(vec![Node::atom(GATE_CLOSED)]),
        Node::list(effect),
    ])
}

/// Remove the `(primary)` marker from an outcome, reporting whether it was
/// present. A bare `(primary)` outcome becomes the no-op `(and)`; an `and`
/// outcome keeps its remaining conjuncts, collapsing to the lone conjunct
/// when only one is left.
fn strip_primary_marker(outcome: &mut Node) -> bool {
    if is_marker(outcome) {
        *outcome = Node::noop();
        return true;
    }
    let Node::List(children) = outcome else {
        return false;
    };
    if !matches!(children.first(), Some(Node::Atom(a)) if a == "and") {
        return false;
    }
    let before = children.len();
    children.retain(|c| !is_marker(c));
    if children.len() == before {
        return false;
    }
    if children.len() == 2 {
        let lone = children.remove(1);
        *outcome = lone;
    }
    true
}

fn is_marker(node: &Node) -> bool {
    matches!(
        node.children(),
        Some([Node::Atom(head)]) if head == "primary"
    )
}
