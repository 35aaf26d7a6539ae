//! Post-rewrite normalization.
//!
//! Determinized output must not reference continuous fluents, so
//! `increase`/`decrease` effects and the `:requirements` list are dropped.
//! Conjunctions left with nothing but the debris of dropped children
//! collapse to the canonical no-op `(and)`.

use crate::ast::Node;

/// Normalize a determinized tree in place. Idempotent.
pub fn clean(node: &mut Node) {
    if matches!(
        node.head(),
        Some("increase" | "decrease" | ":requirements")
    ) {
        *node = Node::List(Vec::new());
        return;
    }
    let Node::List(children) = node else { return };
    for child in children.iter_mut() {
        clean(child);
    }
    if children.len() > 1
        && matches!(children.first(), Some(Node::Atom(a)) if a == "and")
        && children[1..].iter().all(is_void)
    {
        *node = Node::noop();
    }
}

/// True for children that carry no effect: emptied lists and bare `(and)`.
fn is_void(node: &Node) -> bool {
    match node {
        Node::List(children) => {
            children.is_empty() || *node == Node::noop()
        }
        Node::Atom(_) => false,
    }
}

/// Strip problem-level forms deterministic planners cannot read:
/// `:goal-reward` and `:metric`.
pub fn clean_problem(node: &mut Node) {
    let Node::List(children) = node else { return };
    children.retain(|child| !matches!(child.head(), Some(":goal-reward" | ":metric")));
    for child in children.iter_mut() {
        clean_problem(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn parsed(src: &str) -> Node {
        parse(src).unwrap()
    }

    #[test]
    fn drops_fluent_effects_and_requirements() {
        let mut tree = parsed(
            "(define (:requirements :probabilistic-effects)\n\
               (:action go :effect (and (p) (increase (reward) 1))))",
        );
        clean(&mut tree);
        assert_eq!(tree.at(&[0, 1]), Some(&Node::List(Vec::new())));
        assert_eq!(tree.at(&[0, 2, 3, 2]), Some(&Node::List(Vec::new())));
        // The conjunction keeps its live child.
        assert_eq!(tree.at(&[0, 2, 3]).and_then(Node::head), Some("and"));
        assert_eq!(
            tree.at(&[0, 2, 3]).and_then(Node::children).map(<[Node]>::len),
            Some(3)
        );
    }

    #[test]
    fn collapses_fully_drained_conjunctions() {
        let mut tree = parsed("(e (and (increase (reward) 1) (and)))");
        clean(&mut tree);
        assert_eq!(tree.at(&[0, 1]), Some(&Node::noop()));
    }

    #[test]
    fn collapse_cascades_upward() {
        let mut tree = parsed("(e (and (and (decrease (fuel) 1))))");
        clean(&mut tree);
        assert_eq!(tree.at(&[0, 1]), Some(&Node::noop()));
    }

    #[test]
    fn conjunction_with_a_live_child_survives() {
        let mut tree = parsed("(e (and (p) (increase (reward) 1)))");
        clean(&mut tree);
        let conj = tree.at(&[0, 1]).unwrap();
        assert_eq!(conj.head(), Some("and"));
        assert_eq!(conj.children().map(<[Node]>::len), Some(3));
    }

    #[test]
    fn clean_is_idempotent() {
        let mut once = parsed(
            "(define (:requirements :typing)\n\
               (:action go :effect (and (and) (increase (reward) 1) (p))))",
        );
        clean(&mut once);
        let mut twice = once.clone();
        clean(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn problem_cleanup_removes_reward_and_metric_forms() {
        let mut tree = parsed(
            "(define (problem p1)\n\
               (:domain d)\n\
               (:init (at x))\n\
               (:goal (done))\n\
               (:goal-reward 100)\n\
               (:metric maximize (reward)))",
        );
        clean_problem(&mut tree);
        let forms = tree.at(&[0]).unwrap().children().unwrap();
        assert_eq!(forms.len(), 4);
        assert!(forms.iter().all(|f| !matches!(
            f.head(),
            Some(":goal-reward" | ":metric")
        )));
    }
}
