//! Collection of probabilistic effects.
//!
//! Walks a description tree in pre-order, carrying the name of the most
//! recently entered `:action` list, and records every `probabilistic` list
//! together with that name and a stable path handle. Collection order is
//! the canonical effect order used by determinization descriptions.
//!
//! Probabilistic effects are assumed non-nested; a collected effect is not
//! descended into.

use crate::ast::{Node, Path};

/// One collected probabilistic effect: the enclosing action's name (when
/// the effect sits under an `:action` form) and the subtree's path handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbEffect {
    pub action: Option<String>,
    pub path: Path,
}

/// Collect all probabilistic effects of `tree` in pre-order.
pub fn collect_effects(tree: &Node) -> Vec<ProbEffect> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    walk(tree, &mut path, None, &mut out);
    out
}

fn walk(node: &Node, path: &mut Path, inherited: Option<&str>, out: &mut Vec<ProbEffect>) {
    let Node::List(children) = node else { return };

    let own_action = if node.head() == Some(":action") {
        match children.get(1) {
            // Declared names sometimes carry a stray CR from DOS-format files.
            Some(Node::Atom(name)) => Some(name.trim_end_matches('\r').to_owned()),
            _ => None,
        }
    } else {
        None
    };
    let action = own_action.as_deref().or(inherited);

    if node.head() == Some("probabilistic") {
        out.push(ProbEffect {
            action: action.map(str::to_owned),
            path: path.clone(),
        });
        return;
    }

    for (i, child) in children.iter().enumerate() {
        path.push(i);
        walk(child, path, action, out);
        path.pop();
    }
}
