//! Application of a determinization combination to a tree.
//!
//! Each chosen outcome replaces the probabilistic effect its path handle
//! addresses. Because combinations carry paths rather than relying on a
//! second traversal, a combination built from one tree can be applied to
//! any structurally identical clone of it.

use crate::ast::Node;
use crate::determinize::Combination;
use crate::error::RecastError;

/// Replace every addressed probabilistic effect with its chosen outcome.
/// Returns the number of effects rewritten.
pub fn apply(combination: &Combination<'_>, tree: &mut Node) -> Result<usize, RecastError> {
    for chosen in combination {
        let node = tree.at_mut(chosen.path).ok_or_else(|| {
            RecastError::Structure(format!("no node at effect path {:?}", chosen.path))
        })?;
        if node.head() != Some("probabilistic") {
            return Err(RecastError::Structure(format!(
                "node at path {:?} is not a probabilistic effect",
                chosen.path
            )));
        }
        *node = chosen.outcome.clone();
    }
    Ok(combination.len())
}
