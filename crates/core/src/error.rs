//! Error type shared by every recast transformation.

use serde_json::Value;
use thiserror::Error;

/// All errors the core pipeline can produce. I/O failures stay with the
/// file-reading caller; the core only ever sees already-read text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecastError {
    /// A `)` with no matching open list.
    #[error("unbalanced ')' at line {line}")]
    UnbalancedClose { line: u32 },

    /// One or more `(` left open at end of input.
    #[error("unbalanced '(': {open} list(s) still open at end of input")]
    UnbalancedOpen { open: usize },

    /// A probability literal that does not parse as a rational in (0, 1].
    #[error("invalid probability literal '{literal}': {reason}")]
    Probability { literal: String, reason: String },

    /// Explicit outcome probabilities of one effect summing past 1.
    #[error(
        "probabilities sum to {} (> 1) in probabilistic effect of action '{}'",
        .sum,
        .action.as_deref().unwrap_or("<none>")
    )]
    ProbabilitySum { action: Option<String>, sum: String },

    /// A requested named domain or problem is absent from the file.
    #[error("no {kind} named '{name}' in this file")]
    Lookup { kind: String, name: String },

    /// A structurally malformed tree reached a transformation.
    #[error("malformed tree: {0}")]
    Structure(String),
}

impl RecastError {
    /// Stable machine-readable discriminant for JSON reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            RecastError::UnbalancedClose { .. } | RecastError::UnbalancedOpen { .. } => "parse",
            RecastError::Probability { .. } | RecastError::ProbabilitySum { .. } => "probability",
            RecastError::Lookup { .. } => "lookup",
            RecastError::Structure(_) => "structure",
        }
    }

    /// Serialize for the CLI's `--output json` mode.
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        })
    }
}
