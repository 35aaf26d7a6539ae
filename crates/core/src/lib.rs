//! recast-core: PPDDL determinization and model-reduction library.
//!
//! Parses a probabilistic planning description into a generic token tree
//! and rewrites it:
//!
//! - **determinization** replaces every probabilistic effect with one
//!   deterministic alternative, either over all combinations (lazily
//!   enumerated) or as the single most likely outcome;
//! - **model reduction** caps the number of exceptional outcomes an
//!   effect may produce, gated by auxiliary `k-0`/`k-1` fluents.
//!
//! # Public API
//!
//! Key types and entry points are re-exported at the crate root:
//!
//! - [`parse()`] / [`serialize()`] -- text to [`Node`] tree and back
//! - [`collect_effects()`] -- probabilistic effects with path handles
//! - [`determinization_records()`], [`enumerate_determinizations()`],
//!   [`most_likely_outcome()`] -- determinization selection
//! - [`apply()`] -- rewrite a tree with a chosen combination
//! - [`clean()`] / [`clean_problem()`] -- post-rewrite normalization
//! - [`reduce_model()`] -- bounded-exception reduction
//! - [`RecastError`] -- pipeline error type

pub mod ast;
pub mod clean;
pub mod determinize;
pub mod document;
pub mod effects;
pub mod error;
pub mod parser;
pub mod prob;
pub mod reduce;
pub mod rewrite;
pub mod serialize;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::{Node, Path};
pub use determinize::{
    ChoiceRecord, Chosen, Combination, Combinations, EffectOutcomes, OutcomeChoice,
};
pub use effects::ProbEffect;
pub use error::RecastError;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use clean::{clean, clean_problem};
pub use determinize::{
    combination_records, description_text, determinization_records, effect_outcomes,
    enumerate_determinizations, most_likely_outcome,
};
pub use document::{find_domain, find_problem, strip_comments};
pub use effects::collect_effects;
pub use parser::parse;
pub use reduce::reduce_model;
pub use rewrite::apply;
pub use serialize::serialize;
