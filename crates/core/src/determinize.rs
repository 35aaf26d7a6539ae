//! Determinization of probabilistic effects.
//!
//! A probabilistic effect `(probabilistic p1 o1 p2 o2 ...)` is turned into a
//! determinization record: every explicit outcome paired with its declaration
//! index and exact probability, plus a synthetic no-op outcome `(and)` when
//! the explicit probabilities leave implicit mass. Records feed two
//! selectors: the lazy Cartesian product over all records (all-outcomes
//! determinization) and the single most-likely-outcome choice.
//!
//! All probability arithmetic is exact; the sum-to-one comparisons carry no
//! epsilon.

use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::Serialize;

use crate::ast::{Node, Path};
use crate::effects::{collect_effects, ProbEffect};
use crate::error::RecastError;
use crate::prob::{format_probability, parse_probability};

/// One selectable outcome of a probabilistic effect.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeChoice {
    /// Position among the effect's outcomes in declaration order, the
    /// synthetic no-op taking the next index after the explicit ones.
    pub index: usize,
    pub probability: BigRational,
    pub outcome: Node,
}

/// Determinization record of one probabilistic effect.
///
/// Invariant: `choices` is never empty — an effect with no explicit
/// outcomes still yields the synthetic no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectOutcomes {
    pub action: Option<String>,
    pub path: Path,
    pub choices: Vec<OutcomeChoice>,
}

/// One chosen outcome within a determinization combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chosen<'a> {
    pub action: Option<&'a str>,
    pub path: &'a [usize],
    pub index: usize,
    pub outcome: &'a Node,
}

/// An ordered choice of one outcome per probabilistic effect, in
/// collection order.
pub type Combination<'a> = Vec<Chosen<'a>>;

/// The alternating (probability-literal, outcome) pairs of a
/// `probabilistic` list. Fails fast on anything malformed.
pub(crate) fn outcome_pairs(node: &Node) -> Result<Vec<(&str, &Node)>, RecastError> {
    if node.head() != Some("probabilistic") {
        return Err(RecastError::Structure(
            "expected a probabilistic effect".to_owned(),
        ));
    }
    let children = node.children().unwrap_or(&[]);
    if children.len() % 2 == 0 {
        return Err(RecastError::Structure(
            "probabilistic effect has a probability with no outcome".to_owned(),
        ));
    }
    let mut pairs = Vec::with_capacity(children.len() / 2);
    for i in (2..children.len()).step_by(2) {
        let literal = match &children[i - 1] {
            Node::Atom(a) => a.as_str(),
            Node::List(_) => {
                return Err(RecastError::Structure(
                    "expected a probability literal, found a list".to_owned(),
                ))
            }
        };
        pairs.push((literal, &children[i]));
    }
    Ok(pairs)
}

/// Build the determinization record for one collected effect.
///
/// Rejects explicit probabilities summing past 1; appends the synthetic
/// no-op exactly when the sum falls short of 1.
pub fn effect_outcomes(tree: &Node, effect: &ProbEffect) -> Result<EffectOutcomes, RecastError> {
    let node = tree.at(&effect.path).ok_or_else(|| {
        RecastError::Structure(format!("effect path {:?} does not resolve", effect.path))
    })?;
    let pairs = outcome_pairs(node)?;

    let mut choices = Vec::with_capacity(pairs.len() + 1);
    let mut total = BigRational::zero();
    for (index, (literal, outcome)) in pairs.into_iter().enumerate() {
        let probability = parse_probability(literal)?;
        total += probability.clone();
        choices.push(OutcomeChoice {
            index,
            probability,
            outcome: outcome.clone(),
        });
    }
    if total > BigRational::one() {
        return Err(RecastError::ProbabilitySum {
            action: effect.action.clone(),
            sum: format_probability(&total),
        });
    }
    if !total.is_one() {
        choices.push(OutcomeChoice {
            index: choices.len(),
            probability: BigRational::one() - total,
            outcome: Node::noop(),
        });
    }
    Ok(EffectOutcomes {
        action: effect.action.clone(),
        path: effect.path.clone(),
        choices,
    })
}

/// Collect every probabilistic effect of `tree` and build all records.
pub fn determinization_records(tree: &Node) -> Result<Vec<EffectOutcomes>, RecastError> {
    collect_effects(tree)
        .iter()
        .map(|effect| effect_outcomes(tree, effect))
        .collect()
}

/// Lazy iterator over the full Cartesian product of determinization
/// records. One combination is materialized per step; nothing is held
/// across steps, so callers can bound work with `take` without paying for
/// the whole product.
pub struct Combinations<'a> {
    records: &'a [EffectOutcomes],
    counters: Vec<usize>,
    done: bool,
}

/// All determinization combinations, first effect varying slowest.
///
/// An empty record list yields exactly one empty combination (the identity
/// determinization).
pub fn enumerate_determinizations(records: &[EffectOutcomes]) -> Combinations<'_> {
    Combinations {
        records,
        counters: vec![0; records.len()],
        done: false,
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Combination<'a>> {
        if self.done {
            return None;
        }
        let combination: Combination<'a> = self
            .records
            .iter()
            .zip(&self.counters)
            .map(|(record, &chosen)| {
                let choice = &record.choices[chosen];
                Chosen {
                    action: record.action.as_deref(),
                    path: &record.path,
                    index: choice.index,
                    outcome: &choice.outcome,
                }
            })
            .collect();

        // Odometer increment with the last effect fastest.
        let mut i = self.counters.len();
        while i > 0 {
            i -= 1;
            self.counters[i] += 1;
            if self.counters[i] < self.records[i].choices.len() {
                return Some(combination);
            }
            self.counters[i] = 0;
        }
        self.done = true;
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl Combinations<'_> {
    /// Exact number of combinations still to be yielded, when it fits in
    /// a `usize`.
    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let mut rest: usize = 0;
        let mut scale: usize = 1;
        for (record, &chosen) in self.records.iter().zip(&self.counters).rev() {
            let radix = record.choices.len();
            rest = rest.checked_add((radix - 1 - chosen).checked_mul(scale)?)?;
            scale = scale.checked_mul(radix)?;
        }
        rest.checked_add(1)
    }
}

/// One line of a determinization description: which outcome was chosen
/// for the effect of which action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceRecord {
    pub action: Option<String>,
    pub index: usize,
}

/// Description records for a combination, in collection order.
pub fn combination_records(combination: &Combination<'_>) -> Vec<ChoiceRecord> {
    combination
        .iter()
        .map(|chosen| ChoiceRecord {
            action: chosen.action.map(str::to_owned),
            index: chosen.index,
        })
        .collect()
}

/// Plain-text description of a combination: one
/// `<action-name> <chosen-outcome-index>` line per effect.
pub fn description_text(combination: &Combination<'_>) -> String {
    let mut out = String::new();
    for chosen in combination {
        out.push_str(chosen.action.unwrap_or("-"));
        out.push(' ');
        out.push_str(&chosen.index.to_string());
        out.push('\n');
    }
    out
}

/// The most-likely-outcome combination: per effect, the outcome with the
/// greatest probability under strict `>`, first seen winning ties. The
/// synthetic no-op carries the implicit leftover mass, so it wins exactly
/// when that mass strictly exceeds every explicit probability.
pub fn most_likely_outcome<'a>(records: &'a [EffectOutcomes]) -> Combination<'a> {
    let mut combination = Vec::with_capacity(records.len());
    for record in records {
        let best = record.choices.iter().reduce(|best, candidate| {
            if candidate.probability > best.probability {
                candidate
            } else {
                best
            }
        });
        let Some(best) = best else { continue };
        combination.push(Chosen {
            action: record.action.as_deref(),
            path: &record.path,
            index: best.index,
            outcome: &best.outcome,
        });
    }
    combination
}
