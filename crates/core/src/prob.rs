//! Exact-rational probability literals.
//!
//! PPDDL writes outcome probabilities as fractions (`9/10`), decimals
//! (`0.75`), or integers (`1`). All probability bookkeeping is done with
//! arbitrary-precision rationals so that sum-to-one comparisons stay exact;
//! floating point never enters the pipeline.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::RecastError;

/// Parse a probability literal into an exact rational in (0, 1].
pub fn parse_probability(literal: &str) -> Result<BigRational, RecastError> {
    let value = parse_rational(literal)?;
    if value <= BigRational::zero() || value > BigRational::one() {
        return Err(RecastError::Probability {
            literal: literal.to_owned(),
            reason: "must lie in (0, 1]".to_owned(),
        });
    }
    Ok(value)
}

/// Render a rational the way PPDDL writes it: `1` for integers, `n/d`
/// otherwise. `BigRational` keeps values reduced, so output is canonical.
pub fn format_probability(value: &BigRational) -> String {
    if value.denom().is_one() {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

fn parse_rational(literal: &str) -> Result<BigRational, RecastError> {
    let text = literal.trim();
    let invalid = |reason: &str| RecastError::Probability {
        literal: literal.to_owned(),
        reason: reason.to_owned(),
    };

    if let Some((numer, denom)) = text.split_once('/') {
        let numer: BigInt = numer
            .trim()
            .parse()
            .map_err(|_| invalid("numerator is not an integer"))?;
        let denom: BigInt = denom
            .trim()
            .parse()
            .map_err(|_| invalid("denominator is not an integer"))?;
        if denom.is_zero() {
            return Err(invalid("denominator is zero"));
        }
        return Ok(BigRational::new(numer, denom));
    }

    if let Some((whole, frac)) = text.split_once('.') {
        let digits = format!("{}{}", whole, frac);
        let numer: BigInt = digits
            .parse()
            .map_err(|_| invalid("not a decimal number"))?;
        let denom = num_traits::pow(BigInt::from(10), frac.len());
        return Ok(BigRational::new(numer, denom));
    }

    let numer: BigInt = text.parse().map_err(|_| invalid("not a number"))?;
    Ok(BigRational::from_integer(numer))
}
