//! The allocation transition function and summary derivation.

use jars_domain::{Configuration, Jar, JarsState, Summary};

use crate::{intent::ensure_finite, CoreError, Intent};

/// Number of decimal places kept by every derived amount.
pub const AMOUNT_DECIMALS: i32 = 4;

const AMOUNT_SCALE: f64 = 10_000.0;

/// 2^52: from here up every `f64` is a whole number.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Rounds to four decimal places, resolving ties to the even neighbour.
///
/// The tie is decided on the scaled binary value, so `round4(0.00025)` is
/// `0.0002` while `round4(0.00035)` is `0.0004`.
///
/// Values too large to carry four decimals in an `f64` are returned as-is;
/// scaling them up and back would only move them by an ulp.
pub fn round4(value: f64) -> f64 {
    let scaled = value * AMOUNT_SCALE;
    if scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round_ties_even() / AMOUNT_SCALE
}

/// Derives the summary for a configuration.
///
/// Each jar amount is rounded on its own and the total is the rounded sum of
/// those rounded amounts (summed in engine order), never a rounding of the
/// raw product sum.
pub fn derive_summary(config: &Configuration) -> Summary {
    let mut amounts = [0.0; 6];
    for (jar, weight) in config.weights() {
        amounts[jar.index()] = round4(weight * config.income);
    }
    let total = round4(amounts.iter().fold(0.0, |acc, amount| acc + amount));
    Summary::from_amounts(amounts, total)
}

/// Applies one intent to `state` and returns the next state.
///
/// Pure: `state` is never modified, and a failed call leaves the caller with
/// the state it already had.
pub fn apply(state: &JarsState, intent: Intent) -> Result<JarsState, CoreError> {
    let mut next = *state;
    match intent {
        Intent::SetIncome(income) => {
            next.config.income = ensure_finite(intent.tag(), income)?;
        }
        Intent::SetWeight { jar, weight } => {
            let weight = ensure_finite(intent.tag(), weight)?;
            next.config.set_weight(jar, weight);
        }
        Intent::Reset => {
            next.config.restore_default_weights();
            next.summary = Summary::ZERO;
        }
        Intent::Recompute => {
            next.summary = derive_summary(&next.config);
        }
    }
    Ok(next)
}

/// Applies a sequence of intents, stopping at the first failure.
pub fn apply_all<I>(state: &JarsState, intents: I) -> Result<JarsState, CoreError>
where
    I: IntoIterator<Item = Intent>,
{
    intents
        .into_iter()
        .try_fold(*state, |current, intent| apply(&current, intent))
}

/// Amount of income left outside the jars for the current summary.
pub fn unallocated_amount(state: &JarsState) -> f64 {
    round4(state.config.income - state.summary.total)
}

/// Share of the summary total held by `jar`, or zero when nothing is allocated.
pub fn share_of_total(summary: &Summary, jar: Jar) -> f64 {
    if summary.total == 0.0 {
        0.0
    } else {
        summary.amount(jar) / summary.total
    }
}
