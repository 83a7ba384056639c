//! Largest-remainder normalization of raw weight vectors.
//!
//! Strategy archetypes emit arbitrary non-negative weight vectors; this
//! module turns them into valid allocations. Every battlefield is first
//! reserved a floor of `min_per_field` units, the weights are rescaled to
//! the remaining budget and floored, and the rounding deficit is then handed
//! out one unit at a time to the largest fractional remainders (Hamilton
//! apportionment). Unlike naive per-field rounding this conserves the budget
//! exactly despite the floating-point rescale.

use crate::{
    Allocation, InvalidConfigurationError, InvalidInputError, NormalizeError,
    rules::{NUM_BATTLEFIELDS, TOTAL_BUDGET},
};

/// A raw, pre-normalization weight vector produced by a strategy archetype.
pub type RawWeights = [f64; NUM_BATTLEFIELDS];

/// Converts a raw weight vector into a budget-exact allocation with at least
/// `min_per_field` units on every battlefield.
///
/// Fails with [`NormalizeError::InvalidConfiguration`] when the floor alone
/// exceeds the budget (a configuration error, not a per-call condition) and
/// with [`NormalizeError::InvalidInput`] when the weights sum to zero, which
/// can arise from degenerate archetype draws.
///
/// Ties between equal fractional remainders go to the lowest battlefield
/// index, so the same input always yields the same output.
///
/// # Panics
///
/// Panics if any weight is negative; archetypes must only emit non-negative
/// weights.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize(weights: &RawWeights, min_per_field: u32) -> Result<Allocation, NormalizeError> {
    assert!(
        weights.iter().all(|weight| *weight >= 0.0),
        "raw weights must be non-negative"
    );

    let baseline = min_per_field * NUM_BATTLEFIELDS as u32;
    if baseline > TOTAL_BUDGET {
        return Err(InvalidConfigurationError { min_per_field }.into());
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(InvalidInputError.into());
    }

    let remaining = TOTAL_BUDGET - baseline;
    let mut units = [0; NUM_BATTLEFIELDS];
    let mut remainders = [(0, 0.0); NUM_BATTLEFIELDS];
    let mut floored = 0;
    for (index, weight) in weights.iter().enumerate() {
        let rescaled = weight / total * f64::from(remaining);
        let floor = rescaled.floor();
        units[index] = floor as u32;
        floored += units[index];
        remainders[index] = (index, rescaled - floor);
    }

    // Largest fractional remainder first; ties go to the lowest index.
    remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    let deficit = remaining - floored;
    for &(index, _) in remainders.iter().take(deficit as usize) {
        units[index] += 1;
    }

    for unit in &mut units {
        *unit += min_per_field;
    }
    Ok(Allocation::from_normalized(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MIN_PER_BATTLEFIELD;

    fn assert_valid(allocation: &Allocation, min_per_field: u32) {
        assert_eq!(allocation.iter().sum::<u32>(), TOTAL_BUDGET);
        assert!(allocation.iter().all(|unit| unit >= min_per_field));
    }

    #[test]
    fn conserves_budget_for_uniform_weights() {
        let allocation = normalize(&[1.0; NUM_BATTLEFIELDS], MIN_PER_BATTLEFIELD).unwrap();
        assert_valid(&allocation, MIN_PER_BATTLEFIELD);
        assert_eq!(allocation.units(), &[10; NUM_BATTLEFIELDS]);
    }

    #[test]
    fn conserves_budget_for_awkward_weights() {
        // Remainders that cannot divide evenly into the spare budget.
        let cases: &[RawWeights] = &[
            [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
            [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0],
            [1e-9, 1e-9, 1e-9, 1e-9, 1e-9, 1e-9, 1e-9, 1e-9, 1e-9, 1.0],
        ];
        for (min_per_field, weights) in [0, 1, 2, 5, 10].into_iter().zip(cases.iter().cycle()) {
            let allocation = normalize(weights, min_per_field).unwrap();
            assert_valid(&allocation, min_per_field);
        }
    }

    #[test]
    fn breaks_remainder_ties_by_lowest_index() {
        // Three equal weights rescale to 26.666.. each: deficit of 2 goes to
        // the first two battlefields.
        let weights = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let allocation = normalize(&weights, MIN_PER_BATTLEFIELD).unwrap();
        assert_eq!(allocation.units(), &[29, 29, 28, 2, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn is_deterministic_for_identical_input() {
        let weights = [0.3, 1.7, 0.3, 1.7, 0.3, 1.7, 0.3, 1.7, 0.3, 1.7];
        let first = normalize(&weights, MIN_PER_BATTLEFIELD).unwrap();
        let second = normalize(&weights, MIN_PER_BATTLEFIELD).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn clamps_single_battlefield_spikes_to_the_floor() {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        weights[4] = 100.0;
        let allocation = normalize(&weights, MIN_PER_BATTLEFIELD).unwrap();
        assert_valid(&allocation, MIN_PER_BATTLEFIELD);
        assert_eq!(allocation.get(4), 82);
        for index in (0..NUM_BATTLEFIELDS).filter(|index| *index != 4) {
            assert_eq!(allocation.get(index), MIN_PER_BATTLEFIELD);
        }
    }

    #[test]
    fn rejects_zero_weight_vector() {
        let err = normalize(&[0.0; NUM_BATTLEFIELDS], MIN_PER_BATTLEFIELD).unwrap_err();
        assert_eq!(err, NormalizeError::InvalidInput(InvalidInputError));
    }

    #[test]
    fn rejects_floor_exceeding_budget() {
        let err = normalize(&[1.0; NUM_BATTLEFIELDS], 11).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidConfiguration(InvalidConfigurationError { min_per_field: 11 })
        );
    }
}
