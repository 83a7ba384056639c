//! Fixed rules of the game.
//!
//! Every match is contested over [`NUM_BATTLEFIELDS`] battlefields whose
//! point values are the battlefield's 1-based position. Both parties split
//! exactly [`TOTAL_BUDGET`] units; winning [`STREAK_LENGTH`] battlefields in
//! a row ends the match immediately and transfers every remaining point to
//! the streaking party.

/// Number of battlefields contested per match.
pub const NUM_BATTLEFIELDS: usize = 10;

/// Units each party distributes across the battlefields.
pub const TOTAL_BUDGET: u32 = 100;

/// Floor applied to every battlefield of a generated opponent.
///
/// Human-supplied allocations are not held to this floor; it only shapes the
/// synthetic pool.
pub const MIN_PER_BATTLEFIELD: u32 = 2;

/// Consecutive wins needed to trigger early termination.
pub const STREAK_LENGTH: u32 = 3;

/// Point value of each battlefield, by 0-based index.
pub const BATTLEFIELD_VALUES: [u32; NUM_BATTLEFIELDS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Sum of all battlefield values.
pub const TOTAL_POINTS: u32 = 55;

/// Points awarded for winning the battlefield at `index`.
#[must_use]
pub const fn battlefield_value(index: usize) -> u32 {
    BATTLEFIELD_VALUES[index]
}

/// Sum of the values of every battlefield strictly after `index`.
///
/// This is the bounty a streak claims when it triggers at `index`.
#[must_use]
pub const fn remaining_points(index: usize) -> u32 {
    let mut total = 0;
    let mut i = index + 1;
    while i < NUM_BATTLEFIELDS {
        total += BATTLEFIELD_VALUES[i];
        i += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_sum_to_total_points() {
        let sum: u32 = BATTLEFIELD_VALUES.iter().sum();
        assert_eq!(sum, TOTAL_POINTS);
    }

    #[test]
    fn remaining_points_after_each_index() {
        assert_eq!(remaining_points(0), 54);
        assert_eq!(remaining_points(2), 49);
        assert_eq!(remaining_points(8), 10);
        assert_eq!(remaining_points(9), 0);
    }

    #[test]
    fn remaining_points_complements_prefix() {
        for index in 0..NUM_BATTLEFIELDS {
            let prefix: u32 = BATTLEFIELD_VALUES[..=index].iter().sum();
            assert_eq!(remaining_points(index), TOTAL_POINTS - prefix);
        }
    }
}
