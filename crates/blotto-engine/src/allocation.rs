//! A party's split of the unit budget across the battlefields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    BudgetMismatchError, ParseAllocationError,
    rules::{NUM_BATTLEFIELDS, TOTAL_BUDGET},
};

/// An ordered split of [`TOTAL_BUDGET`] units across the battlefields.
///
/// The only invariant carried by the type is budget conservation: the entries
/// always sum to exactly [`TOTAL_BUDGET`]. Allocations produced by
/// [`normalize`](crate::allocator::normalize) additionally respect the
/// generated-opponent floor, but that is a property of the allocator, not of
/// this type.
///
/// # Example
///
/// ```
/// use blotto_engine::Allocation;
///
/// let allocation: Allocation = "10,10,10,10,10,10,10,10,10,10".parse().unwrap();
/// assert_eq!(allocation.get(9), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation([u32; NUM_BATTLEFIELDS]);

impl Allocation {
    /// Creates an allocation from raw unit counts.
    ///
    /// Fails if the units do not sum to exactly [`TOTAL_BUDGET`].
    pub fn new(units: [u32; NUM_BATTLEFIELDS]) -> Result<Self, BudgetMismatchError> {
        let sum = units.iter().sum::<u32>();
        if sum != TOTAL_BUDGET {
            return Err(BudgetMismatchError { sum });
        }
        Ok(Self(units))
    }

    /// Used by the allocator, whose arithmetic guarantees the budget.
    pub(crate) fn from_normalized(units: [u32; NUM_BATTLEFIELDS]) -> Self {
        debug_assert_eq!(units.iter().sum::<u32>(), TOTAL_BUDGET);
        Self(units)
    }

    #[must_use]
    pub const fn units(&self) -> &[u32; NUM_BATTLEFIELDS] {
        &self.0
    }

    /// Units committed to the battlefield at `index` (0-based).
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for unit in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{unit}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Allocation {
    type Err = ParseAllocationError;

    /// Parses a human-supplied strategy string: comma-separated integers.
    ///
    /// Checks run in a fixed order so the first broken constraint is the one
    /// reported: parse, length, budget, sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|token| token.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseAllocationError::Unparseable)?;

        if values.len() != NUM_BATTLEFIELDS {
            return Err(ParseAllocationError::WrongLength {
                count: values.len(),
            });
        }
        let sum: i64 = values.iter().sum();
        if sum != i64::from(TOTAL_BUDGET) {
            return Err(ParseAllocationError::BudgetMismatch { sum });
        }
        if values.iter().any(|value| *value < 0) {
            return Err(ParseAllocationError::NegativeValue);
        }

        let mut units = [0; NUM_BATTLEFIELDS];
        for (unit, value) in units.iter_mut().zip(&values) {
            *unit = u32::try_from(*value).expect("negative values rejected above");
        }
        Ok(Self(units))
    }
}

impl Serialize for Allocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Allocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = <[u32; NUM_BATTLEFIELDS]>::deserialize(deserializer)?;
        Allocation::new(units).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFORM: [u32; NUM_BATTLEFIELDS] = [10; NUM_BATTLEFIELDS];

    #[test]
    fn new_accepts_exact_budget() {
        let allocation = Allocation::new(UNIFORM).unwrap();
        assert_eq!(allocation.units(), &UNIFORM);
    }

    #[test]
    fn new_rejects_budget_mismatch() {
        let mut units = UNIFORM;
        units[0] = 11;
        assert_eq!(
            Allocation::new(units),
            Err(BudgetMismatchError { sum: 101 })
        );
    }

    #[test]
    fn parse_round_trips_through_display() {
        let allocation = Allocation::new([20, 20, 20, 1, 1, 1, 1, 1, 1, 34]).unwrap();
        let parsed: Allocation = allocation.to_string().parse().unwrap();
        assert_eq!(parsed, allocation);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let parsed: Allocation = " 10, 10 ,10,10,10,10,10,10,10,10 ".parse().unwrap();
        assert_eq!(parsed.units(), &UNIFORM);
    }

    #[test]
    fn parse_reports_unparseable_tokens() {
        let err = "10,ten,10,10,10,10,10,10,10,10"
            .parse::<Allocation>()
            .unwrap_err();
        assert_eq!(err, ParseAllocationError::Unparseable);
    }

    #[test]
    fn parse_reports_wrong_length() {
        let err = "10,10,10".parse::<Allocation>().unwrap_err();
        assert_eq!(err, ParseAllocationError::WrongLength { count: 3 });
    }

    #[test]
    fn parse_reports_budget_mismatch() {
        let err = "10,10,10,10,10,10,10,10,10,11"
            .parse::<Allocation>()
            .unwrap_err();
        assert_eq!(err, ParseAllocationError::BudgetMismatch { sum: 101 });
    }

    #[test]
    fn parse_reports_negative_values() {
        // Sums to 100, so the sign check is the one that fires.
        let err = "-5,15,10,10,10,10,10,10,10,20"
            .parse::<Allocation>()
            .unwrap_err();
        assert_eq!(err, ParseAllocationError::NegativeValue);
    }

    #[test]
    fn serde_rejects_invalid_budget() {
        let json = "[10,10,10,10,10,10,10,10,10,11]";
        assert!(serde_json::from_str::<Allocation>(json).is_err());

        let json = "[10,10,10,10,10,10,10,10,10,10]";
        let allocation: Allocation = serde_json::from_str(json).unwrap();
        assert_eq!(allocation.units(), &UNIFORM);
    }
}
