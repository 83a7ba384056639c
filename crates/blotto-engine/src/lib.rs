pub use self::{allocation::*, allocator::*, battle::*, rules::*};

pub mod allocation;
pub mod allocator;
pub mod battle;
pub mod rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("allocation sums to {sum}, expected {}", TOTAL_BUDGET)]
pub struct BudgetMismatchError {
    pub sum: u32,
}

/// Boundary validation for human-supplied strategy strings.
///
/// Each constraint failure is reported as its own variant so a player learns
/// exactly which rule their input broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseAllocationError {
    #[display("could not parse every value as an integer")]
    Unparseable,
    #[display("expected {} values, got {count}", NUM_BATTLEFIELDS)]
    WrongLength { count: usize },
    #[display("values sum to {sum}, but must sum to {}", TOTAL_BUDGET)]
    BudgetMismatch { sum: i64 },
    #[display("all values must be non-negative")]
    NegativeValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("minimum of {min_per_field} units per battlefield exceeds the budget of {}", TOTAL_BUDGET)]
pub struct InvalidConfigurationError {
    pub min_per_field: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("weight vector sums to zero")]
pub struct InvalidInputError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum NormalizeError {
    InvalidConfiguration(InvalidConfigurationError),
    InvalidInput(InvalidInputError),
}
