//! Opponent pool generation.
//!
//! A pool is a large synthetic population of opponent allocations, each
//! produced by a named [`Archetype`]: a weighting heuristic that emits raw
//! weight vectors which the engine's allocator then turns into valid
//! allocations. The pool is persisted as a table of [`PoolRow`]s and
//! consumed read-only by the batch evaluator.

pub use self::{archetype::*, names::*, pool::*, row::*};

pub mod archetype;
pub mod names;
pub mod pool;
pub mod row;
