//! Batch evaluation of a candidate allocation against an opponent pool.
//!
//! The evaluator runs the match engine once per opponent, classifies every
//! matchup as a win, loss, or draw, and keeps the loss index set so losing
//! matchups can be sampled for inspection and replayed in full. The
//! [`PracticeSession`] object carries that state explicitly between calls;
//! nothing here touches global state or ambient randomness.

pub use self::{evaluation::*, session::*};

pub mod evaluation;
pub mod session;
