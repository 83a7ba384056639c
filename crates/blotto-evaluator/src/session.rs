//! Explicit practice-session state.
//!
//! The session owns the candidate, its evaluation summary, and the current
//! loss sample. Re-drawing the sample reuses the retained loss index set
//! instead of re-running the full evaluation.

use rand::Rng;

use blotto_engine::{
    Allocation,
    battle::{self, MatchResult},
};
use blotto_pool::PoolEntry;

use crate::evaluation::{EvaluationSummary, evaluate, sample_losses};

/// One candidate's standing against a pool, plus the current loss sample.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    candidate: Allocation,
    candidate_name: String,
    summary: EvaluationSummary,
    sampled_losses: Vec<usize>,
}

impl PracticeSession {
    /// Evaluates the candidate against the pool and draws the first sample
    /// of up to `samples` losing matchups.
    pub fn new<R>(
        candidate: Allocation,
        candidate_name: impl Into<String>,
        pool: &[PoolEntry],
        samples: usize,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let summary = evaluate(&candidate, pool);
        let sampled_losses = sample_losses(&summary.loss_indices, samples, rng);
        Self {
            candidate,
            candidate_name: candidate_name.into(),
            summary,
            sampled_losses,
        }
    }

    #[must_use]
    pub const fn candidate(&self) -> &Allocation {
        &self.candidate
    }

    #[must_use]
    pub fn summary(&self) -> &EvaluationSummary {
        &self.summary
    }

    /// Pool indices of the currently sampled losing matchups.
    #[must_use]
    pub fn sampled_losses(&self) -> &[usize] {
        &self.sampled_losses
    }

    /// Re-draws the loss sample from the retained loss index set.
    pub fn resample<R>(&mut self, samples: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.sampled_losses = sample_losses(&self.summary.loss_indices, samples, rng);
    }

    /// Replays the matchup against the pool entry at `index` in full.
    ///
    /// This is the same computation the evaluation already counted, so the
    /// replayed score pair matches the recorded one exactly.
    #[must_use]
    pub fn replay(&self, pool: &[PoolEntry], index: usize) -> MatchResult {
        let entry = &pool[index];
        battle::resolve(
            &self.candidate,
            &entry.allocation,
            &self.candidate_name,
            &entry.name,
        )
    }
}
