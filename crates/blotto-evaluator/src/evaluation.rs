//! One candidate against every pool member: scoring, classification, sampling.

use std::cmp::Ordering;

use rand::{Rng, seq::IndexedRandom};

use blotto_engine::{Allocation, battle};
use blotto_pool::PoolEntry;

/// Default number of losing matchups sampled for presentation.
pub const DEFAULT_LOSS_SAMPLES: usize = 5;

/// Classification of one matchup from the candidate's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchClass {
    Win,
    Loss,
    Draw,
}

/// Classifies a score pair from the candidate's perspective.
#[must_use]
pub fn classify(candidate_score: u32, opponent_score: u32) -> MatchClass {
    match candidate_score.cmp(&opponent_score) {
        Ordering::Greater => MatchClass::Win,
        Ordering::Less => MatchClass::Loss,
        Ordering::Equal => MatchClass::Draw,
    }
}

/// Aggregate result of evaluating a candidate against a pool.
///
/// The counts partition the pool exactly; `scores` holds the per-opponent
/// score pairs in pool order (needed for later sampling and replay), and
/// `loss_indices` the pool indices the candidate lost, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSummary {
    pub win_count: usize,
    pub loss_count: usize,
    pub draw_count: usize,
    pub scores: Vec<(u32, u32)>,
    pub loss_indices: Vec<usize>,
}

impl EvaluationSummary {
    #[must_use]
    pub fn opponent_count(&self) -> usize {
        self.scores.len()
    }
}

/// Runs the candidate against every pool entry.
///
/// Each matchup is an independent match resolution; evaluation order cannot
/// change which bucket an opponent lands in.
#[must_use]
pub fn evaluate(candidate: &Allocation, pool: &[PoolEntry]) -> EvaluationSummary {
    let mut summary = EvaluationSummary {
        win_count: 0,
        loss_count: 0,
        draw_count: 0,
        scores: Vec::with_capacity(pool.len()),
        loss_indices: Vec::new(),
    };
    for (index, entry) in pool.iter().enumerate() {
        let result = battle::resolve(candidate, &entry.allocation, "candidate", &entry.name);
        let (candidate_score, opponent_score) = result.scores();
        match classify(candidate_score, opponent_score) {
            MatchClass::Win => summary.win_count += 1,
            MatchClass::Loss => {
                summary.loss_count += 1;
                summary.loss_indices.push(index);
            }
            MatchClass::Draw => summary.draw_count += 1,
        }
        summary.scores.push((candidate_score, opponent_score));
    }
    summary
}

/// Samples up to `k` loss indices without replacement.
///
/// Returns every loss when fewer than `k` exist and an empty selection when
/// there are none. The result is sorted ascending for stable presentation;
/// which indices are drawn depends only on the injected generator.
pub fn sample_losses<R>(loss_indices: &[usize], k: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut sampled: Vec<usize> = loss_indices.choose_multiple(rng, k).copied().collect();
    sampled.sort_unstable();
    sampled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use blotto_pool::{BoxedArchetype, Turtle, build_pool};

    use super::*;

    fn pool(count: usize, seed: u64) -> Vec<PoolEntry> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mix: Vec<(BoxedArchetype, usize)> =
            blotto_pool::all_archetypes().into_iter().map(|a| (a, count)).collect();
        build_pool(&mix, &mut rng).unwrap()
    }

    #[test]
    fn counts_partition_the_pool() {
        let pool = pool(20, 17);
        let candidate: Allocation = "10,10,10,10,10,10,10,10,10,10".parse().unwrap();
        let summary = evaluate(&candidate, &pool);

        assert_eq!(
            summary.win_count + summary.loss_count + summary.draw_count,
            pool.len()
        );
        assert_eq!(summary.opponent_count(), pool.len());
        assert_eq!(summary.loss_indices.len(), summary.loss_count);
    }

    #[test]
    fn loss_indices_really_are_losses() {
        let pool = pool(10, 23);
        let candidate: Allocation = "2,2,2,2,2,2,2,2,2,82".parse().unwrap();
        let summary = evaluate(&candidate, &pool);

        for &index in &summary.loss_indices {
            let (candidate_score, opponent_score) = summary.scores[index];
            assert!(classify(candidate_score, opponent_score).is_loss());
        }
    }

    #[test]
    fn evaluation_against_empty_pool_is_empty() {
        let candidate: Allocation = "10,10,10,10,10,10,10,10,10,10".parse().unwrap();
        let summary = evaluate(&candidate, &[]);
        assert_eq!(summary.opponent_count(), 0);
        assert_eq!(summary.win_count + summary.loss_count + summary.draw_count, 0);
    }

    #[test]
    fn sampling_respects_the_bound() {
        let mut rng = Pcg32::seed_from_u64(4);
        let losses: Vec<usize> = (0..20).collect();

        let sampled = sample_losses(&losses, 5, &mut rng);
        assert_eq!(sampled.len(), 5);
        assert!(sampled.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(sampled.iter().all(|index| losses.contains(index)));

        // Fewer losses than requested: return them all.
        let sampled = sample_losses(&losses[..3], 5, &mut rng);
        assert_eq!(sampled, [0, 1, 2]);

        // No losses: empty selection, not an error.
        assert!(sample_losses(&[], 5, &mut rng).is_empty());
    }

    #[test]
    fn a_fresh_sample_may_differ_but_a_seeded_one_cannot() {
        let losses: Vec<usize> = (0..100).collect();
        let mut first = Pcg32::seed_from_u64(8);
        let mut second = Pcg32::seed_from_u64(8);
        assert_eq!(
            sample_losses(&losses, 5, &mut first),
            sample_losses(&losses, 5, &mut second)
        );
    }

    #[test]
    fn turtle_pool_draws_against_its_own_shape() {
        // A turtle-only pool hovers around 10 per battlefield; the uniform
        // candidate must never lose by more than the streak rule allows.
        let mut rng = Pcg32::seed_from_u64(6);
        let mix: Vec<(BoxedArchetype, usize)> = vec![(Box::new(Turtle), 50)];
        let pool = build_pool(&mix, &mut rng).unwrap();
        let candidate: Allocation = "10,10,10,10,10,10,10,10,10,10".parse().unwrap();
        let summary = evaluate(&candidate, &pool);
        assert_eq!(
            summary.win_count + summary.loss_count + summary.draw_count,
            50
        );
    }
}
