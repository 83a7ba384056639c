//! Strategy archetypes: named heuristics producing raw weight vectors.
//!
//! Each archetype shapes a weight vector to express one opponent
//! personality. Archetypes never normalize; the caller feeds their output to
//! [`blotto_engine::allocator::normalize`], which applies the budget and the
//! per-battlefield floor. All randomness comes from the injected generator,
//! so a seeded source reproduces the exact same pool.
//!
//! Adding an archetype means implementing [`Archetype`] and listing it in
//! [`all_archetypes`]; the allocator, match engine, and evaluator are
//! untouched.

use std::fmt;

use rand::{Rng, RngCore, seq::IndexedRandom};
use rand_distr::{Dirichlet, Distribution, Normal};

use blotto_engine::{
    RawWeights,
    rules::{MIN_PER_BATTLEFIELD, NUM_BATTLEFIELDS, TOTAL_BUDGET},
};

use crate::names::NAME_POOL;

/// A named heuristic that produces raw weight vectors.
///
/// Implementations are stateless: they are pure functions of the injected
/// randomness and carry no identity beyond their label.
pub trait Archetype: fmt::Debug + Send + Sync {
    /// Label attached to every opponent generated by this archetype.
    fn label(&self) -> &'static str;

    /// Produces one raw weight vector. Entries are always non-negative.
    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights;

    #[must_use]
    fn clone_boxed(&self) -> BoxedArchetype;

    /// Produces `count` raw weight vectors.
    fn weight_batch(&self, count: usize, rng: &mut dyn RngCore) -> Vec<RawWeights> {
        (0..count).map(|_| self.raw_weights(rng)).collect()
    }

    /// Unique name for the `index`-th opponent generated by this archetype.
    fn entry_name(&self, index: usize, rng: &mut dyn RngCore) -> String {
        let _ = rng;
        format!("{}_{}", self.label(), index + 1)
    }
}

pub type BoxedArchetype = Box<dyn Archetype>;

impl Clone for BoxedArchetype {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl Archetype for BoxedArchetype {
    fn label(&self) -> &'static str {
        self.as_ref().label()
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        self.as_ref().raw_weights(rng)
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        self.as_ref().clone_boxed()
    }

    fn weight_batch(&self, count: usize, rng: &mut dyn RngCore) -> Vec<RawWeights> {
        self.as_ref().weight_batch(count, rng)
    }

    fn entry_name(&self, index: usize, rng: &mut dyn RngCore) -> String {
        self.as_ref().entry_name(index, rng)
    }
}

/// Every archetype the standard pool draws from.
#[must_use]
pub fn all_archetypes() -> Vec<BoxedArchetype> {
    vec![
        // core shapes
        Box::new(HighValueStacker),
        Box::new(MidRangeController),
        Box::new(Balanced),
        Box::new(LowValueAttacker),
        Box::new(ReverseStacker),
        Box::new(Turtle),
        // streak play
        Box::new(AntiStreakBlocker),
        Box::new(ThreeStrikeHunter),
        Box::new(StreakBreaker),
        Box::new(EarlyBlitz),
        // deception
        Box::new(SpikeDistraction),
        Box::new(MirrorBaiter),
        Box::new(DecoyGambit),
        // specials
        Box::new(TrojanHorse),
        Box::new(ValueThief),
        Box::new(MinForceDominator),
        Box::new(PointDenialSpecialist),
        Box::new(StrategicSacrifice),
        Box::new(WaveStrategist),
        Box::new(DominoPlayer),
        Box::new(NuclearOption),
        Box::new(ChaosAgent),
        // noise
        Box::new(RandomScatter),
    ]
}

fn uniform_weights(rng: &mut dyn RngCore, low: f64, high: f64) -> RawWeights {
    let mut weights = [0.0; NUM_BATTLEFIELDS];
    for weight in &mut weights {
        *weight = rng.random_range(low..high);
    }
    weights
}

/// Concentrates all weight on the four highest-value battlefields.
#[derive(Debug, Clone)]
pub struct HighValueStacker;

impl Archetype for HighValueStacker {
    fn label(&self) -> &'static str {
        "high_value_stacker"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        let split: [f64; 4] = Dirichlet::new([1.0; 4]).unwrap().sample(rng);
        weights[6..].copy_from_slice(&split);
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Contests only the four middle battlefields.
#[derive(Debug, Clone)]
pub struct MidRangeController;

impl Archetype for MidRangeController {
    fn label(&self) -> &'static str {
        "mid_range_controller"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        let split: [f64; 4] = Dirichlet::new([1.0; 4]).unwrap().sample(rng);
        weights[3..7].copy_from_slice(&split);
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Weights proportional to battlefield value with a small jitter.
#[derive(Debug, Clone)]
pub struct Balanced;

impl Archetype for Balanced {
    fn label(&self) -> &'static str {
        "balanced"
    }

    #[expect(clippy::cast_precision_loss)]
    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        for (index, weight) in weights.iter_mut().enumerate() {
            *weight = (index + 1) as f64 + rng.random_range(-0.5..0.5);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Spends everything on the five cheapest battlefields.
#[derive(Debug, Clone)]
pub struct LowValueAttacker;

impl Archetype for LowValueAttacker {
    fn label(&self) -> &'static str {
        "low_value_attacker"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        let split: [f64; 5] = Dirichlet::new([1.0; 5]).unwrap().sample(rng);
        weights[..5].copy_from_slice(&split);
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Weights descending from the cheapest battlefield, with noise.
#[derive(Debug, Clone)]
pub struct ReverseStacker;

impl Archetype for ReverseStacker {
    fn label(&self) -> &'static str {
        "reverse_stacker"
    }

    #[expect(clippy::cast_precision_loss)]
    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        for (index, weight) in weights.iter_mut().enumerate() {
            // Clamp at zero: the noise can push a low weight negative.
            *weight = ((NUM_BATTLEFIELDS - index) as f64 + normal.sample(rng)).max(0.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Near-uniform spread with a small integer perturbation per battlefield.
#[derive(Debug, Clone)]
pub struct Turtle;

impl Archetype for Turtle {
    fn label(&self) -> &'static str {
        "turtle"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let base = i32::try_from(TOTAL_BUDGET as usize / NUM_BATTLEFIELDS).expect("small constant");
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        for weight in &mut weights {
            let perturbed = base + rng.random_range(-2..=2);
            *weight = f64::from(perturbed.max(0));
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Contests every 3-battlefield segment to deny streaks anywhere.
#[derive(Debug, Clone)]
pub struct AntiStreakBlocker;

impl Archetype for AntiStreakBlocker {
    fn label(&self) -> &'static str {
        "anti_streak_blocker"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [1.0; NUM_BATTLEFIELDS];
        for start in 0..NUM_BATTLEFIELDS - 2 {
            let boost = rng.random_range(0.0..1.5);
            for weight in &mut weights[start..start + 3] {
                *weight += boost;
            }
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Loads one specific contiguous triple to hunt an early streak.
#[derive(Debug, Clone)]
pub struct ThreeStrikeHunter;

impl Archetype for ThreeStrikeHunter {
    fn label(&self) -> &'static str {
        "three_strike_hunter"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let start = rng.random_range(0..NUM_BATTLEFIELDS - 2);
        let mut weights = [1.0; NUM_BATTLEFIELDS];
        for weight in &mut weights[start..start + 3] {
            *weight += rng.random_range(3.0..6.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Reinforces every third battlefield to interrupt opposing runs.
#[derive(Debug, Clone)]
pub struct StreakBreaker;

impl Archetype for StreakBreaker {
    fn label(&self) -> &'static str {
        "streak_breaker"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        for index in (2..NUM_BATTLEFIELDS).step_by(3) {
            weights[index] += 2.0;
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Stacks the opening triple on top of a background spread.
#[derive(Debug, Clone)]
pub struct EarlyBlitz;

impl Archetype for EarlyBlitz {
    fn label(&self) -> &'static str {
        "early_blitz"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        let split: [f64; 3] = Dirichlet::new([1.0; 3]).unwrap().sample(rng);
        for (weight, part) in weights[..3].iter_mut().zip(split) {
            *weight = part * 2.0;
        }
        for weight in &mut weights {
            *weight += rng.random_range(0.5..1.5);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// One towering spike on a random battlefield over a flat spread.
#[derive(Debug, Clone)]
pub struct SpikeDistraction;

impl Archetype for SpikeDistraction {
    fn label(&self) -> &'static str {
        "spike_distraction"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let spike = rng.random_range(0..NUM_BATTLEFIELDS);
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        weights[spike] += rng.random_range(10.0..20.0);
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Boosts either the even or the odd battlefields, coin-flipped per draw.
#[derive(Debug, Clone)]
pub struct MirrorBaiter;

impl Archetype for MirrorBaiter {
    fn label(&self) -> &'static str {
        "mirror_baiter"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let offset = usize::from(rng.random_bool(0.5));
        let mut weights = [1.0; NUM_BATTLEFIELDS];
        for index in (offset..NUM_BATTLEFIELDS).step_by(2) {
            weights[index] += rng.random_range(1.0..3.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Slightly under-invests in its own most tempting battlefield.
#[derive(Debug, Clone)]
pub struct DecoyGambit;

impl Archetype for DecoyGambit {
    fn label(&self) -> &'static str {
        "decoy_gambit"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        let (high, _) = weights
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .expect("weights array is non-empty");
        weights[high] *= 0.95;
        for weight in &mut weights {
            *weight += rng.random_range(0.5..1.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Abandons one of the three most valuable battlefields entirely.
#[derive(Debug, Clone)]
pub struct TrojanHorse;

impl Archetype for TrojanHorse {
    fn label(&self) -> &'static str {
        "trojan_horse"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let decoy = rng.random_range(7..NUM_BATTLEFIELDS);
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        weights[decoy] = 0.0;
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Aims to narrowly contest the most valuable battlefield.
#[derive(Debug, Clone)]
pub struct ValueThief;

impl Archetype for ValueThief {
    fn label(&self) -> &'static str {
        "value_thief"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        weights[NUM_BATTLEFIELDS - 1] *= 0.9 + rng.random_range(-0.05..0.05);
        for weight in &mut weights {
            *weight += rng.random_range(0.5..1.5);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Harmonic decay: heaviest on the cheapest battlefields.
#[derive(Debug, Clone)]
pub struct MinForceDominator;

impl Archetype for MinForceDominator {
    fn label(&self) -> &'static str {
        "min_force_dominator"
    }

    #[expect(clippy::cast_precision_loss)]
    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        for (index, weight) in weights.iter_mut().enumerate() {
            *weight = 1.0 / (index + 1) as f64 + rng.random_range(0.0..0.2);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Guards the three most valuable battlefields over a flat spread.
#[derive(Debug, Clone)]
pub struct PointDenialSpecialist;

impl Archetype for PointDenialSpecialist {
    fn label(&self) -> &'static str {
        "point_denial_specialist"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [1.0; NUM_BATTLEFIELDS];
        for weight in &mut weights[NUM_BATTLEFIELDS - 3..] {
            *weight += rng.random_range(1.0..3.0);
        }
        for weight in &mut weights {
            *weight += rng.random_range(0.0..1.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Concedes two random battlefields to strengthen the rest.
#[derive(Debug, Clone)]
pub struct StrategicSacrifice;

impl Archetype for StrategicSacrifice {
    fn label(&self) -> &'static str {
        "strategic_sacrifice"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = uniform_weights(rng, 1.0, 2.0);
        for index in rand::seq::index::sample(rng, NUM_BATTLEFIELDS, 2) {
            weights[index] = 0.0;
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// A sine wave across the battlefields, plus a little noise.
#[derive(Debug, Clone)]
pub struct WaveStrategist;

impl Archetype for WaveStrategist {
    fn label(&self) -> &'static str {
        "wave_strategist"
    }

    #[expect(clippy::cast_precision_loss)]
    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        for (index, weight) in weights.iter_mut().enumerate() {
            let x = index as f64 * std::f64::consts::TAU / (NUM_BATTLEFIELDS - 1) as f64;
            *weight = x.sin() + 1.2 + rng.random_range(0.0..0.3);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Strengthens one of three fixed battlefield pairs.
#[derive(Debug, Clone)]
pub struct DominoPlayer;

impl Archetype for DominoPlayer {
    fn label(&self) -> &'static str {
        "domino_player"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        const PAIRS: [(usize, usize); 3] = [(0, 1), (3, 4), (6, 7)];
        let (first, second) = *PAIRS.choose(rng).expect("pair list is non-empty");
        let mut weights = [0.0; NUM_BATTLEFIELDS];
        weights[first] = rng.random_range(1.0..3.0);
        weights[second] = rng.random_range(1.0..3.0);
        for weight in &mut weights {
            *weight += rng.random_range(0.5..1.5);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Commits nearly the whole budget to a single battlefield.
///
/// The allocator's floor keeps every other battlefield at the minimum, so
/// the normalized allocation is one huge stack over a field of twos.
#[derive(Debug, Clone)]
pub struct NuclearOption;

impl Archetype for NuclearOption {
    fn label(&self) -> &'static str {
        "nuclear_option"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let target = rng.random_range(1..NUM_BATTLEFIELDS - 1);
        let mut weights = [f64::from(MIN_PER_BATTLEFIELD); NUM_BATTLEFIELDS];
        weights[target] = f64::from(TOTAL_BUDGET);
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Low-level noise with boosts at the first, middle, and last battlefield.
#[derive(Debug, Clone)]
pub struct ChaosAgent;

impl Archetype for ChaosAgent {
    fn label(&self) -> &'static str {
        "chaos_agent"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        let mut weights = uniform_weights(rng, 0.1, 1.0);
        for index in [0, NUM_BATTLEFIELDS / 2 - 1, NUM_BATTLEFIELDS - 1] {
            weights[index] += rng.random_range(1.0..3.0);
        }
        weights
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

/// Pure uniform noise; its opponents get whimsical names.
#[derive(Debug, Clone)]
pub struct RandomScatter;

impl Archetype for RandomScatter {
    fn label(&self) -> &'static str {
        "random"
    }

    fn raw_weights(&self, rng: &mut dyn RngCore) -> RawWeights {
        uniform_weights(rng, 0.0, 1.0)
    }

    fn entry_name(&self, index: usize, rng: &mut dyn RngCore) -> String {
        let name = NAME_POOL.choose(rng).expect("name pool is non-empty");
        format!("{}_{}", name, index + 1)
    }

    fn clone_boxed(&self) -> BoxedArchetype {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn every_archetype_emits_non_negative_weights() {
        let mut rng = Pcg32::seed_from_u64(7);
        for archetype in all_archetypes() {
            for weights in archetype.weight_batch(50, &mut rng) {
                assert!(
                    weights.iter().all(|weight| *weight >= 0.0),
                    "{} emitted a negative weight",
                    archetype.label()
                );
            }
        }
    }

    #[test]
    fn labels_are_unique() {
        let archetypes = all_archetypes();
        for (i, a) in archetypes.iter().enumerate() {
            for b in &archetypes[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        for archetype in all_archetypes() {
            let mut first = Pcg32::seed_from_u64(42);
            let mut second = Pcg32::seed_from_u64(42);
            assert_eq!(
                archetype.weight_batch(10, &mut first),
                archetype.weight_batch(10, &mut second),
                "{} is not reproducible under a fixed seed",
                archetype.label()
            );
        }
    }

    #[test]
    fn high_value_stacker_ignores_cheap_battlefields() {
        let mut rng = Pcg32::seed_from_u64(3);
        let weights = HighValueStacker.raw_weights(&mut rng);
        assert!(weights[..6].iter().all(|weight| *weight == 0.0));
        assert!(weights[6..].iter().sum::<f64>() > 0.0);
    }

    #[test]
    fn three_strike_hunter_loads_a_contiguous_triple() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let weights = ThreeStrikeHunter.raw_weights(&mut rng);
            let loaded: Vec<usize> = weights
                .iter()
                .enumerate()
                .filter(|(_, weight)| **weight > 1.0)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(loaded.len(), 3);
            assert_eq!(loaded[2] - loaded[0], 2);
        }
    }

    #[test]
    fn nuclear_option_targets_a_single_battlefield() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let weights = NuclearOption.raw_weights(&mut rng);
            let spikes = weights
                .iter()
                .filter(|weight| **weight == f64::from(TOTAL_BUDGET))
                .count();
            assert_eq!(spikes, 1);
            // Never the cheapest or the most valuable battlefield.
            assert_eq!(weights[0], f64::from(MIN_PER_BATTLEFIELD));
            assert_eq!(
                weights[NUM_BATTLEFIELDS - 1],
                f64::from(MIN_PER_BATTLEFIELD)
            );
        }
    }

    #[test]
    fn random_scatter_names_come_from_the_whimsical_pool() {
        let mut rng = Pcg32::seed_from_u64(9);
        let name = RandomScatter.entry_name(4, &mut rng);
        let (stem, suffix) = name.rsplit_once('_').unwrap();
        assert_eq!(suffix, "5");
        assert!(NAME_POOL.contains(&stem));
    }
}
