//! Pool construction: archetype mixture, normalization, and naming.

use rand::RngCore;

use blotto_engine::{Allocation, NormalizeError, allocator, rules::MIN_PER_BATTLEFIELD};

use crate::archetype::{
    AntiStreakBlocker, Balanced, BoxedArchetype, ChaosAgent, DecoyGambit, DominoPlayer,
    EarlyBlitz, HighValueStacker, LowValueAttacker, MidRangeController, MinForceDominator,
    MirrorBaiter, NuclearOption, PointDenialSpecialist, RandomScatter, ReverseStacker,
    SpikeDistraction, StrategicSacrifice, StreakBreaker, ThreeStrikeHunter, TrojanHorse, Turtle,
    ValueThief, WaveStrategist,
};

/// One opponent in the pool: a normalized allocation plus its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub allocation: Allocation,
    pub name: String,
    pub archetype: String,
}

/// Builds a pool from an archetype mixture.
///
/// For each `(archetype, count)` pair this draws `count` raw weight vectors,
/// normalizes each with the generated-opponent floor, and attaches a unique
/// name (`label_1`, `label_2`, .. or a whimsical name for the random
/// archetype). Entry order follows the mixture, so a seeded generator
/// reproduces the pool exactly.
pub fn build_pool(
    mix: &[(BoxedArchetype, usize)],
    rng: &mut dyn RngCore,
) -> Result<Vec<PoolEntry>, NormalizeError> {
    let total: usize = mix.iter().map(|(_, count)| count).sum();
    let mut entries = Vec::with_capacity(total);
    for (archetype, count) in mix {
        for index in 0..*count {
            let weights = archetype.raw_weights(rng);
            let allocation = allocator::normalize(&weights, MIN_PER_BATTLEFIELD)?;
            let name = archetype.entry_name(index, rng);
            entries.push(PoolEntry {
                allocation,
                name,
                archetype: archetype.label().to_owned(),
            });
        }
    }
    Ok(entries)
}

/// The standard 9,950-opponent mixture.
#[must_use]
pub fn standard_mix() -> Vec<(BoxedArchetype, usize)> {
    vec![
        // core shapes
        (Box::new(HighValueStacker) as BoxedArchetype, 250),
        (Box::new(MidRangeController), 250),
        (Box::new(Balanced), 250),
        (Box::new(LowValueAttacker), 250),
        (Box::new(ReverseStacker), 250),
        (Box::new(Turtle), 250),
        // streak play
        (Box::new(AntiStreakBlocker), 350),
        (Box::new(ThreeStrikeHunter), 350),
        (Box::new(StreakBreaker), 300),
        (Box::new(EarlyBlitz), 300),
        // deception
        (Box::new(SpikeDistraction), 250),
        (Box::new(MirrorBaiter), 250),
        (Box::new(DecoyGambit), 200),
        // specials
        (Box::new(TrojanHorse), 100),
        (Box::new(ValueThief), 100),
        (Box::new(MinForceDominator), 100),
        (Box::new(PointDenialSpecialist), 100),
        (Box::new(StrategicSacrifice), 100),
        (Box::new(WaveStrategist), 100),
        (Box::new(DominoPlayer), 100),
        (Box::new(NuclearOption), 100),
        (Box::new(ChaosAgent), 100),
        // noise
        (Box::new(RandomScatter), 5550),
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use blotto_engine::rules::TOTAL_BUDGET;

    use super::*;
    use crate::archetype::all_archetypes;

    fn small_mix() -> Vec<(BoxedArchetype, usize)> {
        all_archetypes().into_iter().map(|a| (a, 5)).collect()
    }

    #[test]
    fn entries_respect_budget_and_floor() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pool = build_pool(&small_mix(), &mut rng).unwrap();
        assert_eq!(pool.len(), all_archetypes().len() * 5);
        for entry in &pool {
            assert_eq!(entry.allocation.iter().sum::<u32>(), TOTAL_BUDGET);
            assert!(entry.allocation.iter().all(|unit| unit >= MIN_PER_BATTLEFIELD));
        }
    }

    #[test]
    fn names_are_label_plus_one_based_index() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mix: Vec<(BoxedArchetype, usize)> = vec![(Box::new(Turtle), 3)];
        let pool = build_pool(&mix, &mut rng).unwrap();
        let names: Vec<_> = pool.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["turtle_1", "turtle_2", "turtle_3"]);
        assert!(pool.iter().all(|entry| entry.archetype == "turtle"));
    }

    #[test]
    fn seeded_pools_are_identical() {
        let mut first = Pcg32::seed_from_u64(99);
        let mut second = Pcg32::seed_from_u64(99);
        assert_eq!(
            build_pool(&small_mix(), &mut first).unwrap(),
            build_pool(&small_mix(), &mut second).unwrap()
        );
    }

    #[test]
    fn standard_mix_matches_the_advertised_size() {
        let total: usize = standard_mix().iter().map(|(_, count)| count).sum();
        assert_eq!(total, 9950);
    }
}
