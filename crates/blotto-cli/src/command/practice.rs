use std::path::PathBuf;

use anyhow::{Context as _, ensure};
use blotto_engine::Allocation;
use blotto_evaluator::{DEFAULT_LOSS_SAMPLES, PracticeSession};
use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::schema::PoolFile;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PracticeArg {
    /// Candidate allocation, e.g. "10,10,10,10,10,10,10,10,10,10"
    strategy: String,
    /// Pool file produced by `generate-pool`
    #[arg(long)]
    pool: PathBuf,
    /// RNG seed for loss sampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of losing matchups to sample
    #[arg(long, default_value_t = DEFAULT_LOSS_SAMPLES)]
    samples: usize,
    /// Replay the matchup against this pool index in full
    #[arg(long)]
    replay: Option<usize>,
}

pub(crate) fn run(arg: &PracticeArg) -> anyhow::Result<()> {
    let PracticeArg {
        strategy,
        pool,
        seed,
        samples,
        replay,
    } = arg;

    let candidate: Allocation = strategy
        .parse()
        .with_context(|| format!("Invalid strategy: {strategy:?}"))?;
    let entries = PoolFile::open(pool)?.into_entries()?;

    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    let mut rng = Pcg32::seed_from_u64(seed);
    let session = PracticeSession::new(candidate, "You", &entries, *samples, &mut rng);
    let summary = session.summary();

    let total = summary.opponent_count();
    println!("Opponents: {total}");
    println!(
        "Wins:   {:>6} ({:.1}%)",
        summary.win_count,
        percentage(summary.win_count, total)
    );
    println!(
        "Losses: {:>6} ({:.1}%)",
        summary.loss_count,
        percentage(summary.loss_count, total)
    );
    println!(
        "Draws:  {:>6} ({:.1}%)",
        summary.draw_count,
        percentage(summary.draw_count, total)
    );

    if !session.sampled_losses().is_empty() {
        println!();
        println!("Sampled losses (seed {seed}):");
        for &index in session.sampled_losses() {
            let entry = &entries[index];
            let (yours, theirs) = summary.scores[index];
            println!(
                "  #{index} {} [{}] {} -- you {yours}, them {theirs}",
                entry.name, entry.archetype, entry.allocation
            );
        }
    }

    if let Some(index) = replay {
        ensure!(
            *index < entries.len(),
            "replay index {index} out of range (pool has {} entries)",
            entries.len()
        );
        let result = session.replay(&entries, *index);
        println!();
        println!("Replay against {} [{}]:", entries[*index].name, entries[*index].archetype);
        for line in result.log() {
            println!("  {line}");
        }
        let (yours, theirs) = result.scores();
        println!("Final score: you {yours}, them {theirs}");
    }

    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
