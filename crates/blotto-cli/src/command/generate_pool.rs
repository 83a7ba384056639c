use std::path::PathBuf;

use anyhow::ensure;
use blotto_pool::{PoolRow, standard_mix};
use chrono::Utc;
use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{schema::PoolFile, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GeneratePoolArg {
    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Pool size as a percentage of the standard mix (1-100)
    #[arg(long, default_value_t = 100)]
    scale: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GeneratePoolArg) -> anyhow::Result<()> {
    let GeneratePoolArg {
        seed,
        scale,
        output,
    } = arg;
    ensure!(
        (1..=100).contains(scale),
        "scale must be between 1 and 100, got {scale}"
    );

    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    let mut rng = Pcg32::seed_from_u64(seed);

    let mix = standard_mix()
        .into_iter()
        .map(|(archetype, count)| (archetype, (count * scale).div_ceil(100)))
        .collect::<Vec<_>>();

    eprintln!("Generating opponent pool (seed {seed})...");
    let entries = blotto_pool::build_pool(&mix, &mut rng)?;
    eprintln!("Generated {} opponents", entries.len());

    let pool = PoolFile {
        generated_at: Utc::now(),
        seed,
        rows: entries.iter().map(PoolRow::from).collect(),
    };
    Output::save_json(&pool, output.clone())?;

    Ok(())
}
