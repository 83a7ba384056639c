use anyhow::Context as _;
use blotto_engine::{
    Allocation,
    battle::{self, Side},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DuelArg {
    /// First allocation, e.g. "20,20,20,1,1,1,1,1,1,34"
    a: String,
    /// Second allocation
    b: String,
    /// Display name for the first party
    #[arg(long, default_value = "Player A")]
    name_a: String,
    /// Display name for the second party
    #[arg(long, default_value = "Player B")]
    name_b: String,
}

pub(crate) fn run(arg: &DuelArg) -> anyhow::Result<()> {
    let DuelArg {
        a,
        b,
        name_a,
        name_b,
    } = arg;

    let allocation_a: Allocation = a
        .parse()
        .with_context(|| format!("Invalid allocation for {name_a}: {a:?}"))?;
    let allocation_b: Allocation = b
        .parse()
        .with_context(|| format!("Invalid allocation for {name_b}: {b:?}"))?;

    let result = battle::resolve(&allocation_a, &allocation_b, name_a, name_b);
    for line in result.log() {
        println!("{line}");
    }
    println!();
    println!(
        "Final score: {name_a} {}, {name_b} {}",
        result.score_a, result.score_b
    );
    match result.winner() {
        Some(Side::A) => println!("{name_a} wins the match"),
        Some(Side::B) => println!("{name_b} wins the match"),
        None => println!("The match is a draw"),
    }

    Ok(())
}
