use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use blotto_pool::{PoolEntry, PoolRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted opponent pool: a small header plus one row per opponent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolFile {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub rows: Vec<PoolRow>,
}

impl PoolFile {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open pool file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let pool = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to read pool file: {}", path.display()))?;
        Ok(pool)
    }

    /// Reconstructs the opponents, validating each row's budget.
    pub fn into_entries(self) -> anyhow::Result<Vec<PoolEntry>> {
        self.rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                PoolEntry::try_from(row)
                    .with_context(|| format!("Invalid allocation in pool row {index}"))
            })
            .collect()
    }
}
