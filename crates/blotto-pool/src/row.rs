//! Persisted row schema for the opponent table.

use serde::{Deserialize, Serialize};

use blotto_engine::{Allocation, BudgetMismatchError};

use crate::pool::PoolEntry;

/// One row of the persisted opponent table.
///
/// The serialized field names are the storage contract: allocation columns
/// `C1..C10`, the opponent `name`, and the archetype label under `type`.
/// A single row reconstructs one opponent without further transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRow {
    #[serde(rename = "C1")]
    pub c1: u32,
    #[serde(rename = "C2")]
    pub c2: u32,
    #[serde(rename = "C3")]
    pub c3: u32,
    #[serde(rename = "C4")]
    pub c4: u32,
    #[serde(rename = "C5")]
    pub c5: u32,
    #[serde(rename = "C6")]
    pub c6: u32,
    #[serde(rename = "C7")]
    pub c7: u32,
    #[serde(rename = "C8")]
    pub c8: u32,
    #[serde(rename = "C9")]
    pub c9: u32,
    #[serde(rename = "C10")]
    pub c10: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub archetype: String,
}

impl From<&PoolEntry> for PoolRow {
    fn from(entry: &PoolEntry) -> Self {
        let units = entry.allocation.units();
        PoolRow {
            c1: units[0],
            c2: units[1],
            c3: units[2],
            c4: units[3],
            c5: units[4],
            c6: units[5],
            c7: units[6],
            c8: units[7],
            c9: units[8],
            c10: units[9],
            name: entry.name.clone(),
            archetype: entry.archetype.clone(),
        }
    }
}

impl TryFrom<PoolRow> for PoolEntry {
    type Error = BudgetMismatchError;

    fn try_from(row: PoolRow) -> Result<Self, Self::Error> {
        let units = [
            row.c1, row.c2, row.c3, row.c4, row.c5, row.c6, row.c7, row.c8, row.c9, row.c10,
        ];
        let allocation = Allocation::new(units)?;
        Ok(PoolEntry {
            allocation,
            name: row.name,
            archetype: row.archetype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> PoolEntry {
        PoolEntry {
            allocation: Allocation::new([12, 8, 10, 10, 10, 10, 10, 10, 10, 10]).unwrap(),
            name: "turtle_7".to_owned(),
            archetype: "turtle".to_owned(),
        }
    }

    #[test]
    fn entry_round_trips_through_a_row() {
        let original = entry();
        let row = PoolRow::from(&original);
        let restored = PoolEntry::try_from(row).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn row_serializes_with_contract_field_names() {
        let row = PoolRow::from(&entry());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["C1"], 12);
        assert_eq!(json["C10"], 10);
        assert_eq!(json["name"], "turtle_7");
        assert_eq!(json["type"], "turtle");
    }

    #[test]
    fn row_with_broken_budget_is_rejected() {
        let mut row = PoolRow::from(&entry());
        row.c1 = 13;
        assert_eq!(
            PoolEntry::try_from(row),
            Err(BudgetMismatchError { sum: 101 })
        );
    }
}
