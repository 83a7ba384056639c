//! Match resolution with the 3-strike streak rule.

use arrayvec::ArrayVec;

use crate::{
    Allocation,
    rules::{NUM_BATTLEFIELDS, STREAK_LENGTH, battlefield_value, remaining_points},
};

/// One of the two parties in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Outcome of a single battlefield.
///
/// `streak_triggered` marks the battlefield whose win completed a streak and
/// ended the match; no battlefields after it are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattlefieldEvent {
    pub index: usize,
    pub winner: Option<Side>,
    pub streak_triggered: bool,
}

/// Why the match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Termination {
    /// All battlefields were resolved.
    Exhausted,
    /// The given side won three battlefields in a row.
    StreakEnded(Side),
}

/// Complete result of one match, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name_a: String,
    pub name_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub events: ArrayVec<BattlefieldEvent, NUM_BATTLEFIELDS>,
    pub termination: Termination,
}

impl MatchResult {
    #[must_use]
    pub const fn scores(&self) -> (u32, u32) {
        (self.score_a, self.score_b)
    }

    /// Overall match winner, or `None` for a drawn match.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn side_name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.name_a,
            Side::B => &self.name_b,
        }
    }

    /// Human-readable per-battlefield log, one line per event plus a line
    /// for the streak trigger if the match ended early.
    #[must_use]
    pub fn log(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.events.len() + 1);
        for event in &self.events {
            let battlefield = event.index + 1;
            match event.winner {
                Some(side) => lines.push(format!(
                    "{} wins battlefield {battlefield} ({} pts)",
                    self.side_name(side),
                    battlefield_value(event.index)
                )),
                None => lines.push(format!("Battlefield {battlefield} is a draw")),
            }
            if event.streak_triggered
                && let Termination::StreakEnded(side) = self.termination
            {
                lines.push(format!(
                    "{} takes {STREAK_LENGTH} battlefields in a row and claims the remaining {} pts!",
                    self.side_name(side),
                    remaining_points(event.index)
                ));
            }
        }
        lines
    }
}

/// Resolves a match battlefield by battlefield.
///
/// The party committing strictly more units to a battlefield wins its
/// points; equal commitments are a draw that scores nobody and resets both
/// streak counters. A streak of [`STREAK_LENGTH`] wins awards every
/// remaining battlefield's points to the streaking party and ends the match.
/// Only one side can trigger at a given step: whatever incremented one
/// counter reset the other.
#[must_use]
pub fn resolve(a: &Allocation, b: &Allocation, name_a: &str, name_b: &str) -> MatchResult {
    let mut score_a = 0;
    let mut score_b = 0;
    let mut streak_a = 0;
    let mut streak_b = 0;
    let mut events = ArrayVec::new();
    let mut termination = Termination::Exhausted;

    for index in 0..NUM_BATTLEFIELDS {
        let winner = match a.get(index).cmp(&b.get(index)) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        };
        match winner {
            Some(Side::A) => {
                score_a += battlefield_value(index);
                streak_a += 1;
                streak_b = 0;
            }
            Some(Side::B) => {
                score_b += battlefield_value(index);
                streak_b += 1;
                streak_a = 0;
            }
            None => {
                streak_a = 0;
                streak_b = 0;
            }
        }

        let streak_triggered = streak_a == STREAK_LENGTH || streak_b == STREAK_LENGTH;
        events.push(BattlefieldEvent {
            index,
            winner,
            streak_triggered,
        });
        if streak_a == STREAK_LENGTH {
            score_a += remaining_points(index);
            termination = Termination::StreakEnded(Side::A);
            break;
        }
        if streak_b == STREAK_LENGTH {
            score_b += remaining_points(index);
            termination = Termination::StreakEnded(Side::B);
            break;
        }
    }

    MatchResult {
        name_a: name_a.to_owned(),
        name_b: name_b.to_owned(),
        score_a,
        score_b,
        events,
        termination,
    }
}
