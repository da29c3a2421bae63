use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SplitError {
    #[error("a settlement needs at least one participant")]
    NoParticipants,
    #[error("total amount must not be negative: {0}")]
    NegativeTotal(i64),
}

/// Where the division remainder of a 1/N split goes.
///
/// The legacy behavior, the bank narratively covering the remainder,
/// keeps every share at the truncated quotient and has no ledger
/// effect. The alternatives allocate the remainder explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Every participant pays the truncated share, the remainder
    /// is display only.
    #[default]
    BankAbsorbs,
    /// The requester pays the truncated share plus the remainder.
    FirstPayerAbsorbs,
    /// Every participant rounds up to the next whole unit when a
    /// remainder exists; the settlement overcollects.
    RoundUp,
}

impl fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RemainderPolicy::BankAbsorbs => "bank-absorbs",
            RemainderPolicy::FirstPayerAbsorbs => "first-payer-absorbs",
            RemainderPolicy::RoundUp => "round-up",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank-absorbs" => Ok(RemainderPolicy::BankAbsorbs),
            "first-payer-absorbs" => Ok(RemainderPolicy::FirstPayerAbsorbs),
            "round-up" => Ok(RemainderPolicy::RoundUp),
            other => Err(format!("unknown remainder policy: {}", other)),
        }
    }
}

/// A 1/N settlement split over whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub total: i64,
    pub participants: u32,
    pub share: i64,
    pub remainder: i64,
}

impl Split {
    /// Divide a total evenly among participants, truncating.
    ///
    /// For every valid result: `share * participants + remainder == total`
    /// and `0 <= remainder < participants`.
    pub fn divide(total: i64, participants: u32) -> Result<Split, SplitError> {
        if participants == 0 {
            return Err(SplitError::NoParticipants);
        }
        if total < 0 {
            return Err(SplitError::NegativeTotal(total));
        }
        let n = participants as i64;
        let share = total / n;
        Ok(Split {
            total,
            participants,
            share,
            remainder: total - share * n,
        })
    }

    /// Whether a UI should show the per-person figure at all.
    /// A zero share (in particular a zero total) is suppressed.
    pub fn is_displayable(&self) -> bool {
        self.share > 0
    }

    /// Per-participant amounts under a remainder policy, first
    /// entry belonging to the requester. The amounts sum to the
    /// total, except under `RoundUp` where they may exceed it.
    pub fn allocate(&self, policy: RemainderPolicy) -> Vec<i64> {
        let n = self.participants as usize;
        match policy {
            RemainderPolicy::BankAbsorbs => vec![self.share; n],
            RemainderPolicy::FirstPayerAbsorbs => {
                let mut amounts = vec![self.share; n];
                amounts[0] += self.remainder;
                amounts
            }
            RemainderPolicy::RoundUp => {
                let share = if self.remainder > 0 {
                    self.share + 1
                } else {
                    self.share
                };
                vec![share; n]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_even() {
        let split = Split::divide(15000, 3).unwrap();
        assert_eq!(split.share, 5000);
        assert_eq!(split.remainder, 0);
        assert!(split.is_displayable());
    }

    #[test]
    fn test_divide_with_remainder() {
        let split = Split::divide(16666, 3).unwrap();
        assert_eq!(split.share, 5555);
        assert_eq!(split.remainder, 1);
    }

    #[test]
    fn test_divide_zero_total() {
        let split = Split::divide(0, 4).unwrap();
        assert_eq!(split.share, 0);
        assert_eq!(split.remainder, 0);
        assert!(!split.is_displayable());
    }

    #[test]
    fn test_divide_rejects_zero_participants() {
        assert_eq!(Split::divide(15000, 0), Err(SplitError::NoParticipants));
    }

    #[test]
    fn test_divide_rejects_negative_total() {
        assert_eq!(Split::divide(-1, 3), Err(SplitError::NegativeTotal(-1)));
    }

    #[test]
    fn test_divide_invariants() {
        for total in [0, 1, 2, 999, 15000, 16666, 5_000_000] {
            for participants in 1..=12u32 {
                let split = Split::divide(total, participants).unwrap();
                assert_eq!(
                    split.share * participants as i64 + split.remainder,
                    total
                );
                assert!(split.remainder >= 0);
                assert!(split.remainder < participants as i64);
                assert!(split.share >= 0);
            }
        }
    }

    #[test]
    fn test_allocate_bank_absorbs() {
        let split = Split::divide(16666, 3).unwrap();
        let amounts = split.allocate(RemainderPolicy::BankAbsorbs);
        assert_eq!(amounts, vec![5555, 5555, 5555]);
        // One unit short by design, the bank note covers it.
        assert_eq!(amounts.iter().sum::<i64>(), 16665);
    }

    #[test]
    fn test_allocate_first_payer_absorbs() {
        let split = Split::divide(16666, 3).unwrap();
        let amounts = split.allocate(RemainderPolicy::FirstPayerAbsorbs);
        assert_eq!(amounts, vec![5556, 5555, 5555]);
        assert_eq!(amounts.iter().sum::<i64>(), 16666);
    }

    #[test]
    fn test_allocate_round_up() {
        let split = Split::divide(16666, 3).unwrap();
        let amounts = split.allocate(RemainderPolicy::RoundUp);
        assert_eq!(amounts, vec![5556, 5556, 5556]);
        assert!(amounts.iter().sum::<i64>() >= 16666);

        // No remainder, no rounding.
        let split = Split::divide(15000, 3).unwrap();
        assert_eq!(
            split.allocate(RemainderPolicy::RoundUp),
            vec![5000, 5000, 5000]
        );
    }
}
