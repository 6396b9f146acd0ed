use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One unvalidated row of a division, exactly as an input loader produced it.
///
/// Counts are signed so that negative values can be reported instead of
/// silently wrapping; `against[j]` is the number of games left with team `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub remaining: i64,
    pub against: Vec<i64>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, wins: i64, losses: i64, remaining: i64, against: Vec<i64>) -> Self {
        TeamRecord {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
}

impl Team {
    pub fn max_wins(&self) -> u64 {
        self.wins as u64 + self.remaining as u64
    }
}
