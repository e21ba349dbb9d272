pub(crate) mod fifo_replacer;
pub(crate) mod lru_replacer;
pub(crate) mod optimal_replacer;

use std::fmt;
use std::str::FromStr;

use memsim_error::{errinput, Error};
use serde::{Deserialize, Serialize};

/// Victim selection rule applied on a fault when every frame is occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    /// Evict the page loaded longest ago.
    Fifo,
    /// Evict the page referenced longest ago.
    Lru,
    /// Evict the page whose next reference lies farthest in the future.
    Optimal,
}

impl ReplacementPolicy {
    pub const ALL: [ReplacementPolicy; 3] = [
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Lru,
        ReplacementPolicy::Optimal,
    ];

    /// Whether victim selection needs the remainder of the reference string.
    pub fn needs_future(&self) -> bool {
        matches!(self, ReplacementPolicy::Optimal)
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplacementPolicy::Fifo => "FIFO",
            ReplacementPolicy::Lru => "LRU",
            ReplacementPolicy::Optimal => "Optimal",
        };
        f.write_str(name)
    }
}

impl FromStr for ReplacementPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(ReplacementPolicy::Fifo),
            "lru" => Ok(ReplacementPolicy::Lru),
            "opt" | "optimal" => Ok(ReplacementPolicy::Optimal),
            other => errinput!("unknown replacement policy {other:?}, expected fifo, lru or optimal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("FIFO".parse::<ReplacementPolicy>(), Ok(ReplacementPolicy::Fifo));
        assert_eq!(" lru".parse::<ReplacementPolicy>(), Ok(ReplacementPolicy::Lru));
        assert_eq!("opt".parse::<ReplacementPolicy>(), Ok(ReplacementPolicy::Optimal));
        assert!("clock".parse::<ReplacementPolicy>().is_err());
    }

    #[test]
    fn test_only_optimal_needs_future() {
        assert!(!ReplacementPolicy::Fifo.needs_future());
        assert!(!ReplacementPolicy::Lru.needs_future());
        assert!(ReplacementPolicy::Optimal.needs_future());
    }
}
