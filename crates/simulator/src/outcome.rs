use serde::{Deserialize, Serialize};

use crate::typedef::{FrameId, PageId, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    Hit,
    Fault,
}

/// The result of processing one reference, as handed to a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub page: PageId,
    pub time: Timestamp,
    pub kind: AccessKind,
    /// The frame that holds `page` after the access.
    pub frame: FrameId,
    /// The page evicted to make room, on a fault with no free frame.
    pub victim: Option<PageId>,
    /// Frame contents after the access, in slot order.
    pub frames: Vec<Option<PageId>>,
}

impl StepOutcome {
    pub fn is_hit(&self) -> bool {
        self.kind == AccessKind::Hit
    }

    pub fn is_fault(&self) -> bool {
        self.kind == AccessKind::Fault
    }
}

/// Running fault and hit counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingTally {
    pub faults: usize,
    pub hits: usize,
}

impl PagingTally {
    pub(crate) fn record(&mut self, kind: AccessKind) {
        match kind {
            AccessKind::Hit => self.hits += 1,
            AccessKind::Fault => self.faults += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.faults + self.hits
    }
}

/// Everything a bulk run produces: one outcome per reference, in input order,
/// plus the final counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingReport {
    pub steps: Vec<StepOutcome>,
    pub tally: PagingTally,
}

impl PagingReport {
    pub fn fault_rate(&self) -> f64 {
        Self::rate(self.tally.faults, self.tally.total())
    }

    pub fn hit_rate(&self) -> f64 {
        Self::rate(self.tally.hits, self.tally.total())
    }

    fn rate(count: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_record() {
        let mut tally = PagingTally::default();
        tally.record(AccessKind::Fault);
        tally.record(AccessKind::Fault);
        tally.record(AccessKind::Hit);

        assert_eq!(tally, PagingTally { faults: 2, hits: 1 });
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_rates_of_empty_report() {
        let report = PagingReport {
            steps: Vec::new(),
            tally: PagingTally::default(),
        };
        assert_eq!(report.fault_rate(), 0.0);
        assert_eq!(report.hit_rate(), 0.0);
    }

    #[test]
    fn test_rates() {
        let report = PagingReport {
            steps: Vec::new(),
            tally: PagingTally { faults: 3, hits: 1 },
        };
        assert_eq!(report.fault_rate(), 0.75);
        assert_eq!(report.hit_rate(), 0.25);
    }
}
