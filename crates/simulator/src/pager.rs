use memsim_error::errconfig;
use tracing::{debug, trace};

use crate::frame::FrameSet;
use crate::outcome::{AccessKind, StepOutcome};
use crate::recency::RecencyIndex;
use crate::replacer::fifo_replacer::FifoReplacer;
use crate::replacer::{lru_replacer, optimal_replacer, ReplacementPolicy};
use crate::typedef::{FrameId, PageId, Timestamp};
use crate::Result;

/// Frame-resident state of one paging simulation and the transition that
/// replays a single reference against it.
#[derive(Clone, Debug)]
pub struct Pager {
    policy: ReplacementPolicy,
    frames: FrameSet,
    recency: RecencyIndex,
    load_order: FifoReplacer,
}

pub(crate) fn validate_frame_count(frame_count: usize) -> Result<()> {
    if frame_count == 0 {
        return errconfig!("frame count must be at least 1");
    }
    Ok(())
}

impl Pager {
    pub fn new(frame_count: usize, policy: ReplacementPolicy) -> Result<Self> {
        validate_frame_count(frame_count)?;

        Ok(Self {
            policy,
            frames: FrameSet::new(frame_count),
            recency: RecencyIndex::new(),
            load_order: FifoReplacer::new(),
        })
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Resident pages from oldest load to newest.
    pub fn resident_in_load_order(&self) -> Vec<&PageId> {
        self.load_order.iter().collect()
    }

    /// Replays one reference to `page` at logical `time`. `future` is the part
    /// of the reference string after `time`; only Optimal looks at it.
    pub fn access(&mut self, page: PageId, time: Timestamp, future: &[PageId]) -> StepOutcome {
        self.recency.record_access(&page, time);

        if let Some(frame_id) = self.frames.slot_of(&page) {
            trace!(%page, time, frame_id, "hit");
            return self.outcome(page, time, AccessKind::Hit, frame_id, None);
        }

        let (frame_id, victim) = match self.frames.first_free() {
            Some(frame_id) => (frame_id, None),
            None => {
                let frame_id = self.select_victim(future);
                (frame_id, self.frames.get(frame_id).cloned())
            }
        };

        if let Some(victim) = &victim {
            // FIFO already popped its victim while selecting it
            self.load_order.remove(victim);
            debug!(policy = %self.policy, %victim, %page, time, frame_id, "evict");
        }

        self.frames.load(frame_id, page.clone());
        self.load_order.record_load(page.clone());
        trace!(%page, time, frame_id, "fault");

        self.outcome(page, time, AccessKind::Fault, frame_id, victim)
    }

    /// Chooses the frame to overwrite. Only called when every frame is full.
    fn select_victim(&mut self, future: &[PageId]) -> FrameId {
        let frame_id = match self.policy {
            ReplacementPolicy::Fifo => self
                .load_order
                .evict()
                .and_then(|page| self.frames.slot_of(&page)),
            ReplacementPolicy::Lru => lru_replacer::select_victim(&self.frames, &self.recency),
            ReplacementPolicy::Optimal => optimal_replacer::select_victim(&self.frames, future),
        };
        frame_id.expect("A full frame set always has a victim.")
    }

    fn outcome(
        &self,
        page: PageId,
        time: Timestamp,
        kind: AccessKind,
        frame: FrameId,
        victim: Option<PageId>,
    ) -> StepOutcome {
        StepOutcome {
            page,
            time,
            kind,
            frame,
            victim,
            frames: self.frames.slots().to_vec(),
        }
    }
}
