use memsim_error::Error;
use tracing::debug;

use crate::outcome::{PagingTally, StepOutcome};
use crate::pager::{validate_frame_count, Pager};
use crate::replacer::ReplacementPolicy;
use crate::typedef::PageId;
use crate::Result;

/// Live state of an incremental simulation: the pager, the counts so far and
/// the index of the next unprocessed reference.
#[derive(Clone, Debug)]
pub struct SimulationState {
    reference: Vec<PageId>,
    pager: Pager,
    tally: PagingTally,
    cursor: usize,
}

impl SimulationState {
    pub fn new(
        reference: Vec<PageId>,
        frame_count: usize,
        policy: ReplacementPolicy,
    ) -> Result<Self> {
        Ok(Self {
            reference,
            pager: Pager::new(frame_count, policy)?,
            tally: PagingTally::default(),
            cursor: 0,
        })
    }

    /// Processes exactly one reference. Fails with `Error::Exhausted`, leaving
    /// the state untouched, once every reference has been processed.
    pub fn step(&mut self) -> Result<(StepOutcome, PagingTally)> {
        let time = self.cursor;
        let Some(page) = self.reference.get(time).cloned() else {
            return Err(Error::Exhausted);
        };

        let outcome = self.pager.access(page, time, &self.reference[time + 1..]);
        self.tally.record(outcome.kind);
        self.cursor += 1;

        Ok((outcome, self.tally))
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.reference.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tally(&self) -> PagingTally {
        self.tally
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

/// Caller-owned handle for stepping through one simulation. The state is
/// created on the first `step` and dropped by `reset`; independent sessions
/// share nothing.
#[derive(Clone, Debug)]
pub struct PagingSession {
    reference: Vec<PageId>,
    frame_count: usize,
    policy: ReplacementPolicy,
    state: Option<SimulationState>,
}

impl PagingSession {
    /// Checks the configuration up front; no simulation state is built yet.
    pub fn new(
        reference: Vec<PageId>,
        frame_count: usize,
        policy: ReplacementPolicy,
    ) -> Result<Self> {
        validate_frame_count(frame_count)?;

        Ok(Self {
            reference,
            frame_count,
            policy,
            state: None,
        })
    }

    pub fn step(&mut self) -> Result<(StepOutcome, PagingTally)> {
        let state = match self.state.take() {
            Some(state) => state,
            None => {
                debug!(
                    policy = %self.policy,
                    frames = self.frame_count,
                    references = self.reference.len(),
                    "starting paging session"
                );
                SimulationState::new(self.reference.clone(), self.frame_count, self.policy)?
            }
        };
        self.state.insert(state).step()
    }

    /// Discards any simulation state. Safe to call at any time, any number of
    /// times; the next `step` starts over from the first reference.
    pub fn reset(&mut self) {
        if self.state.take().is_some() {
            debug!(policy = %self.policy, "paging session reset");
        }
    }

    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state
            .as_ref()
            .map_or(self.reference.is_empty(), SimulationState::is_exhausted)
    }

    pub fn cursor(&self) -> usize {
        self.state.as_ref().map_or(0, SimulationState::cursor)
    }

    pub fn remaining(&self) -> usize {
        self.reference.len() - self.cursor()
    }

    pub fn tally(&self) -> PagingTally {
        self.state
            .as_ref()
            .map_or_else(PagingTally::default, SimulationState::tally)
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().map(|&id| PageId::from(id)).collect()
    }

    #[test]
    fn test_state_created_on_first_step() {
        let mut session = PagingSession::new(pages(&[1, 2]), 2, ReplacementPolicy::Fifo).unwrap();
        assert!(!session.is_started());

        let (outcome, tally) = session.step().unwrap();
        assert!(session.is_started());
        assert_eq!(outcome.time, 0);
        assert_eq!(tally, PagingTally { faults: 1, hits: 0 });
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let result = PagingSession::new(pages(&[1]), 0, ReplacementPolicy::Lru);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_exhausted_is_repeatable_and_keeps_counts() {
        let mut session = PagingSession::new(pages(&[1, 1]), 1, ReplacementPolicy::Lru).unwrap();
        session.step().unwrap();
        session.step().unwrap();
        assert!(session.is_exhausted());

        for _ in 0..3 {
            assert_eq!(session.step(), Err(Error::Exhausted));
        }
        assert_eq!(session.tally(), PagingTally { faults: 1, hits: 1 });
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_empty_reference_is_exhausted_immediately() {
        let mut session = PagingSession::new(Vec::new(), 3, ReplacementPolicy::Optimal).unwrap();
        assert!(session.is_exhausted());
        assert_eq!(session.step(), Err(Error::Exhausted));
        assert_eq!(session.tally(), PagingTally::default());
    }

    #[test]
    fn test_reset_is_idempotent_and_restarts() {
        let mut session = PagingSession::new(pages(&[5, 6, 5]), 2, ReplacementPolicy::Fifo).unwrap();
        let (first, _) = session.step().unwrap();
        session.step().unwrap();

        session.reset();
        session.reset();
        assert!(!session.is_started());
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.tally(), PagingTally::default());

        let (again, tally) = session.step().unwrap();
        assert_eq!(again, first);
        assert_eq!(tally, PagingTally { faults: 1, hits: 0 });
    }

    #[test]
    fn test_independent_sessions() {
        let reference = pages(&[1, 2, 1]);
        let mut a = PagingSession::new(reference.clone(), 2, ReplacementPolicy::Lru).unwrap();
        let mut b = PagingSession::new(reference, 2, ReplacementPolicy::Lru).unwrap();

        a.step().unwrap();
        a.step().unwrap();
        assert_eq!(b.cursor(), 0);
        assert_eq!(b.step().unwrap().0.time, 0);
        assert_eq!(a.cursor(), 2);
    }
}
