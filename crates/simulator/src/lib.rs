//! Deterministic replay engines for two classic memory-management exercises:
//! page replacement under a fixed frame budget, and contiguous allocation
//! against a list of free holes.

mod allocation;
mod frame;
mod outcome;
mod pager;
mod paging;
mod recency;
mod replacer;
mod session;
mod typedef;

pub use allocation::{allocate, fit, AllocationResult, FitPolicy, Hole, Placement};
pub use frame::FrameSet;
pub use outcome::{AccessKind, PagingReport, PagingTally, StepOutcome};
pub use pager::Pager;
pub use paging::{compare_policies, run_paging};
pub use replacer::ReplacementPolicy;
pub use session::{PagingSession, SimulationState};
pub use typedef::{FrameId, PageId, Timestamp};

pub use memsim_error::Error;

pub type Result<T> = std::result::Result<T, memsim_error::Error>;
