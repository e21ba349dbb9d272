pub(crate) mod hole;
pub(crate) mod placement;

pub use hole::Hole;
pub use placement::{allocate, fit, AllocationResult, FitPolicy, Placement};
