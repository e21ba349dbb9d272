use std::fmt;
use std::str::FromStr;

use memsim_error::{errconfig, errinput, Error};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::hole::Hole;
use crate::Result;

/// Rule for choosing among holes large enough for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPolicy {
    First,
    Best,
    Worst,
}

impl FitPolicy {
    pub const ALL: [FitPolicy; 3] = [FitPolicy::First, FitPolicy::Best, FitPolicy::Worst];
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitPolicy::First => "First Fit",
            FitPolicy::Best => "Best Fit",
            FitPolicy::Worst => "Worst Fit",
        };
        f.write_str(name)
    }
}

impl FromStr for FitPolicy {
    type Err = Error;

    /// Accepts `first`, `first-fit`, `firstfit` and the like.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name
            .strip_suffix("fit")
            .map(|n| n.trim_end_matches(&['-', '_', ' '][..]))
            .unwrap_or(name.as_str());
        match name {
            "first" => Ok(FitPolicy::First),
            "best" => Ok(FitPolicy::Best),
            "worst" => Ok(FitPolicy::Worst),
            _ => errinput!("unknown fit policy {s:?}, expected first, best or worst"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// The request goes into the hole at this input position.
    Allocated(usize),
    /// No hole is large enough. A normal outcome, not an error.
    NoFit,
}

/// The decision plus an untouched copy of the holes for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub policy: FitPolicy,
    pub request_size: u64,
    pub placement: Placement,
    pub holes: Vec<Hole>,
}

impl AllocationResult {
    pub fn selected(&self) -> Option<&Hole> {
        match self.placement {
            Placement::Allocated(index) => self.holes.get(index),
            Placement::NoFit => None,
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self.placement, Placement::Allocated(_))
    }

    /// Space left unused in the selected hole.
    pub fn leftover(&self) -> Option<u64> {
        self.selected().map(|hole| hole.size - self.request_size)
    }
}

/// Selects a hole for `request_size`, scanning in input order. Expects a
/// positive request; never modifies `holes`.
pub fn fit(holes: &[Hole], request_size: u64, policy: FitPolicy) -> Placement {
    let mut eligible = holes.iter().filter(|hole| hole.can_hold(request_size));

    let chosen = match policy {
        FitPolicy::First => eligible.next(),
        // strict comparisons keep the earliest of equal sizes
        FitPolicy::Best => eligible.fold(None, |best: Option<&Hole>, hole| match best {
            Some(b) if hole.size >= b.size => Some(b),
            _ => Some(hole),
        }),
        FitPolicy::Worst => eligible.fold(None, |worst: Option<&Hole>, hole| match worst {
            Some(w) if hole.size <= w.size => Some(w),
            _ => Some(hole),
        }),
    };

    chosen.map_or(Placement::NoFit, |hole| Placement::Allocated(hole.index))
}

/// Validates the request and hole sizes, then runs a single fit decision.
pub fn allocate(hole_sizes: &[u64], request_size: u64, policy: FitPolicy) -> Result<AllocationResult> {
    if hole_sizes.is_empty() {
        return errconfig!("at least one hole is required");
    }
    if request_size == 0 {
        return errconfig!("request size must be positive");
    }
    if let Some(index) = hole_sizes.iter().position(|&size| size == 0) {
        return errconfig!("hole {} has size 0, sizes must be positive", index);
    }

    let holes = Hole::from_sizes(hole_sizes);
    let placement = fit(&holes, request_size, policy);
    info!(%policy, request_size, ?placement, "allocation decided");

    Ok(AllocationResult {
        policy,
        request_size,
        placement,
        holes,
    })
}
