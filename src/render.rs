use serde::Serialize;
use simulator::{
    AllocationResult, PageId, PagingReport, PagingTally, Placement, ReplacementPolicy,
    StepOutcome,
};

pub(crate) fn json<T: Serialize>(value: &T) -> memsim_error::Result<String> {
    serde_json::to_string_pretty(value).map_err(|err| memsim_error::Error::IO(err.to_string()))
}

fn frame_cells(frames: &[Option<PageId>]) -> String {
    let cells: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => format!("{:>3}", page.to_string()),
            None => "  -".to_string(),
        })
        .collect();
    format!("[{} ]", cells.join(""))
}

pub(crate) fn step_line(outcome: &StepOutcome) -> String {
    let kind = if outcome.is_hit() { "hit  " } else { "FAULT" };
    let victim = outcome
        .victim
        .as_ref()
        .map(|v| format!("  evicted {v}"))
        .unwrap_or_default();
    format!(
        "t={:<3} page {:>4}  {}  frame {:<2} {}{}",
        outcome.time,
        outcome.page.to_string(),
        kind,
        outcome.frame,
        frame_cells(&outcome.frames),
        victim
    )
}

pub(crate) fn tally_line(tally: &PagingTally) -> String {
    format!("faults: {}  hits: {}", tally.faults, tally.hits)
}

pub(crate) fn report(policy: ReplacementPolicy, frames: usize, report: &PagingReport) -> String {
    let mut out = format!("{policy} with {frames} frame(s)\n");
    for step in &report.steps {
        out.push_str(&step_line(step));
        out.push('\n');
    }
    out.push_str(&format!(
        "{}  fault rate: {:.1}%",
        tally_line(&report.tally),
        report.fault_rate() * 100.0
    ));
    out
}

pub(crate) fn comparison(frames: usize, tallies: &[(ReplacementPolicy, PagingTally)]) -> String {
    let mut out = format!("{frames} frame(s)\n");
    for (policy, tally) in tallies {
        out.push_str(&format!("{:<8} {}\n", policy.to_string(), tally_line(tally)));
    }
    out.trim_end().to_string()
}

pub(crate) fn allocation(result: &AllocationResult) -> String {
    let holes: Vec<String> = result
        .holes
        .iter()
        .map(|hole| match result.placement {
            Placement::Allocated(index) if index == hole.index => format!("[{}*]", hole.size),
            _ => format!("[{}]", hole.size),
        })
        .collect();
    let decision = match (result.selected(), result.leftover()) {
        (Some(hole), Some(leftover)) => format!(
            "allocated to hole {} (size {}), {} unused",
            hole.index, hole.size, leftover
        ),
        _ => "no fit: no hole is large enough".to_string(),
    };
    format!(
        "{}, request {}\nholes: {}\n{}",
        result.policy,
        result.request_size,
        holes.join(" "),
        decision
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulator::{allocate, run_paging, FitPolicy};

    #[test]
    fn test_step_line_shows_victim() {
        let reference = vec![PageId::from(1), PageId::from(2)];
        let report = run_paging(&reference, 1, ReplacementPolicy::Fifo).unwrap();
        let line = step_line(&report.steps[1]);

        assert!(line.contains("FAULT"));
        assert!(line.contains("evicted 1"));
        assert!(line.ends_with("evicted 1"));
    }

    #[test]
    fn test_frame_cells_marks_empty() {
        assert_eq!(frame_cells(&[Some(PageId::from(7)), None]), "[  7  - ]");
    }

    #[test]
    fn test_allocation_marks_selected_hole() {
        let result = allocate(&[5, 10, 20], 10, FitPolicy::Worst).unwrap();
        let text = allocation(&result);
        assert!(text.contains("[5] [10] [20*]"));
        assert!(text.contains("10 unused"));
    }

    #[test]
    fn test_allocation_no_fit() {
        let result = allocate(&[5, 8], 10, FitPolicy::First).unwrap();
        assert!(allocation(&result).contains("no fit"));
    }
}
