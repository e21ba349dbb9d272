use crate::outcome::{PagingReport, PagingTally};
use crate::pager::Pager;
use crate::replacer::ReplacementPolicy;
use crate::typedef::PageId;
use crate::Result;

/// Replays the whole reference string from time 0, emitting one outcome per
/// reference in input order.
pub fn run_paging(
    reference: &[PageId],
    frame_count: usize,
    policy: ReplacementPolicy,
) -> Result<PagingReport> {
    let mut pager = Pager::new(frame_count, policy)?;
    let mut tally = PagingTally::default();

    let steps = reference
        .iter()
        .enumerate()
        .map(|(time, page)| {
            let outcome = pager.access(page.clone(), time, &reference[time + 1..]);
            tally.record(outcome.kind);
            outcome
        })
        .collect();

    Ok(PagingReport { steps, tally })
}

/// Runs the same reference string under every policy.
pub fn compare_policies(
    reference: &[PageId],
    frame_count: usize,
) -> Result<Vec<(ReplacementPolicy, PagingTally)>> {
    ReplacementPolicy::ALL
        .iter()
        .map(|&policy| -> Result<(ReplacementPolicy, PagingTally)> {
            let report = run_paging(reference, frame_count, policy)?;
            Ok((policy, report.tally))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use memsim_error::Error;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().map(|&id| PageId::from(id)).collect()
    }

    #[test]
    fn test_empty_reference_string() {
        let report = run_paging(&[], 3, ReplacementPolicy::Lru).unwrap();
        assert!(report.steps.is_empty());
        assert_eq!(report.tally, PagingTally::default());
    }

    #[test]
    fn test_zero_frames_rejected_before_simulating() {
        let result = run_paging(&pages(&[1, 2]), 0, ReplacementPolicy::Fifo);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_steps_follow_input_order() {
        let reference = pages(&[3, 1, 3, 2]);
        let report = run_paging(&reference, 2, ReplacementPolicy::Fifo).unwrap();

        for (time, step) in report.steps.iter().enumerate() {
            assert_eq!(step.time, time);
            assert_eq!(step.page, reference[time]);
        }
        assert_eq!(report.tally, PagingTally { faults: 3, hits: 1 });
    }

    #[test]
    fn test_compare_policies() {
        let reference = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
        let faults: Vec<_> = compare_policies(&reference, 3)
            .unwrap()
            .into_iter()
            .map(|(policy, tally)| (policy, tally.faults))
            .collect();

        assert_eq!(
            faults,
            vec![
                (ReplacementPolicy::Fifo, 15),
                (ReplacementPolicy::Lru, 12),
                (ReplacementPolicy::Optimal, 9),
            ]
        );
    }
}
