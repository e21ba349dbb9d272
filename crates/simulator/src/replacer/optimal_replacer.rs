use crate::frame::FrameSet;
use crate::typedef::{FrameId, PageId};

/// Picks the resident whose next reference in `future` is farthest away.
/// A resident that never appears again is taken immediately; otherwise the
/// first slot holding the maximal distance wins.
pub(crate) fn select_victim(frames: &FrameSet, future: &[PageId]) -> Option<FrameId> {
    let mut victim: Option<(FrameId, usize)> = None;

    for (frame_id, page) in frames.residents() {
        let Some(distance) = future.iter().position(|p| p == page) else {
            return Some(frame_id);
        };
        match victim {
            Some((_, farthest)) if distance <= farthest => {}
            _ => victim = Some((frame_id, distance)),
        }
    }

    victim.map(|(frame_id, _)| frame_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_with(pages: &[i64]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for (frame_id, &page) in pages.iter().enumerate() {
            frames.load(frame_id, PageId::from(page));
        }
        frames
    }

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().map(|&id| PageId::from(id)).collect()
    }

    #[test]
    fn test_evict_farthest_next_use() {
        let frames = frames_with(&[7, 0, 1]);
        assert_eq!(select_victim(&frames, &pages(&[0, 3, 0, 4, 1, 7])), Some(0));
    }

    #[test]
    fn test_never_used_again_is_immediate_victim() {
        let frames = frames_with(&[1, 2, 3]);
        assert_eq!(select_victim(&frames, &pages(&[3, 1])), Some(1));
    }

    #[test]
    fn test_first_absent_page_wins() {
        let frames = frames_with(&[1, 2, 3]);
        assert_eq!(select_victim(&frames, &pages(&[3])), Some(0));
    }

    #[test]
    fn test_empty_future_evicts_first_slot() {
        let frames = frames_with(&[5, 6]);
        assert_eq!(select_victim(&frames, &[]), Some(0));
    }
}
