use crate::frame::FrameSet;
use crate::recency::RecencyIndex;
use crate::typedef::FrameId;

/// Picks the resident with the oldest last access. Scans in slot order and
/// `min_by_key` keeps the first of equal keys, so the lowest slot wins ties.
/// Returns `None` only if no frame is occupied.
pub(crate) fn select_victim(frames: &FrameSet, recency: &RecencyIndex) -> Option<FrameId> {
    frames
        .residents()
        // every resident was recorded when it loaded; unknown pages sort first
        .min_by_key(|(_, page)| recency.last_access(page).map_or(0, |t| t + 1))
        .map(|(frame_id, _)| frame_id)
}
