use serde::{Deserialize, Serialize};

use crate::typedef::{FrameId, PageId};

/// Fixed number of physical frames, each empty or holding one resident page.
/// The length is set at creation and never changes, and a page occupies at
/// most one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    /// Creates `frame_count` empty frames. Callers validate `frame_count >= 1`.
    pub(crate) fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    pub fn get(&self, frame_id: FrameId) -> Option<&PageId> {
        self.slots.get(frame_id).and_then(|slot| slot.as_ref())
    }

    /// Returns the slot holding `page`, if it is resident.
    pub fn slot_of(&self, page: &PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(page))
    }

    /// Lowest empty slot.
    pub(crate) fn first_free(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none)
    }

    /// Resident pages with their slots, in slot order.
    pub(crate) fn residents(&self) -> impl Iterator<Item = (FrameId, &PageId)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(frame_id, slot)| slot.as_ref().map(|page| (frame_id, page)))
    }

    /// Places `page` into `frame_id`, returning whatever was resident there.
    pub(crate) fn load(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        assert!(
            self.slot_of(&page).is_none(),
            "page {page} is already resident"
        );
        self.slots[frame_id].replace(page)
    }
}
