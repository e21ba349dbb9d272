use std::collections::VecDeque;

use crate::typedef::PageId;

/// Load order of resident pages, oldest at the front. Kept apart from the
/// frame slots: a page's slot says where it lives, not when it arrived.
#[derive(Clone, Debug, Default)]
pub(crate) struct FifoReplacer {
    load_order: VecDeque<PageId>,
}

impl FifoReplacer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records that `page` was just loaded into a frame.
    pub(crate) fn record_load(&mut self, page: PageId) {
        self.load_order.push_back(page);
    }

    /// Pops the page that has been resident longest.
    pub(crate) fn evict(&mut self) -> Option<PageId> {
        self.load_order.pop_front()
    }

    /// Drops `page` from the queue when another policy evicted it.
    pub(crate) fn remove(&mut self, page: &PageId) {
        if let Some(pos) = self.load_order.iter().position(|p| p == page) {
            self.load_order.remove(pos);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.load_order.iter()
    }
}
