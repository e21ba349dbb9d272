use std::collections::HashMap;

use crate::typedef::{PageId, Timestamp};

/// Last logical time each page was referenced. Updated on every access,
/// hit or fault, regardless of policy; only LRU reads it.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecencyIndex {
    last_access: HashMap<PageId, Timestamp>,
}

impl RecencyIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_access(&mut self, page: &PageId, time: Timestamp) {
        self.last_access.insert(page.clone(), time);
    }

    pub(crate) fn last_access(&self, page: &PageId) -> Option<Timestamp> {
        self.last_access.get(page).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_access_overwrites() {
        let mut recency = RecencyIndex::new();
        let page = PageId::from(1);

        assert_eq!(recency.last_access(&page), None);
        recency.record_access(&page, 0);
        recency.record_access(&page, 5);
        assert_eq!(recency.last_access(&page), Some(5));
    }
}
