use serde::{Deserialize, Serialize};

/// A contiguous block of free memory. `index` is its position in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    pub index: usize,
    pub size: u64,
}

impl Hole {
    pub fn new(index: usize, size: u64) -> Self {
        Hole { index, size }
    }

    pub fn can_hold(&self, request_size: u64) -> bool {
        self.size >= request_size
    }

    /// Numbers hole sizes by their input position.
    pub fn from_sizes(sizes: &[u64]) -> Vec<Hole> {
        sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| Hole::new(index, size))
            .collect()
    }
}
