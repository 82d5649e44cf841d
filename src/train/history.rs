use std::collections::VecDeque;

/// Rolling window of the most recent epoch losses.
///
/// Once `capacity` values are held, each push drops the oldest.
#[derive(Debug, Clone)]
pub struct LossHistory {
    values: VecDeque<f64>,
    capacity: usize,
    total_recorded: usize,
}

impl LossHistory {
    /// A zero capacity is bumped to 1 so the latest loss is always available.
    pub fn new(capacity: usize) -> LossHistory {
        let capacity = capacity.max(1);
        LossHistory { values: VecDeque::with_capacity(capacity), capacity, total_recorded: 0 }
    }

    pub fn push(&mut self, loss: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(loss);
        self.total_recorded += 1;
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Every push since construction, including values already evicted.
    /// Not reset by `clear`.
    pub fn total_recorded(&self) -> usize {
        self.total_recorded
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
