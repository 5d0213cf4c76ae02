//! Bounded reading history: readings → fixed-capacity window, oldest evicted first.

use super::{Metric, SensorReading};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct RollingHistory {
    capacity: usize,
    window: VecDeque<SensorReading>,
}

impl Default for RollingHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a reading, dropping the oldest ones past capacity.
    pub fn push(&mut self, reading: SensorReading) {
        self.window.push_back(reading);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// Most recent reading; `None` until the first tick of a session.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.window.back()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SensorReading> + ExactSizeIterator {
        self.window.iter()
    }

    /// Up to `n` readings, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SensorReading> {
        self.window.iter().rev().take(n)
    }

    /// One metric across the window, oldest to newest
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.window.iter().map(|r| r.value(metric)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(wear: f64) -> SensorReading {
        SensorReading::new(Utc::now(), 300.0, 310.0, 1500.0, 40.0, wear)
    }

    #[test]
    fn empty_has_no_latest() {
        let h = RollingHistory::default();
        assert!(h.is_empty());
        assert!(h.latest().is_none());
        assert_eq!(h.recent(10).count(), 0);
        assert!(h.series(Metric::Torque).is_empty());
    }

    #[test]
    fn evicts_oldest_first() {
        let mut h = RollingHistory::default();
        for i in 0..21 {
            h.push(reading(i as f64));
        }
        assert_eq!(h.len(), 20);
        assert_eq!(h.iter().next().unwrap().tool_wear, 1.0);
        assert_eq!(h.latest().unwrap().tool_wear, 20.0);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut h = RollingHistory::new(5);
        for i in 0..8 {
            h.push(reading(i as f64));
        }
        let wear: Vec<f64> = h.recent(3).map(|r| r.tool_wear).collect();
        assert_eq!(wear, vec![7.0, 6.0, 5.0]);
        assert_eq!(h.recent(10).count(), 5);
        assert_eq!(h.series(Metric::ToolWear), vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn clear_resets() {
        let mut h = RollingHistory::new(3);
        h.push(reading(1.0));
        h.clear();
        assert!(h.latest().is_none());
        assert_eq!(h.capacity(), 3);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut h = RollingHistory::new(0);
        h.push(reading(1.0));
        h.push(reading(2.0));
        assert_eq!(h.len(), 1);
        assert_eq!(h.latest().unwrap().tool_wear, 2.0);
    }
}
