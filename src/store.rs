//! Time-series storage for channel samples
//!
//! All channels share a single time axis and advance in lock-step: every
//! append pushes one time value and exactly one value per channel. Storage is
//! unbounded by default; a bounded store evicts the oldest tick from the time
//! axis and every channel together.

use crate::error::{Result, TelemetryError};
use crate::signal::{Channel, SampleSet, CHANNEL_COUNT};
use std::collections::VecDeque;

/// Shared time axis plus one value sequence per channel
#[derive(Debug, Clone)]
pub struct TimeSeriesStore {
    times: VecDeque<f64>,
    channels: [VecDeque<f64>; CHANNEL_COUNT],
    capacity: Option<usize>,
    /// Sequence number of the next append, never reset by eviction
    total_appended: u64,
}

impl TimeSeriesStore {
    /// Create a store that keeps every sample
    pub fn new() -> Self {
        Self {
            times: VecDeque::new(),
            channels: std::array::from_fn(|_| VecDeque::new()),
            capacity: None,
            total_appended: 0,
        }
    }

    /// Create a store holding at most `capacity` ticks
    pub fn bounded(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TelemetryError::InvalidCapacity);
        }
        Ok(Self {
            times: VecDeque::with_capacity(capacity),
            channels: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
            capacity: Some(capacity),
            total_appended: 0,
        })
    }

    /// Append one tick: the time value and one sample per channel
    pub fn append(&mut self, t: f64, samples: &SampleSet) {
        if let Some(cap) = self.capacity {
            if self.times.len() >= cap {
                self.times.pop_front();
                for values in &mut self.channels {
                    values.pop_front();
                }
            }
        }

        self.times.push_back(t);
        for (values, &v) in self.channels.iter_mut().zip(samples.values()) {
            values.push_back(v);
        }
        self.total_appended += 1;
    }

    /// Number of ticks currently held
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Maximum number of ticks held, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of ticks ever appended, including evicted ones
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Sequence number of the oldest retained tick
    pub fn first_sequence(&self) -> u64 {
        self.total_appended - self.times.len() as u64
    }

    /// Time axis in append order
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.times.iter().copied()
    }

    /// Values of one channel in append order
    pub fn values(&self, channel: Channel) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.channels[channel.index()].iter().copied()
    }

    /// Number of values held for one channel
    pub fn channel_len(&self, channel: Channel) -> usize {
        self.channels[channel.index()].len()
    }

    /// `(time, value)` pairs of one channel in append order
    pub fn read(&self, channel: Channel) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values(channel))
    }

    /// Values of one channel appended at or after sequence number `seq`
    ///
    /// Ticks already evicted are skipped silently.
    pub fn values_since(&self, channel: Channel, seq: u64) -> impl ExactSizeIterator<Item = f64> + '_ {
        let skip = seq.saturating_sub(self.first_sequence()).min(self.len() as u64);
        self.values(channel).skip(skip as usize)
    }

    /// Most recent time value
    pub fn latest_time(&self) -> Option<f64> {
        self.times.back().copied()
    }

    /// Most recent value of one channel
    pub fn latest(&self, channel: Channel) -> Option<f64> {
        self.channels[channel.index()].back().copied()
    }
}

impl Default for TimeSeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::generate;

    fn filled(store: &mut TimeSeriesStore, ticks: usize) {
        for i in 1..=ticks {
            let t = i as f64 * 0.1;
            store.append(t, &generate(t));
        }
    }

    #[test]
    fn test_append_keeps_channels_in_lock_step() {
        let mut store = TimeSeriesStore::new();
        for i in 1..=25 {
            let t = i as f64 * 0.1;
            store.append(t, &generate(t));
            for c in Channel::ALL {
                assert_eq!(store.channel_len(c), store.len());
            }
        }
        assert_eq!(store.len(), 25);
        assert_eq!(store.total_appended(), 25);
    }

    #[test]
    fn test_read_pairs_time_with_value() {
        let mut store = TimeSeriesStore::new();
        filled(&mut store, 3);
        let pairs: Vec<_> = store.read(Channel::CmdLinearVel).collect();
        assert_eq!(pairs.len(), 3);
        assert!((pairs[2].0 - 0.3).abs() < 1e-12);
        assert!((pairs[2].1 - (0.5 + 0.5 * 0.3f64.sin())).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_store_evicts_oldest_tick() {
        let mut store = TimeSeriesStore::bounded(4).unwrap();
        filled(&mut store, 10);
        assert_eq!(store.len(), 4);
        assert_eq!(store.total_appended(), 10);
        assert_eq!(store.first_sequence(), 6);
        for c in Channel::ALL {
            assert_eq!(store.channel_len(c), 4);
        }
        let first = store.times().next().unwrap();
        assert!((first - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_store_rejects_zero_capacity() {
        assert_eq!(
            TimeSeriesStore::bounded(0).unwrap_err(),
            TelemetryError::InvalidCapacity
        );
    }

    #[test]
    fn test_values_since_sequence() {
        let mut store = TimeSeriesStore::new();
        filled(&mut store, 5);
        assert_eq!(store.values_since(Channel::OdomYaw, 3).count(), 2);
        assert_eq!(store.values_since(Channel::OdomYaw, 5).count(), 0);
        assert_eq!(store.values_since(Channel::OdomYaw, 0).count(), 5);
    }

    #[test]
    fn test_values_since_skips_evicted_ticks() {
        let mut store = TimeSeriesStore::bounded(3).unwrap();
        filled(&mut store, 8);
        // Origin 2 was evicted long ago: whatever is retained is returned
        assert_eq!(store.values_since(Channel::OdomYaw, 2).count(), 3);
        assert_eq!(store.values_since(Channel::OdomYaw, 7).count(), 1);
    }

    #[test]
    fn test_empty_store_has_no_latest() {
        let store = TimeSeriesStore::default();
        assert!(store.is_empty());
        assert_eq!(store.latest_time(), None);
        assert_eq!(store.latest(Channel::OdomYaw), None);
    }
}
