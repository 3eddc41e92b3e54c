//! Simulated-time playback
//!
//! The controller owns the clock and the run state and is the only writer of
//! the time-series store. While paused a tick does nothing at all: the clock
//! holds, the generator is not consulted and nothing is appended.

use crate::error::{Result, TelemetryError};
use crate::signal::{self, SampleSet};
use crate::store::TimeSeriesStore;
use log::{debug, trace};

/// Default simulated seconds per tick
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Whether simulated time is advancing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Monotonic simulated clock advanced in fixed steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedClock {
    time: f64,
    step: f64,
}

impl SimulatedClock {
    /// Create a clock at `t = 0` with the given step
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TelemetryError::InvalidTimeStep(step));
        }
        Ok(Self { time: 0.0, step })
    }

    /// Current simulated time in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn advance(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            step: DEFAULT_TIME_STEP,
        }
    }
}

/// Drives the clock and feeds generated samples into the store
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    clock: SimulatedClock,
    state: RunState,
    store: TimeSeriesStore,
    ticks_run: u64,
}

impl PlaybackController {
    /// Create a running controller with the given step and store
    pub fn new(step: f64, store: TimeSeriesStore) -> Result<Self> {
        Ok(Self {
            clock: SimulatedClock::new(step)?,
            state: RunState::Running,
            store,
            ticks_run: 0,
        })
    }

    /// Pause: the clock stops and no further samples are appended
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            debug!("Playback paused at t={:.2}s", self.clock.time());
        }
        self.state = RunState::Paused;
    }

    /// Resume advancing from the current simulated time
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            debug!("Playback resumed at t={:.2}s", self.clock.time());
        }
        self.state = RunState::Running;
    }

    /// Advance one step if running
    ///
    /// Returns the appended samples, or `None` when paused.
    pub fn tick(&mut self) -> Option<SampleSet> {
        if self.state == RunState::Paused {
            return None;
        }

        let t = self.clock.advance();
        let samples = signal::generate(t);
        self.store.append(t, &samples);
        self.ticks_run += 1;
        trace!("tick {} t={:.2} samples={:?}", self.ticks_run, t, samples.values());

        Some(samples)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Current simulated time in seconds
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn clock(&self) -> &SimulatedClock {
        &self.clock
    }

    /// Read-only access to recorded samples
    pub fn store(&self) -> &TimeSeriesStore {
        &self.store
    }

    /// Number of ticks run while not paused since creation
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Channel;

    fn controller() -> PlaybackController {
        PlaybackController::new(DEFAULT_TIME_STEP, TimeSeriesStore::new()).unwrap()
    }

    #[test]
    fn test_starts_running_at_zero() {
        let c = controller();
        assert_eq!(c.state(), RunState::Running);
        assert_eq!(c.time(), 0.0);
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_tick_advances_by_step() {
        let mut c = controller();
        let before = c.time();
        assert!(c.tick().is_some());
        assert!((c.time() - before - DEFAULT_TIME_STEP).abs() < 1e-12);
        assert_eq!(c.store().len(), 1);
        assert_eq!(c.store().latest_time(), Some(c.time()));
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut c = controller();
        for _ in 0..7 {
            c.tick();
        }
        c.stop();
        let time = c.time();
        let len = c.store().len();
        for _ in 0..20 {
            assert!(c.tick().is_none());
        }
        assert_eq!(c.time(), time);
        assert_eq!(c.store().len(), len);
        assert_eq!(c.ticks_run(), 7);
    }

    #[test]
    fn test_time_is_monotonic_across_pause_and_resume() {
        let mut c = controller();
        let mut last = c.time();
        for i in 0..60 {
            match i % 15 {
                5 => c.stop(),
                10 => c.resume(),
                _ => {}
            }
            let running = c.is_running();
            c.tick();
            if running {
                assert!((c.time() - last - DEFAULT_TIME_STEP).abs() < 1e-9);
            } else {
                assert_eq!(c.time(), last);
            }
            assert!(c.time() >= last);
            last = c.time();
        }
    }

    #[test]
    fn test_length_equals_running_ticks() {
        let mut c = controller();
        for i in 0..40 {
            if i == 12 {
                c.stop();
            }
            if i == 30 {
                c.resume();
            }
            c.tick();
            for ch in Channel::ALL {
                assert_eq!(c.store().channel_len(ch), c.store().len());
            }
        }
        assert_eq!(c.store().len() as u64, c.ticks_run());
        assert_eq!(c.ticks_run(), 22);
    }

    #[test]
    fn test_stop_and_resume_are_idempotent() {
        let mut c = controller();
        c.stop();
        c.stop();
        assert_eq!(c.state(), RunState::Paused);
        c.resume();
        c.resume();
        assert_eq!(c.state(), RunState::Running);
    }

    #[test]
    fn test_rejects_invalid_step() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PlaybackController::new(step, TimeSeriesStore::new()),
                Err(TelemetryError::InvalidTimeStep(_))
            ));
        }
    }
}
