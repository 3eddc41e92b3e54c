//! Application session state
//!
//! A [`Session`] bundles playback, both views and the panel flags that the UI
//! layer toggles. The frame driver calls [`Session::run_frame`] once per
//! iteration, applies whatever [`UiCommand`]s the user issued, then asks for
//! the chart and heading frames to draw.

use crate::chart::{ChartFrame, ChartView, DEFAULT_VALUE_RANGE, DEFAULT_WINDOW_SECS};
use crate::error::{Result, TelemetryError};
use crate::heading::{HeadingFrame, HeadingView};
use crate::input::{KeySnapshot, NoTeleop, TeleopSink};
use crate::playback::{PlaybackController, RunState, DEFAULT_TIME_STEP};
use crate::signal::{Channel, SampleSet};
use crate::store::TimeSeriesStore;
use log::{debug, info};

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Simulated seconds per tick
    pub time_step: f64,
    /// Width of the chart's trailing time window in seconds
    pub window_secs: f64,
    /// Fixed value axis range while running
    pub value_range: (f64, f64),
    /// Maximum ticks kept in memory, `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            window_secs: DEFAULT_WINDOW_SECS,
            value_range: DEFAULT_VALUE_RANGE,
            history_limit: None,
        }
    }
}

impl SessionConfig {
    /// Check every field without building anything
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(TelemetryError::InvalidTimeStep(self.time_step));
        }
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(TelemetryError::InvalidWindow(self.window_secs));
        }
        let (min, max) = self.value_range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(TelemetryError::InvalidValueRange { min, max });
        }
        if self.history_limit == Some(0) {
            return Err(TelemetryError::InvalidCapacity);
        }
        Ok(())
    }
}

/// User actions from the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Pause,
    Resume,
    ToggleVelocityPanel,
    ToggleHeadingPanel,
    /// Close control on the heading window
    CloseHeadingPanel,
    /// Heading window is gone while still marked open
    HeadingContainerClosed,
    ToggleChannel(Channel),
}

/// Whole-application state, independent of any window
pub struct Session<T: TeleopSink = NoTeleop> {
    playback: PlaybackController,
    chart: ChartView,
    heading: HeadingView,
    velocity_panel_open: bool,
    keys: KeySnapshot,
    teleop: T,
}

impl Session<NoTeleop> {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Self::with_teleop(config, NoTeleop)
    }
}

impl<T: TeleopSink> Session<T> {
    /// Build a session that forwards key snapshots to `teleop`
    pub fn with_teleop(config: &SessionConfig, teleop: T) -> Result<Self> {
        config.validate()?;

        let store = match config.history_limit {
            Some(limit) => TimeSeriesStore::bounded(limit)?,
            None => TimeSeriesStore::new(),
        };

        info!(
            "Session: step={}s window={}s history={}",
            config.time_step,
            config.window_secs,
            config
                .history_limit
                .map(|n| format!("{} ticks", n))
                .unwrap_or_else(|| "unbounded".to_string())
        );

        Ok(Self {
            playback: PlaybackController::new(config.time_step, store)?,
            chart: ChartView::new(config.window_secs, config.value_range)?,
            heading: HeadingView::default(),
            velocity_panel_open: false,
            keys: KeySnapshot::default(),
            teleop,
        })
    }

    /// One loop iteration: record input, prepare views, advance playback
    ///
    /// The heading trail origin is fixed before the tick, so a view opened
    /// during the previous frame keeps every sample recorded after it.
    pub fn run_frame(&mut self, keys: KeySnapshot) -> Option<SampleSet> {
        self.keys = keys;
        self.teleop.consume(&self.keys);

        if self.heading.is_open() {
            self.heading.prepare(self.playback.store());
        }

        self.playback.tick()
    }

    /// Apply a single UI action
    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::Pause => self.playback.stop(),
            UiCommand::Resume => self.playback.resume(),
            UiCommand::ToggleVelocityPanel => {
                self.velocity_panel_open = !self.velocity_panel_open;
                debug!("Velocity panel open: {}", self.velocity_panel_open);
            }
            UiCommand::ToggleHeadingPanel => {
                if self.heading.is_open() {
                    self.heading.close();
                } else {
                    self.heading.open();
                }
            }
            UiCommand::CloseHeadingPanel => self.heading.close(),
            UiCommand::HeadingContainerClosed => self.heading.force_close(),
            UiCommand::ToggleChannel(channel) => {
                let visible = self.chart.visibility.toggle(channel);
                debug!("{} visible: {}", channel, visible);
            }
        }
    }

    /// Chart content for the current frame
    pub fn chart_frame(&self) -> ChartFrame {
        self.chart
            .frame(self.playback.store(), self.playback.time(), self.playback.state())
    }

    /// Heading content for the current frame, `None` while closed
    pub fn heading_frame(&self) -> Option<HeadingFrame> {
        self.heading
            .is_open()
            .then(|| self.heading.frame(self.playback.store()))
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn store(&self) -> &TimeSeriesStore {
        self.playback.store()
    }

    pub fn chart(&self) -> &ChartView {
        &self.chart
    }

    pub fn heading(&self) -> &HeadingView {
        &self.heading
    }

    pub fn run_state(&self) -> RunState {
        self.playback.state()
    }

    pub fn time(&self) -> f64 {
        self.playback.time()
    }

    pub fn velocity_panel_open(&self) -> bool {
        self.velocity_panel_open
    }

    pub fn heading_panel_open(&self) -> bool {
        self.heading.is_open()
    }

    pub fn is_channel_visible(&self, channel: Channel) -> bool {
        self.chart.visibility.is_visible(channel)
    }

    /// Key snapshot recorded in the last frame
    pub fn keys(&self) -> KeySnapshot {
        self.keys
    }

    pub fn teleop(&self) -> &T {
        &self.teleop
    }
}
