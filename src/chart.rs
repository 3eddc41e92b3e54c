//! Scrolling velocity chart
//!
//! While playback runs the chart pins its axes to the trailing time window
//! and the fixed value range every frame. While paused it leaves the bounds
//! alone so the user can pan and zoom freely. Lines always carry the full
//! stored history; the x window does the scrolling.

use crate::error::{Result, TelemetryError};
use crate::geometry::Rgba;
use crate::playback::RunState;
use crate::signal::Channel;
use crate::store::TimeSeriesStore;

/// Default width of the visible time window in seconds
pub const DEFAULT_WINDOW_SECS: f64 = 10.0;

/// Default value axis range
pub const DEFAULT_VALUE_RANGE: (f64, f64) = (0.0, 1.0);

/// Per-channel visibility on the chart
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFlags {
    cmd_linear_vel: bool,
    odom_linear_vel: bool,
    cmd_angular_vel: bool,
    odom_angular_vel: bool,
}

impl VisibilityFlags {
    /// Whether `channel` is drawn; yaw never appears on the chart
    pub fn is_visible(&self, channel: Channel) -> bool {
        match channel {
            Channel::CmdLinearVel => self.cmd_linear_vel,
            Channel::OdomLinearVel => self.odom_linear_vel,
            Channel::CmdAngularVel => self.cmd_angular_vel,
            Channel::OdomAngularVel => self.odom_angular_vel,
            Channel::OdomYaw => false,
        }
    }

    fn flag_mut(&mut self, channel: Channel) -> Option<&mut bool> {
        match channel {
            Channel::CmdLinearVel => Some(&mut self.cmd_linear_vel),
            Channel::OdomLinearVel => Some(&mut self.odom_linear_vel),
            Channel::CmdAngularVel => Some(&mut self.cmd_angular_vel),
            Channel::OdomAngularVel => Some(&mut self.odom_angular_vel),
            Channel::OdomYaw => None,
        }
    }

    /// Flip one channel's flag. Returns the new value.
    pub fn toggle(&mut self, channel: Channel) -> bool {
        match self.flag_mut(channel) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }

    /// Plotted channels currently visible
    pub fn visible(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::PLOTTED.into_iter().filter(|&c| self.is_visible(c))
    }
}

/// Visible region of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisWindow {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// One channel's polyline
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub channel: Channel,
    pub color: Rgba,
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw one chart frame
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Bounds to force this frame; `None` keeps whatever the user set
    pub bounds: Option<AxisWindow>,
    pub lines: Vec<ChartLine>,
}

/// Stable line color for a channel
pub fn channel_color(channel: Channel) -> Rgba {
    match channel {
        Channel::CmdLinearVel => Rgba::rgb(255, 100, 100),
        Channel::OdomLinearVel => Rgba::rgb(100, 255, 100),
        Channel::CmdAngularVel => Rgba::rgb(100, 150, 255),
        Channel::OdomAngularVel => Rgba::rgb(255, 200, 80),
        Channel::OdomYaw => Rgba::RED,
    }
}

/// Chart configuration and visibility state
#[derive(Debug, Clone)]
pub struct ChartView {
    window_secs: f64,
    value_range: (f64, f64),
    pub visibility: VisibilityFlags,
}

impl ChartView {
    pub fn new(window_secs: f64, value_range: (f64, f64)) -> Result<Self> {
        if !window_secs.is_finite() || window_secs <= 0.0 {
            return Err(TelemetryError::InvalidWindow(window_secs));
        }
        let (min, max) = value_range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(TelemetryError::InvalidValueRange { min, max });
        }
        Ok(Self {
            window_secs,
            value_range,
            visibility: VisibilityFlags::default(),
        })
    }

    pub fn window_secs(&self) -> f64 {
        self.window_secs
    }

    pub fn value_range(&self) -> (f64, f64) {
        self.value_range
    }

    /// Axis bounds forced at `t_now`, or `None` when paused
    pub fn axis_window(&self, t_now: f64, state: RunState) -> Option<AxisWindow> {
        match state {
            RunState::Running => Some(AxisWindow {
                x: (t_now - self.window_secs, t_now),
                y: self.value_range,
            }),
            RunState::Paused => None,
        }
    }

    /// Compute the chart's drawable content for this frame
    pub fn frame(&self, store: &TimeSeriesStore, t_now: f64, state: RunState) -> ChartFrame {
        let lines = self
            .visibility
            .visible()
            .map(|channel| ChartLine {
                channel,
                color: channel_color(channel),
                points: store.read(channel).map(|(t, v)| [t, v]).collect(),
            })
            .collect();

        ChartFrame {
            bounds: self.axis_window(t_now, state),
            lines,
        }
    }
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            value_range: DEFAULT_VALUE_RANGE,
            visibility: VisibilityFlags::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::generate;

    fn store_with(ticks: usize) -> TimeSeriesStore {
        let mut store = TimeSeriesStore::new();
        for i in 1..=ticks {
            let t = i as f64 * 0.1;
            store.append(t, &generate(t));
        }
        store
    }

    #[test]
    fn test_running_pins_trailing_window() {
        let chart = ChartView::default();
        let bounds = chart.axis_window(42.0, RunState::Running).unwrap();
        assert_eq!(bounds.x, (32.0, 42.0));
        assert_eq!(bounds.y, (0.0, 1.0));
    }

    #[test]
    fn test_paused_leaves_bounds_alone() {
        let chart = ChartView::default();
        assert_eq!(chart.axis_window(42.0, RunState::Paused), None);
    }

    #[test]
    fn test_hidden_channels_are_not_drawn() {
        let chart = ChartView::default();
        let frame = chart.frame(&store_with(20), 2.0, RunState::Running);
        assert!(frame.lines.is_empty());
    }

    #[test]
    fn test_visible_channel_draws_full_history() {
        let mut chart = ChartView::default();
        chart.visibility.toggle(Channel::OdomLinearVel);
        let store = store_with(150);
        let frame = chart.frame(&store, 15.0, RunState::Running);
        assert_eq!(frame.lines.len(), 1);
        assert_eq!(frame.lines[0].channel, Channel::OdomLinearVel);
        // Full history, not just the last 10 seconds
        assert_eq!(frame.lines[0].points.len(), 150);
    }

    #[test]
    fn test_toggle_flips_flag() {
        let mut flags = VisibilityFlags::default();
        assert!(flags.toggle(Channel::CmdAngularVel));
        assert!(flags.is_visible(Channel::CmdAngularVel));
        assert!(!flags.toggle(Channel::CmdAngularVel));
        assert!(!flags.is_visible(Channel::CmdAngularVel));
        // Yaw has no chart flag
        assert!(!flags.toggle(Channel::OdomYaw));
        assert_eq!(flags.visible().count(), 0);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert_eq!(
            ChartView::new(0.0, DEFAULT_VALUE_RANGE).unwrap_err(),
            TelemetryError::InvalidWindow(0.0)
        );
        assert!(matches!(
            ChartView::new(10.0, (1.0, 1.0)),
            Err(TelemetryError::InvalidValueRange { .. })
        ));
    }
}
