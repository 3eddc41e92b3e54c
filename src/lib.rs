//! Simulated odometry telemetry for a robot debugging dashboard
//!
//! This library models the state behind a live telemetry viewer: a simulated
//! clock that can be paused, sinusoidal stand-ins for commanded and measured
//! velocities plus yaw, a lock-step time-series store, a scrolling chart and
//! a radial heading indicator. Views compute backend-neutral drawing
//! primitives, so everything here runs and tests without a window.
//!
//! # Quick Start
//!
//! ## Running Frames
//! ```
//! use odom_telemetry::{Channel, KeySnapshot, Session, SessionConfig, UiCommand};
//!
//! let mut session = Session::new(&SessionConfig::default())?;
//!
//! for _ in 0..100 {
//!     session.run_frame(KeySnapshot::default());
//! }
//! assert!((session.time() - 10.0).abs() < 1e-9);
//!
//! // Show one line on the chart
//! session.apply(UiCommand::ToggleChannel(Channel::CmdLinearVel));
//! let chart = session.chart_frame();
//! assert_eq!(chart.lines.len(), 1);
//! # Ok::<(), odom_telemetry::TelemetryError>(())
//! ```
//!
//! ## Pausing
//! ```
//! use odom_telemetry::{KeySnapshot, Session, SessionConfig, UiCommand};
//!
//! let mut session = Session::new(&SessionConfig::default())?;
//! session.run_frame(KeySnapshot::default());
//! session.apply(UiCommand::Pause);
//!
//! // Paused frames neither advance time nor record samples
//! session.run_frame(KeySnapshot::default());
//! assert_eq!(session.store().len(), 1);
//! assert!(session.chart_frame().bounds.is_none());
//! # Ok::<(), odom_telemetry::TelemetryError>(())
//! ```
//!
//! ## Heading Trail
//! ```
//! use odom_telemetry::{KeySnapshot, Session, SessionConfig, UiCommand};
//!
//! let mut session = Session::new(&SessionConfig::default())?;
//! session.apply(UiCommand::ToggleHeadingPanel);
//!
//! for _ in 0..4 {
//!     session.run_frame(KeySnapshot::default());
//! }
//!
//! // Every sample recorded after opening is on the trail
//! let heading = session.heading_frame().expect("heading panel is open");
//! assert_eq!(heading.trail.len(), 4);
//! assert!(heading.current.is_some());
//! # Ok::<(), odom_telemetry::TelemetryError>(())
//! ```

pub mod chart;
pub mod common;
pub mod error;
pub mod geometry;
pub mod heading;
pub mod input;
pub mod playback;
pub mod session;
pub mod signal;
pub mod store;

// Re-export public API
pub use chart::{AxisWindow, ChartFrame, ChartLine, ChartView, VisibilityFlags};
pub use common::{create_bar, TimeKeeper};
pub use error::{Result, TelemetryError};
pub use geometry::{FilledRect, Point, Rgba, Segment};
pub use heading::{Arrow, HeadingFrame, HeadingStyle, HeadingView};
pub use input::{KeySnapshot, NoTeleop, TeleopKey, TeleopSink};
pub use playback::{PlaybackController, RunState, SimulatedClock};
pub use session::{Session, SessionConfig, UiCommand};
pub use signal::{generate, Channel, SampleSet};
pub use store::TimeSeriesStore;
