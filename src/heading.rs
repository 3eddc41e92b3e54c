//! Radial heading indicator
//!
//! Draws one arrow per yaw sample recorded since the view was last opened,
//! plus a thicker arrow for the newest sample. The trail is an origin into the
//! `odom.yaw` channel, so resetting it never touches stored data.
//!
//! Lifecycle: opening (or reopening) marks the view fresh; the first
//! [`HeadingView::prepare`] after that moves the trail origin to the end of
//! the channel and clears the fresh mark. Closing, by command or because the
//! hosting window went away, marks the view fresh again.

use crate::geometry::{FilledRect, Point, Rgba, Segment};
use crate::signal::Channel;
use crate::store::TimeSeriesStore;
use log::debug;
use std::f32::consts::PI;

/// Visual parameters of the heading canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    /// Side length of the square canvas
    pub canvas_size: f32,
    pub background: Rgba,
    pub arrow_color: Rgba,
    pub shaft_length: f32,
    /// Barb endpoints sit this much closer to the center than the tip
    pub barb_offset: f32,
    /// Angle between shaft and each barb, radians
    pub barb_angle: f32,
    pub thickness: f32,
    /// Extra width of the newest arrow
    pub emphasis: f32,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            canvas_size: 300.0,
            background: Rgba::BLACK,
            arrow_color: Rgba::RED,
            shaft_length: 80.0,
            barb_offset: 10.0,
            barb_angle: PI / 6.0,
            thickness: 3.0,
            emphasis: 2.0,
        }
    }
}

/// Shaft plus two barbs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub shaft: Segment,
    pub barbs: [Segment; 2],
}

impl Arrow {
    /// Arrow from `center` pointing along `angle`
    pub fn new(center: Point, angle: f32, style: &HeadingStyle, width: f32) -> Self {
        let tip = center.polar_offset(angle, style.shaft_length);
        let barb_len = style.shaft_length - style.barb_offset;
        let left = center.polar_offset(angle + style.barb_angle, barb_len);
        let right = center.polar_offset(angle - style.barb_angle, barb_len);
        let seg = |from, to| Segment {
            from,
            to,
            width,
            color: style.arrow_color,
        };

        Self {
            shaft: seg(center, tip),
            barbs: [seg(tip, left), seg(tip, right)],
        }
    }

    /// Line segments in draw order
    pub fn segments(&self) -> [Segment; 3] {
        [self.shaft, self.barbs[0], self.barbs[1]]
    }
}

/// Everything needed to draw one heading frame
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingFrame {
    pub background: FilledRect,
    /// One arrow per trail sample, oldest first
    pub trail: Vec<Arrow>,
    /// Emphasized arrow for the newest sample, absent when the trail is empty
    pub current: Option<Arrow>,
}

impl HeadingFrame {
    /// All segments in paint order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.trail
            .iter()
            .chain(self.current.iter())
            .flat_map(|a| a.segments())
    }
}

/// Open/closed state and trail origin of the heading view
#[derive(Debug, Clone)]
pub struct HeadingView {
    open: bool,
    fresh_open: bool,
    trail_origin: u64,
    pub style: HeadingStyle,
}

impl HeadingView {
    pub fn new(style: HeadingStyle) -> Self {
        Self {
            open: false,
            fresh_open: true,
            trail_origin: 0,
            style,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True until the first prepare after an open
    pub fn is_fresh(&self) -> bool {
        self.fresh_open
    }

    /// Open the view; the trail restarts on the next prepare
    pub fn open(&mut self) {
        debug!("Heading view opened");
        self.open = true;
        self.fresh_open = true;
    }

    /// Close through the view's own close control
    pub fn close(&mut self) {
        if self.open {
            debug!("Heading view closed");
        }
        self.open = false;
        self.fresh_open = true;
    }

    /// Close because the hosting window reported it is gone
    pub fn force_close(&mut self) {
        if self.open {
            debug!("Heading view force-closed by its container");
        }
        self.open = false;
        self.fresh_open = true;
    }

    /// Per-frame lifecycle step, run before drawing
    pub fn prepare(&mut self, store: &TimeSeriesStore) {
        if self.open && self.fresh_open {
            self.trail_origin = store.total_appended();
            self.fresh_open = false;
            debug!("Heading trail reset at sample {}", self.trail_origin);
        }
    }

    /// Yaw samples in the current trail, oldest first
    ///
    /// Empty while a reset is pending.
    pub fn trail<'a>(&self, store: &'a TimeSeriesStore) -> impl ExactSizeIterator<Item = f64> + 'a {
        let origin = if self.fresh_open { u64::MAX } else { self.trail_origin };
        store.values_since(Channel::OdomYaw, origin)
    }

    pub fn trail_len(&self, store: &TimeSeriesStore) -> usize {
        self.trail(store).len()
    }

    /// Compute the canvas content for this frame
    pub fn frame(&self, store: &TimeSeriesStore) -> HeadingFrame {
        let style = &self.style;
        let half = style.canvas_size / 2.0;
        let center = Point::new(half, half);

        let trail: Vec<Arrow> = self
            .trail(store)
            .map(|yaw| Arrow::new(center, yaw as f32, style, style.thickness))
            .collect();
        let current = self
            .trail(store)
            .last()
            .map(|yaw| Arrow::new(center, yaw as f32, style, style.thickness + style.emphasis));

        HeadingFrame {
            background: FilledRect {
                min: Point::new(0.0, 0.0),
                max: Point::new(style.canvas_size, style.canvas_size),
                color: style.background,
            },
            trail,
            current,
        }
    }
}

impl Default for HeadingView {
    fn default() -> Self {
        Self::new(HeadingStyle::default())
    }
}
