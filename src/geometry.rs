//! Backend-neutral drawing primitives
//!
//! Views produce these in a local coordinate space (origin top-left, y down);
//! the frame driver translates and submits them to its graphics backend.

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const RED: Rgba = Rgba(255, 0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }
}

/// Point in local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle` (radians, y down)
    pub fn polar_offset(self, angle: f32, distance: f32) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Stroked straight line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: f32,
    pub color: Rgba,
}

/// Axis-aligned filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub min: Point,
    pub max: Point,
    pub color: Rgba,
}

impl FilledRect {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
