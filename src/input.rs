//! Keyboard input boundary
//!
//! The frame driver reports which teleop keys are held each frame. The
//! session records the snapshot and hands it to a [`TeleopSink`]; the default
//! sink ignores it. No behavior is attached to any key yet.

use std::fmt;

/// Keys sampled every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeleopKey {
    W,
    S,
    X,
    A,
    D,
    Z,
    C,
    Q,
    E,
}

impl TeleopKey {
    pub const ALL: [TeleopKey; 9] = [
        TeleopKey::W,
        TeleopKey::S,
        TeleopKey::X,
        TeleopKey::A,
        TeleopKey::D,
        TeleopKey::Z,
        TeleopKey::C,
        TeleopKey::Q,
        TeleopKey::E,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub fn label(self) -> &'static str {
        match self {
            TeleopKey::W => "W",
            TeleopKey::S => "S",
            TeleopKey::X => "X",
            TeleopKey::A => "A",
            TeleopKey::D => "D",
            TeleopKey::Z => "Z",
            TeleopKey::C => "C",
            TeleopKey::Q => "Q",
            TeleopKey::E => "E",
        }
    }
}

impl fmt::Display for TeleopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Held/released state of every teleop key for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeySnapshot {
    held: u16,
}

impl KeySnapshot {
    /// Build a snapshot by querying each key
    pub fn from_fn(mut is_down: impl FnMut(TeleopKey) -> bool) -> Self {
        let held = TeleopKey::ALL
            .into_iter()
            .filter(|&k| is_down(k))
            .fold(0, |acc, k| acc | k.bit());
        Self { held }
    }

    pub fn is_down(&self, key: TeleopKey) -> bool {
        self.held & key.bit() != 0
    }

    /// Keys held in this frame
    pub fn held(&self) -> impl Iterator<Item = TeleopKey> + '_ {
        TeleopKey::ALL.into_iter().filter(|&k| self.is_down(k))
    }

    pub fn any(&self) -> bool {
        self.held != 0
    }
}

/// Attachment point for future teleop command wiring
pub trait TeleopSink {
    fn consume(&mut self, keys: &KeySnapshot);
}

/// Sink that ignores every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTeleop;

impl TeleopSink for NoTeleop {
    fn consume(&mut self, _keys: &KeySnapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_fn() {
        let keys = KeySnapshot::from_fn(|k| matches!(k, TeleopKey::W | TeleopKey::E));
        assert!(keys.is_down(TeleopKey::W));
        assert!(keys.is_down(TeleopKey::E));
        assert!(!keys.is_down(TeleopKey::S));
        assert_eq!(keys.held().collect::<Vec<_>>(), vec![TeleopKey::W, TeleopKey::E]);
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let keys = KeySnapshot::default();
        assert!(!keys.any());
        assert_eq!(keys.held().count(), 0);
    }
}
