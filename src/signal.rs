//! Simulated odometry signals
//!
//! Every channel is a pure function of simulated time. The values stand in
//! for live robot telemetry until a real data source is wired in.

use crate::error::{Result, TelemetryError};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

/// Number of tracked channels
pub const CHANNEL_COUNT: usize = 5;

/// A tracked telemetry channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    CmdLinearVel,
    OdomLinearVel,
    CmdAngularVel,
    OdomAngularVel,
    OdomYaw,
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::CmdLinearVel,
        Channel::OdomLinearVel,
        Channel::CmdAngularVel,
        Channel::OdomAngularVel,
        Channel::OdomYaw,
    ];

    /// Channels drawn on the velocity chart
    pub const PLOTTED: [Channel; 4] = [
        Channel::CmdLinearVel,
        Channel::OdomLinearVel,
        Channel::CmdAngularVel,
        Channel::OdomAngularVel,
    ];

    /// Dotted display name, e.g. `cmd.linearVel`
    pub fn name(self) -> &'static str {
        match self {
            Channel::CmdLinearVel => "cmd.linearVel",
            Channel::OdomLinearVel => "odom.linearVel",
            Channel::CmdAngularVel => "cmd.angularVel",
            Channel::OdomAngularVel => "odom.angularVel",
            Channel::OdomYaw => "odom.yaw",
        }
    }

    /// Index into per-channel storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// Evaluate this channel at simulated time `t`
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Channel::CmdLinearVel => 0.5 + 0.5 * t.sin(),
            Channel::OdomLinearVel => 0.5 + 0.5 * t.cos(),
            Channel::CmdAngularVel => 0.5 + 0.25 * t.sin(),
            Channel::OdomAngularVel => 0.5 + 0.25 * t.cos(),
            Channel::OdomYaw => wrap_angle(t),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        Channel::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TelemetryError::UnknownChannel(s.to_string()))
    }
}

/// Map `t >= 0` onto `[-PI, PI)` as `(t mod 2PI) - PI`
pub fn wrap_angle(t: f64) -> f64 {
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    let wrapped = t.rem_euclid(TAU);
    if wrapped >= TAU {
        -PI
    } else {
        wrapped - PI
    }
}

/// One sample per channel, produced for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSet {
    values: [f64; CHANNEL_COUNT],
}

impl SampleSet {
    pub fn new(values: [f64; CHANNEL_COUNT]) -> Self {
        Self { values }
    }

    /// Value for a single channel
    pub fn get(&self, channel: Channel) -> f64 {
        self.values[channel.index()]
    }

    /// Values in storage order
    pub fn values(&self) -> &[f64; CHANNEL_COUNT] {
        &self.values
    }
}

/// Compute every channel's sample at simulated time `t`
pub fn generate(t: f64) -> SampleSet {
    SampleSet::new(Channel::ALL.map(|c| c.sample(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_generate_at_zero() {
        let s = generate(0.0);
        assert!((s.get(Channel::CmdLinearVel) - 0.5).abs() < EPS);
        assert!((s.get(Channel::OdomLinearVel) - 1.0).abs() < EPS);
        assert!((s.get(Channel::CmdAngularVel) - 0.5).abs() < EPS);
        assert!((s.get(Channel::OdomAngularVel) - 0.75).abs() < EPS);
        assert!((s.get(Channel::OdomYaw) + PI).abs() < EPS);
    }

    #[test]
    fn test_velocity_channels_stay_in_unit_range() {
        for i in 0..2000 {
            let s = generate(i as f64 * 0.037);
            for c in Channel::PLOTTED {
                let v = s.get(c);
                assert!((0.0..=1.0).contains(&v), "{} out of range: {}", c, v);
            }
        }
    }

    #[test]
    fn test_yaw_wraps_into_half_open_range() {
        for i in 0..5000 {
            let t = i as f64 * 0.01;
            let yaw = wrap_angle(t);
            assert!(yaw >= -PI && yaw < PI, "yaw({}) = {}", t, yaw);
        }
        // Exactly one turn lands back on -PI
        assert!((wrap_angle(TAU) + PI).abs() < EPS);
    }

    #[test]
    fn test_yaw_matches_fmod() {
        let t = 10.0;
        assert!((wrap_angle(t) - ((t % TAU) - PI)).abs() < EPS);
    }

    #[test]
    fn test_channel_names_round_trip() {
        for c in Channel::ALL {
            assert_eq!(c.name().parse::<Channel>().unwrap(), c);
        }
        assert_eq!(
            "odom.heading".parse::<Channel>(),
            Err(TelemetryError::UnknownChannel("odom.heading".to_string()))
        );
    }
}
