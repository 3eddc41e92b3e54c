//! Console helpers for the headless runner

use std::time::Instant;

/// Wall-clock stopwatch used to pace frames
pub struct TimeKeeper {
    start: Instant,
}

impl TimeKeeper {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the stopwatch started
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Seconds left until `deadline` (measured from start), zero if overdue
    pub fn until(&self, deadline: f64) -> f64 {
        (deadline - self.elapsed_secs()).max(0.0)
    }
}

impl Default for TimeKeeper {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a horizontal bar graph for a value within `[min, max]`
///
/// The center marker sits at the midpoint of the range; the bar extends left
/// for values below it and right for values above.
///
/// # Example
/// ```
/// use odom_telemetry::create_bar;
///
/// // 0.9 on a 0..1 scale with 40-char width
/// let bar = create_bar(0.9, 0.0, 1.0, 40);
/// println!("[{}]", bar);
/// ```
pub fn create_bar(value: f64, min: f64, max: f64, width: usize) -> String {
    let mid = (min + max) / 2.0;
    let half = (max - min) / 2.0;
    let normalized = if half > 0.0 {
        ((value - mid) / half).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let center = width / 2;
    let bar_length = ((normalized.abs() * center as f64) as usize).min(center);

    let mut bar = String::new();

    if normalized < 0.0 {
        bar.push_str(&" ".repeat(center - bar_length));
        bar.push_str(&"█".repeat(bar_length));
        bar.push('|');
        bar.push_str(&" ".repeat(center));
    } else {
        bar.push_str(&" ".repeat(center));
        bar.push('|');
        bar.push_str(&"█".repeat(bar_length));
        bar.push_str(&" ".repeat(center - bar_length));
    }

    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bar_midpoint() {
        let bar = create_bar(0.5, 0.0, 1.0, 40);
        assert_eq!(bar.chars().count(), 41); // 40 chars + 1 center marker
        assert!(bar.contains('|'));
        assert!(!bar.contains('█'));
    }

    #[test]
    fn test_create_bar_above_midpoint() {
        let bar = create_bar(1.0, 0.0, 1.0, 40);
        assert_eq!(bar.chars().count(), 41);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 20);
        assert!(bar.starts_with(' '));
    }

    #[test]
    fn test_create_bar_below_midpoint() {
        let bar = create_bar(-3.0, -3.2, 3.2, 40);
        assert_eq!(bar.chars().count(), 41);
        assert!(bar.contains('█'));
        assert!(bar.ends_with(' '));
    }

    #[test]
    fn test_create_bar_degenerate_range() {
        let bar = create_bar(5.0, 1.0, 1.0, 10);
        assert_eq!(bar.chars().count(), 11);
        assert!(!bar.contains('█'));
    }

    #[test]
    fn test_until_is_zero_once_overdue() {
        let keeper = TimeKeeper::new();
        assert!(keeper.until(60.0) > 59.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(keeper.until(0.001), 0.0);
    }

    #[test]
    fn test_timekeeper() {
        let keeper = TimeKeeper::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let elapsed = keeper.elapsed_secs();
        assert!(elapsed >= 0.01); // At least 10ms
        assert!(elapsed < 1.0);
    }
}
