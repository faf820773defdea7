#![forbid(unsafe_code)]

//! Playback speed.

use std::fmt;
use std::time::Duration;

/// Auto-play speed in steps per second, clamped to `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(10);
    pub const DEFAULT: Self = Self(5);

    /// Clamp `raw` into the supported range.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        if raw < Self::MIN.0 {
            Self::MIN
        } else if raw > Self::MAX.0 {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Auto-advance delay: `1000 ms / speed`.
    #[must_use]
    pub const fn delay(self) -> Duration {
        Duration::from_millis(1000 / self.0 as u64)
    }

}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        assert_eq!(Speed::new(0), Speed::MIN);
        assert_eq!(Speed::new(42), Speed::MAX);
        assert_eq!(Speed::new(7).get(), 7);
    }

    #[test]
    fn delay_is_inverse_of_speed() {
        assert_eq!(Speed::new(1).delay(), Duration::from_millis(1000));
        assert_eq!(Speed::new(5).delay(), Duration::from_millis(200));
        assert_eq!(Speed::new(3).delay(), Duration::from_millis(333));
        assert_eq!(Speed::new(10).delay(), Duration::from_millis(100));
    }

    #[test]
    fn default_speed_displays_as_multiplier() {
        assert_eq!(Speed::default(), Speed::DEFAULT);
        assert_eq!(Speed::DEFAULT.to_string(), "5x");
    }
}
