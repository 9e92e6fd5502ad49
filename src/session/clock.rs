//! Elapsed match time.
//!
//! The presentation layer calls `Session::tick` once per second. The clock
//! only counts; it has no effect on the game.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedClock {
    seconds: u64,
}

impl ElapsedClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one second.
    pub fn tick(&mut self) {
        self.seconds = self.seconds.saturating_add(1);
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// `m:ss`, minutes unpadded.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ElapsedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(seconds: u64) -> ElapsedClock {
        let mut clock = ElapsedClock::new();
        for _ in 0..seconds {
            clock.tick();
        }
        clock
    }

    #[test]
    fn test_display() {
        assert_eq!(after(0).display(), "0:00");
        assert_eq!(after(7).display(), "0:07");
        assert_eq!(after(60).display(), "1:00");
        assert_eq!(after(754).to_string(), "12:34");
    }
}
