//! Clock abstraction: wall-clock timestamps and monotonic milliseconds.

use std::cell::Cell;
use std::time::Instant;

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    /// Break seconds since the UNIX epoch into a UTC timestamp.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        }
    }

    /// `YYYY-MM-DD HH:MM`, the listing format used by `ls -l`.
    pub fn short(&self) -> String {
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Time source injected into the interpreter.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Timestamp;

    /// Milliseconds on a monotonic timeline (used for scheduling).
    fn monotonic_ms(&self) -> u64;
}

/// Clock backed by the operating system.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Timestamp::from_unix_secs(secs)
    }

    fn monotonic_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replays.
///
/// Wall-clock time is `epoch_secs` plus the elapsed monotonic time.
#[derive(Debug, Default)]
pub struct ManualClock {
    epoch_secs: u64,
    elapsed_ms: Cell<u64>,
}

impl ManualClock {
    /// Start a clock at the given UNIX time with zero elapsed milliseconds.
    pub fn new(epoch_secs: u64) -> Self {
        Self {
            epoch_secs,
            elapsed_ms: Cell::new(0),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.elapsed_ms.set(self.elapsed_ms.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix_secs(self.epoch_secs + self.elapsed_ms.get() / 1000)
    }

    fn monotonic_ms(&self) -> u64 {
        self.elapsed_ms.get()
    }
}

fn is_leap(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Convert days since 1970-01-01 into (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let feb = if is_leap(year) { 29 } else { 28 };
    let month_days: [u64; 12] = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month = 12u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    (year, month, days as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_to_ymd_epoch() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
    }

    #[test]
    fn days_to_ymd_first_of_february() {
        assert_eq!(days_to_ymd(31), (1970, 2, 1));
    }

    #[test]
    fn days_to_ymd_leap_day() {
        // 2024-02-29 is day 19782.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn days_to_ymd_december_31() {
        assert_eq!(days_to_ymd(364), (1970, 12, 31));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2025));
    }

    #[test]
    fn timestamp_display() {
        // 2025-01-08 14:30:05 UTC
        let ts = Timestamp::from_unix_secs(1_736_346_605);
        assert_eq!(ts.to_string(), "2025-01-08 14:30:05 UTC");
        assert_eq!(ts.short(), "2025-01-08 14:30");
    }

    #[test]
    fn manual_clock_advances_both_timelines() {
        let clock = ManualClock::new(1_736_346_600);
        assert_eq!(clock.monotonic_ms(), 0);
        clock.advance(61_500);
        assert_eq!(clock.monotonic_ms(), 61_500);
        assert_eq!(clock.now().minute, 31);
        assert_eq!(clock.now().second, 1);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.monotonic_ms();
        let b = clock.monotonic_ms();
        assert!(b >= a);
        assert!(clock.now().year >= 2024);
    }
}
