use daycycle_core::constants::DEFAULT_DAY_LENGTH_SECONDS;
use daycycle_core::math::{hours_per_second, time_percent, wrap_hours};
use daycycle_core::settings::ClockSettings;

/// How the host is driving time this frame. Re-read every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Live simulation: time advances with real elapsed time.
    Simulating,
    /// Editing / paused: time only changes through explicit scrubbing.
    Editing,
}

impl ClockMode {
    pub fn from_is_simulating(is_simulating: bool) -> Self {
        if is_simulating {
            ClockMode::Simulating
        } else {
            ClockMode::Editing
        }
    }
}

/// Simulated time of day in hours, always within [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    hours: f32,
    hours_per_second: f32,
}

impl Clock {
    /// A non-positive or non-finite day length falls back to the default.
    pub fn new(settings: &ClockSettings) -> Self {
        let mut clock = Self {
            hours: wrap_hours(settings.start_hour),
            hours_per_second: hours_per_second(DEFAULT_DAY_LENGTH_SECONDS),
        };
        clock.set_day_length(settings.day_length_seconds);
        clock
    }

    pub fn hours(&self) -> f32 {
        self.hours
    }

    pub fn time_percent(&self) -> f32 {
        time_percent(self.hours)
    }

    pub fn hours_per_second(&self) -> f32 {
        self.hours_per_second
    }

    /// Change the day length without touching the current time.
    /// Invalid lengths are ignored and the previous rate is kept.
    pub fn set_day_length(&mut self, day_length_seconds: f32) {
        if !(day_length_seconds.is_finite() && day_length_seconds > 0.0) {
            log::warn!("Ignoring invalid day length ({day_length_seconds}s)");
            return;
        }
        self.hours_per_second = hours_per_second(day_length_seconds);
    }

    /// Scrub to an explicit time. Out-of-range values wrap.
    pub fn set_hours(&mut self, hours: f32) {
        self.hours = wrap_hours(hours);
    }

    /// Advance by real elapsed seconds.
    pub fn advance(&mut self, delta_seconds: f32) {
        let delta_hours = delta_seconds * self.hours_per_second;
        if !delta_hours.is_finite() {
            log::warn!("Ignoring non-finite clock delta ({delta_seconds}s)");
            return;
        }
        self.hours = wrap_hours(self.hours + delta_hours);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(&ClockSettings::default())
    }
}
