//! Where "today" comes from.
//!
//! The calculator never reads the system clock. Entry points ask a [`Clock`]
//! once and pass the date down explicitly.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let d = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let clock = FixedClock(d);
        assert_eq!(clock.today(), d);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn test_system_clock_is_usable_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let floor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(clock.today() > floor);
    }
}
