use chrono::{Local, NaiveDate};

use crate::session::Clock;

/// Clock backed by the local system time, so the header month matches the user's calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
