use crate::error::Result;
use chrono::{Days, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

static FILENAME_DATE_RE: OnceLock<Regex> = OnceLock::new();

fn filename_date_re() -> &'static Regex {
    FILENAME_DATE_RE.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("Invalid filename date regex pattern")
    })
}

/// Time window for recency discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyWindow {
    /// The last N days up to now
    DaysBack(u32),
    /// Whole days from `from` 00:00:00 to `to` 23:59:59
    Range { from: NaiveDate, to: NaiveDate },
}

/// Resolved inclusive bounds of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WindowBounds {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    /// Day-granularity check used for dates taken from titles
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start.date() <= day && day <= self.end.date()
    }
}

impl RecencyWindow {
    /// Resolve the window against `now`
    pub fn bounds(&self, now: NaiveDateTime) -> Result<WindowBounds> {
        match *self {
            RecencyWindow::DaysBack(days) => {
                let Some(start) = now.checked_sub_days(Days::new(u64::from(days))) else {
                    crate::bail_invalid!("days back", days);
                };
                Ok(WindowBounds { start, end: now })
            }
            RecencyWindow::Range { from, to } => {
                if from > to {
                    crate::bail_invalid!("date range", format!("{from} is after {to}"));
                }
                let (Some(start), Some(end)) = (from.and_hms_opt(0, 0, 0), to.and_hms_opt(23, 59, 59))
                else {
                    crate::bail_invalid!("date range", format!("{from}..{to}"));
                };
                Ok(WindowBounds { start, end })
            }
        }
    }
}

/// Date encoded at the start of a title (`2024-01-31 Standup`)
///
/// Month must be 1-12, day 1-31, and the result a real calendar date.
pub fn filename_date(title: &str) -> Option<NaiveDate> {
    let cap = filename_date_re().captures(title)?;
    let year: i32 = cap[1].parse().ok()?;
    let month: u32 = cap[2].parse().ok()?;
    let day: u32 = cap[3].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
