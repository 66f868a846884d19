use crate::error::DukeError;
use time::macros::format_description;
use time::{Date, Time};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar date with an optional 24-hour wall time.
///
/// Deadlines and events carry one of these. The textual grammar is the same
/// at the prompt and in the save-file: `YYYY-MM-DD` or `YYYY-MM-DD HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct When {
    pub date: Date,
    pub time: Option<Time>,
}

impl When {
    pub fn new(date: Date, time: Option<Time>) -> Self {
        Self { date, time }
    }

    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD HHMM`. Anything else, including
    /// trailing tokens after the time, is rejected.
    pub fn parse(raw: &str) -> Result<Self, DukeError> {
        let (date_part, time_part) = match raw.split_once(' ') {
            Some((date, time)) => (date, Some(time)),
            None => (raw, None),
        };

        let date = Date::parse(date_part, format_description!("[year]-[month]-[day]"))
            .map_err(|_| DukeError::InvalidDateTime)?;
        let time = match time_part {
            Some(raw_time) => Some(
                Time::parse(raw_time, format_description!("[hour][minute]"))
                    .map_err(|_| DukeError::InvalidDateTime)?,
            ),
            None => None,
        };

        Ok(Self { date, time })
    }

    /// User-facing form: `MMM dd yyyy` plus ` HH:mm` when a time is set.
    pub fn display(&self) -> String {
        let month = MONTH_NAMES[usize::from(u8::from(self.date.month())) - 1];
        let mut rendered = format!("{} {:02} {}", month, self.date.day(), self.date.year());
        if let Some(time) = self.time {
            rendered.push_str(&format!(" {:02}:{:02}", time.hour(), time.minute()));
        }
        rendered
    }

    /// Save-file form: `YYYY-MM-DD` plus ` HHMM` when a time is set.
    pub fn storage(&self) -> String {
        let mut rendered = format!(
            "{:04}-{:02}-{:02}",
            self.date.year(),
            u8::from(self.date.month()),
            self.date.day()
        );
        if let Some(time) = self.time {
            rendered.push_str(&format!(" {:02}{:02}", time.hour(), time.minute()));
        }
        rendered
    }
}
