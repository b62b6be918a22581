use crate::error::{LadderError, LadderResult, ParseNumberSnafu, ParseTimeSnafu};
use jiff::civil::Time;
use snafu::ResultExt;
use std::str::FromStr;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const MIN_INACTIVITY_DAYS: u8 = 1;
pub const MAX_INACTIVITY_DAYS: u8 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncFrequency {
    Hourly,
    Daily,
    Weekly,
}

impl SyncFrequency {
    pub const ALL: [Self; 3] = [Self::Hourly, Self::Daily, Self::Weekly];

    ///what goes in the form's option values
    pub const fn value(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    ///what the user sees in the dropdown
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Every Hour",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }
}

impl FromStr for SyncFrequency {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(LadderError::UnknownFrequency {
                original: s.to_string(),
            }),
        }
    }
}

///the settings screen's state - nothing here schedules anything, the sync itself is
///aspirational
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncSettings {
    pub sync_time: Time,
    pub frequency: SyncFrequency,
    pub reminders_enabled: bool,
    pub inactivity_days: u8,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            sync_time: Time::constant(2, 0, 0, 0),
            frequency: SyncFrequency::Daily,
            reminders_enabled: true,
            inactivity_days: 7,
        }
    }
}

impl SyncSettings {
    pub fn sync_time_display(&self) -> String {
        self.sync_time.strftime("%H:%M").to_string()
    }

    ///`<input type="time">` submits `HH:MM`
    pub fn parse_sync_time(raw: &str) -> LadderResult<Time> {
        Time::strptime("%H:%M", raw).context(ParseTimeSnafu { original: raw })
    }

    ///out-of-range day counts get clamped rather than rejected, matching the number
    ///input's own min/max
    pub fn parse_inactivity_days(raw: &str) -> LadderResult<u8> {
        let days: u8 = raw
            .trim()
            .parse()
            .context(ParseNumberSnafu { original: raw })?;
        Ok(days.clamp(MIN_INACTIVITY_DAYS, MAX_INACTIVITY_DAYS))
    }
}
