use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Named date ranges, resolved against the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DateRangePreset {
    /// Today and the six days before it
    #[serde(rename = "last-7-days", alias = "last_7_days")]
    #[value(name = "last-7-days")]
    Last7Days,
    /// Today and the 29 days before it
    #[serde(rename = "last-30-days", alias = "last_30_days")]
    #[value(name = "last-30-days")]
    Last30Days,
    /// First day of the current quarter through today
    #[serde(alias = "this_quarter")]
    ThisQuarter,
    /// 1 January through today
    #[serde(alias = "this_year")]
    ThisYear,
}

impl DateRangePreset {
    /// Inclusive `(start, end)` for the given day.
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            Self::Last7Days => days_before(today, 6),
            Self::Last30Days => days_before(today, 29),
            Self::ThisQuarter => {
                let first_month = (today.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(today.year(), first_month, 1).unwrap_or(today)
            }
            Self::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };
        (start, today)
    }
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
