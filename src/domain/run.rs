use chrono::NaiveDate;

/// Date range and per-day volume for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub per_day: u32,
}

impl RunParameters {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, per_day: u32) -> Self {
        Self {
            start_date,
            end_date,
            per_day,
        }
    }

    /// Calendar days in the inclusive range; zero when start is after end.
    pub fn days(&self) -> u64 {
        let span = (self.end_date - self.start_date).num_days();
        if span < 0 {
            0
        } else {
            span as u64 + 1
        }
    }

    /// Total (generate, submit) cycles the run performs.
    pub fn total_cycles(&self) -> u64 {
        self.days() * u64::from(self.per_day)
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days: u64,
    pub cycles: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Records dropped because generation failed
    pub skipped: u64,
}
