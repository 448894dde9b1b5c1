//! Activity histograms by hour, weekday and month.

use chrono::{Month, Weekday};
use serde::Serialize;

use crate::message::{Record, weekday_name};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub messages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayBucket {
    pub weekday: &'static str,
    pub messages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub month: &'static str,
    pub messages: usize,
}

/// The three activity histograms of a scope.
///
/// `hourly` always has 24 buckets and `weekly` always has 7 (Monday first),
/// zero-filled. `monthly` is in calendar order but omits months with no
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub hourly: Vec<HourBucket>,
    pub weekly: Vec<WeekdayBucket>,
    pub monthly: Vec<MonthBucket>,
}

impl Timeline {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut hours = [0usize; 24];
        let mut weekdays = [0usize; 7];
        let mut months = [0usize; 12];

        for record in records {
            // hand-built records may carry an out-of-range hour
            if let Some(bucket) = hours.get_mut(record.hour as usize) {
                *bucket += 1;
            }
            weekdays[record.weekday.num_days_from_monday() as usize] += 1;
            months[record.month.number_from_month() as usize - 1] += 1;
        }

        let hourly = (0u32..)
            .zip(hours)
            .map(|(hour, messages)| HourBucket { hour, messages })
            .collect();

        let weekly = WEEKDAYS
            .iter()
            .zip(weekdays)
            .map(|(&weekday, messages)| WeekdayBucket {
                weekday: weekday_name(weekday),
                messages,
            })
            .collect();

        let monthly = MONTHS
            .iter()
            .zip(months)
            .filter(|&(_, messages)| messages > 0)
            .map(|(month, messages)| MonthBucket {
                month: month.name(),
                messages,
            })
            .collect();

        Self {
            hourly,
            weekly,
            monthly,
        }
    }

    /// Hour of day with the most messages, earliest on ties.
    pub fn busiest_hour(&self) -> Option<&HourBucket> {
        self.hourly
            .iter()
            .filter(|b| b.messages > 0)
            .max_by(|a, b| a.messages.cmp(&b.messages).then(b.hour.cmp(&a.hour)))
    }

    /// Weekday with the most messages, Monday first on ties.
    pub fn busiest_weekday(&self) -> Option<&WeekdayBucket> {
        self.weekly
            .iter()
            .rev()
            .filter(|b| b.messages > 0)
            .max_by_key(|b| b.messages)
    }
}
