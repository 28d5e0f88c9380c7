//! When voting is open, and which Thursday a moment belongs to.
//!
//! All functions take `now` explicitly; the `Clock` trait is how callers
//! supply it.
use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone,
    Weekday,
};

use crate::api_models::Countdown;

/**
 * Source of the current time
 */
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/**
 * Wall-clock time, in the host's zone unless an offset is configured
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    pub offset: Option<FixedOffset>,
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let local = Local::now();
        match self.offset {
            Some(offset) => local.with_timezone(&offset),
            None => local.with_timezone(local.offset()),
        }
    }
}

/**
 * Always returns the same instant
 */
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

pub fn is_voting_enabled<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    now.weekday() == Weekday::Thu
}

/**
 * Calendar date of the Thursday `now` belongs to: today on a Thursday,
 * otherwise the next one
 */
pub fn voting_period<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    let today = now.date_naive();
    let thursday = Weekday::Thu.num_days_from_monday();
    let ahead = (7 + thursday - today.weekday().num_days_from_monday()) % 7;
    today + Days::new(u64::from(ahead))
}

/**
 * The voting period formatted as `YYYY-MM-DD`
 */
pub fn current_voting_period_key<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    period_key(voting_period(now))
}

pub fn period_key(period: NaiveDate) -> String {
    period.format("%Y-%m-%d").to_string()
}

/**
 * Midnight at the start of the upcoming Thursday, or of today when it is one
 */
pub fn next_thursday<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    start_of_day(&now.timezone(), voting_period(now))
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Zones that skip midnight for DST have no local 00:00
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/**
 * Whole days, hours and minutes until `next_thursday(now)`
 *
 * On a Thursday this is all zeroes rather than a week.
 */
pub fn countdown<Tz: TimeZone>(now: &DateTime<Tz>) -> Countdown {
    let left = next_thursday(now)
        .signed_duration_since(now.clone())
        .max(TimeDelta::zero());
    let minutes = left.num_minutes();
    Countdown {
        days: left.num_days(),
        hours: (minutes / 60) % 24,
        minutes: minutes % 60,
    }
}
