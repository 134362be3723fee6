//! Cohort retention analysis
//!
//! Users are grouped into cohorts by the calendar bucket of their first
//! transaction; retention is the share of each cohort transacting again in
//! each later bucket.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::clean::transaction_dates;
use crate::pipeline::error::{ConfigurationError, InvalidInputError};

/// Calendar bucket used both to define cohorts and to measure elapsed
/// periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// The bucket containing `date`: the date itself for Day, the Monday of
    /// the ISO week for Week, the first of the month for Month.
    pub fn bucket(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
            Granularity::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Whole buckets elapsed from `cohort` to `bucket`. Both arguments must
    /// already be bucket starts; never negative when `bucket >= cohort`.
    pub fn periods_between(&self, cohort: NaiveDate, bucket: NaiveDate) -> i64 {
        match self {
            Granularity::Day => (bucket - cohort).num_days(),
            Granularity::Week => (bucket - cohort).num_days() / 7,
            Granularity::Month => {
                12 * (bucket.year() as i64 - cohort.year() as i64)
                    + (bucket.month() as i64 - cohort.month() as i64)
            }
        }
    }

    /// Human-readable cohort label: `2021-01` for monthly buckets, the
    /// bucket start date otherwise.
    pub fn label(&self, bucket: NaiveDate) -> String {
        match self {
            Granularity::Month => bucket.format("%Y-%m").to_string(),
            _ => bucket.format("%Y-%m-%d").to_string(),
        }
    }
}

impl FromStr for Granularity {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "daily" | "d" => Ok(Granularity::Day),
            "week" | "weekly" | "w" => Ok(Granularity::Week),
            "month" | "monthly" | "m" => Ok(Granularity::Month),
            _ => Err(ConfigurationError::UnsupportedGranularity(s.to_string())),
        }
    }
}

/// Retention of one cohort in one period.
#[derive(Debug, Clone, Serialize)]
pub struct CohortRetentionRecord {
    pub cohort: String,
    pub period: i64,
    pub cohort_size: u64,
    pub retained_users: u64,
    pub retention_rate: f64,
}

/// Compute cohort retention rates over the transaction table.
///
/// For every user the cohort is the bucket of their earliest transaction;
/// every transaction then falls into a period, the number of whole buckets
/// since the cohort bucket. Users are counted at most once per
/// (cohort, period) pair regardless of how many transactions they made in
/// it, so period 0 always retains the full cohort and every rate lands in
/// [0, 100].
///
/// Output is sparse: only (cohort, period) pairs observed in the data are
/// emitted, sorted by cohort then period. Rates carry two decimal places.
pub fn analyze_cohort_retention(
    df: &DataFrame,
    granularity: Granularity,
) -> Result<Vec<CohortRetentionRecord>> {
    if df.height() == 0 {
        return Err(InvalidInputError::EmptyTable.into());
    }

    let users = df.column("user_id")?.cast(&DataType::String)?;
    let users = users.str()?;
    let dates = transaction_dates(df)?;

    let rows: Vec<(String, NaiveDate)> = users
        .into_iter()
        .zip(dates)
        .filter_map(|(user, date)| Some((user?.to_string(), date?)))
        .collect();
    if rows.is_empty() {
        return Err(InvalidInputError::NoDatedTransactions.into());
    }

    // earliest transaction date per user defines the cohort bucket
    let mut first_seen: BTreeMap<&str, NaiveDate> = BTreeMap::new();
    for (user, date) in &rows {
        first_seen
            .entry(user.as_str())
            .and_modify(|d| {
                if *date < *d {
                    *d = *date;
                }
            })
            .or_insert(*date);
    }
    let cohort_of: BTreeMap<&str, NaiveDate> = first_seen
        .into_iter()
        .map(|(user, date)| (user, granularity.bucket(date)))
        .collect();

    // distinct users per (cohort, period)
    let mut retained: BTreeMap<(NaiveDate, i64), BTreeSet<&str>> = BTreeMap::new();
    for (user, date) in &rows {
        let cohort = cohort_of[user.as_str()];
        let period = granularity.periods_between(cohort, granularity.bucket(*date));
        retained
            .entry((cohort, period))
            .or_default()
            .insert(user.as_str());
    }

    // period 0 holds every user whose first purchase defined the cohort
    let cohort_sizes: BTreeMap<NaiveDate, u64> = retained
        .iter()
        .filter(|((_, period), _)| *period == 0)
        .map(|((cohort, _), users)| (*cohort, users.len() as u64))
        .collect();

    let records = retained
        .into_iter()
        .map(|((cohort, period), users)| {
            let cohort_size = cohort_sizes[&cohort];
            let retained_users = users.len() as u64;
            let retention_rate =
                round2(retained_users as f64 / cohort_size as f64 * 100.0);
            CohortRetentionRecord {
                cohort: granularity.label(cohort),
                period,
                cohort_size,
                retained_users,
                retention_rate,
            }
        })
        .collect();

    Ok(records)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
