//! Spend-based customer segmentation

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::error::InvalidInputError;

/// Spend tier, derived from the quantiles of the current run's per-user
/// totals. Thresholds are data-dependent and recomputed on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    LowSpenders,
    MediumSpenders,
    HighSpenders,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::LowSpenders => "low_spenders",
            Segment::MediumSpenders => "medium_spenders",
            Segment::HighSpenders => "high_spenders",
        };
        write!(f, "{}", name)
    }
}

/// One user's aggregated spend and assigned tier.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSegment {
    pub user_id: String,
    pub total_amount: f64,
    pub segment: Segment,
}

/// Classify every distinct user into a spend tier.
///
/// Aggregates `total_amount` per user, takes the 0.33 and 0.66 quantiles of
/// the aggregated totals (linear interpolation), then assigns
/// `total <= p33` to low, `p33 < total <= p66` to medium and `total > p66`
/// to high. When every user spends the same amount both quantiles collapse
/// to that value and the `<=` boundary puts everyone in `low_spenders`.
///
/// Output carries one record per distinct `user_id`, sorted by user id.
pub fn segment_customers(df: &DataFrame) -> Result<Vec<CustomerSegment>> {
    let spend = spend_per_user(df)?;
    if spend.is_empty() {
        return Err(InvalidInputError::NoDistinctUsers.into());
    }

    let mut totals: Vec<f64> = spend.values().copied().collect();
    totals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let p33 = quantile_linear(&totals, 0.33);
    let p66 = quantile_linear(&totals, 0.66);

    let segments = spend
        .into_iter()
        .map(|(user_id, total_amount)| {
            let segment = if total_amount <= p33 {
                Segment::LowSpenders
            } else if total_amount <= p66 {
                Segment::MediumSpenders
            } else {
                Segment::HighSpenders
            };
            CustomerSegment {
                user_id,
                total_amount,
                segment,
            }
        })
        .collect();

    Ok(segments)
}

/// Sum `total_amount` per distinct user. User ids are compared as strings so
/// integer and string identifiers both work.
pub fn spend_per_user(df: &DataFrame) -> Result<BTreeMap<String, f64>> {
    let users = df.column("user_id")?.cast(&DataType::String)?;
    let users = users.str()?;
    let totals = df.column("total_amount")?.cast(&DataType::Float64)?;
    let totals = totals.f64()?;

    let mut spend: BTreeMap<String, f64> = BTreeMap::new();
    for (user, amount) in users.into_iter().zip(totals.into_iter()) {
        if let (Some(user), Some(amount)) = (user, amount) {
            *spend.entry(user.to_string()).or_insert(0.0) += amount;
        }
    }
    Ok(spend)
}

/// Quantile of a sorted slice with linear interpolation, the definition
/// pandas and numpy default to.
fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
