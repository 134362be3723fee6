//! Daily total-sales series for the JSON report

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::clean::transaction_dates;

/// Total sales for one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DailySales {
    pub date: String,
    pub total_sales: f64,
}

/// Sum `total_amount` per transaction date, sorted by date.
pub fn daily_sales(df: &DataFrame) -> Result<Vec<DailySales>> {
    let dates = transaction_dates(df)?;
    let totals = df.column("total_amount")?.cast(&DataType::Float64)?;
    let totals = totals.f64()?;

    let mut sums: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (date, amount) in dates.into_iter().zip(totals.into_iter()) {
        if let (Some(date), Some(amount)) = (date, amount) {
            *sums.entry(date).or_insert(0.0) += amount;
        }
    }

    Ok(sums
        .into_iter()
        .map(|(date, total_sales)| DailySales {
            date: date.format("%Y-%m-%d").to_string(),
            total_sales,
        })
        .collect())
}
