//! Category ranking by total sales

use std::cmp::Ordering;
use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

/// Total sales for one item category.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub item_category: String,
    pub total_amount: f64,
}

/// Rank item categories by summed `total_amount`, descending, and return the
/// top `top_n`.
///
/// Ties are broken by category name ascending so the ranking is
/// deterministic. `top_n == 0` yields an empty ranking; a `top_n` beyond the
/// number of distinct categories returns every category. Rows with a null
/// category or null total are skipped.
pub fn rank_categories(df: &DataFrame, top_n: usize) -> Result<Vec<CategorySummary>> {
    if top_n == 0 {
        return Ok(Vec::new());
    }

    let categories = df.column("item_category")?.cast(&DataType::String)?;
    let categories = categories.str()?;
    let totals = df.column("total_amount")?.cast(&DataType::Float64)?;
    let totals = totals.f64()?;

    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for (category, amount) in categories.into_iter().zip(totals.into_iter()) {
        if let (Some(category), Some(amount)) = (category, amount) {
            *sums.entry(category.to_string()).or_insert(0.0) += amount;
        }
    }

    let mut ranked: Vec<CategorySummary> = sums
        .into_iter()
        .map(|(item_category, total_amount)| CategorySummary {
            item_category,
            total_amount,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.item_category.cmp(&b.item_category))
    });
    ranked.truncate(top_n);

    Ok(ranked)
}

/// Count distinct categories in the table; used for the run summary.
pub fn distinct_categories(df: &DataFrame) -> Result<usize> {
    let categories = df.column("item_category")?.cast(&DataType::String)?;
    Ok(categories.as_materialized_series().n_unique()?)
}
