//! Z-score outlier removal

use anyhow::Result;
use polars::prelude::*;

use crate::pipeline::error::{ConfigurationError, InvalidInputError};

/// Remove rows whose value in `column` lies more than `threshold` standard
/// deviations from the column mean.
///
/// The score is `z = (x - mean) / std` with population standard deviation
/// (ddof 0), computed once over the entire column. A constant column has
/// std 0; every z is then taken as 0 and no rows are removed. Returns a new
/// DataFrame; the input is untouched.
///
/// The pipeline applies this to `item_price` first and `quantity` second, so
/// rows removed by the price pass never enter the quantity statistics.
pub fn filter_outliers(df: &DataFrame, column: &str, threshold: f64) -> Result<DataFrame> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ConfigurationError::NonPositiveThreshold(threshold).into());
    }
    if df.height() == 0 {
        return Err(InvalidInputError::EmptyTable.into());
    }

    let values = df
        .column(column)
        .map_err(|_| InvalidInputError::MissingColumn(column.to_string()))?
        .cast(&DataType::Float64)?;
    let ca = values.f64()?;

    let mut count = 0usize;
    let mut sum = 0.0;
    for v in ca.into_iter().flatten() {
        count += 1;
        sum += v;
    }
    if count == 0 {
        // nothing but nulls; no statistics to filter on
        return Ok(df.clone());
    }
    let mean = sum / count as f64;

    let sq_dev: f64 = ca
        .into_iter()
        .flatten()
        .map(|v| (v - mean) * (v - mean))
        .sum();
    let std = (sq_dev / count as f64).sqrt();

    if std == 0.0 {
        return Ok(df.clone());
    }

    // nulls survive the filter; the cleaning pass owns null removal
    let keep: Vec<bool> = ca
        .into_iter()
        .map(|opt| match opt {
            Some(v) => ((v - mean) / std).abs() <= threshold,
            None => true,
        })
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);

    Ok(df.filter(&mask)?)
}
