//! Cleansing: null removal, date parsing and total-amount derivation

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

/// Date formats accepted in the `transaction_date` column.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Drop every row with a null in any column.
pub fn drop_missing(df: &DataFrame) -> Result<DataFrame> {
    Ok(df.clone().lazy().drop_nulls(None).collect()?)
}

/// Parse the `transaction_date` column into a polars `Date` column.
///
/// String values are tried against the accepted formats; anything
/// unparseable becomes null and is removed by a following [`drop_missing`]
/// pass. A column that is already `Date` passes through unchanged.
pub fn parse_transaction_dates(df: &DataFrame) -> Result<DataFrame> {
    let column = df.column("transaction_date")?;
    if column.dtype() == &DataType::Date {
        return Ok(df.clone());
    }

    let strings = column.cast(&DataType::String)?;
    let ca = strings.str()?;
    let parsed = ca.into_iter().map(|opt| opt.and_then(parse_date));
    let dates = DateChunked::from_naive_date_options("transaction_date".into(), parsed);

    let mut out = df.clone();
    out.with_column(dates.into_series())?;
    Ok(out)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Attach the derived `total_amount = item_price * quantity` column.
pub fn with_total_amount(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .with_column((col("item_price") * col("quantity")).alias("total_amount"))
        .collect()?;
    Ok(out)
}

/// Read the `transaction_date` column as chrono dates, nulls preserved.
pub fn transaction_dates(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>> {
    let column = df.column("transaction_date")?.cast(&DataType::Date)?;
    let ca = column.as_materialized_series().date()?;
    let physical: &Int32Chunked = ca;
    Ok(physical
        .into_iter()
        .map(|opt| opt.and_then(date_from_days))
        .collect())
}

/// Days since the Unix epoch, polars' physical representation of `Date`.
fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(Duration::days(days as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(parse_date("2021-01-05"), Some(expected));
        assert_eq!(parse_date("2021/01/05"), Some(expected));
        assert_eq!(parse_date("05-01-2021"), Some(expected));
        assert_eq!(parse_date(" 2021-01-05 "), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_date_from_days_epoch() {
        assert_eq!(
            date_from_days(0),
            Some(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        );
        assert_eq!(
            date_from_days(18632),
            Some(NaiveDate::from_ymd_opt(2021, 1, 5).unwrap())
        );
    }
}
