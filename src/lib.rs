//! Spendlens: Retail Transaction Analytics Library
//!
//! A library for descriptive analytics over per-transaction retail data:
//! z-score outlier cleaning, category rankings, spend-based customer
//! segmentation and cohort retention analysis.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
