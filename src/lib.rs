//! Spending forecast and budget-analysis pipeline.
//!
//! Turns an append-only spending ledger into model-ready feature windows,
//! drives pretrained ratio/total models through an injected inference
//! backend, and derives budget risk, rebalance, and daily-limit advice
//! from the forecast.

pub mod budget;
pub mod config;
pub mod features;
pub mod forecast;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod report;
