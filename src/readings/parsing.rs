use std::fmt;

use super::ReadingBatch;
use crate::error::CycleError;

/// What a successful cycle has to say.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    /// Mean temperature of the batch, in °C.
    Average(f64),
    /// The collector answered with an empty array.
    NoData,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Average(avg) => write!(f, "Average temperature: {avg:.2}°C"),
            Report::NoData => write!(f, "No data yet..."),
        }
    }
}

pub fn parse_batch(raw: &str) -> Result<ReadingBatch, CycleError> {
    Ok(serde_json::from_str::<ReadingBatch>(raw)?)
}

pub fn summarize(batch: &ReadingBatch) -> Report {
    if batch.is_empty() {
        return Report::NoData;
    }
    let sum: f64 = batch.iter().map(|r| r.temperature).sum();
    Report::Average(sum / batch.len() as f64)
}
