mod parsing;
mod query;

pub use parsing::{parse_batch, summarize, Report};
pub use query::Collector;

use serde::Deserialize;

/// A single reading as served by the collector. Any other fields the sensor
/// attached (`sensor_id`, `humidity`, ...) are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub temperature: f64,
}

/// Readings decoded from one cycle's response.
pub type ReadingBatch = Vec<SensorReading>;
