//! Weight history model
//!
//! Timestamped body-weight samples and the chronological history built from
//! them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::parse_timestamp;
use crate::nutrition::error::{PlanError, PlanResult};

/// A single body-weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub timestamp: NaiveDateTime,
    pub weight: f64, // kg
}

/// A weight row as persisted by the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecord {
    pub weight: f64,
    pub recorded_at: String,
}

impl WeightRecord {
    /// Convert to a sample, rejecting unparseable timestamps and non-positive weights
    pub fn to_sample(&self) -> PlanResult<WeightSample> {
        let timestamp = parse_timestamp(&self.recorded_at).ok_or_else(|| {
            PlanError::InvalidRecord(format!(
                "unparseable recorded_at '{}'",
                self.recorded_at
            ))
        })?;

        let sample = WeightSample {
            timestamp,
            weight: self.weight,
        };
        sample.checked_weight()?;
        Ok(sample)
    }
}

impl WeightSample {
    /// The weight, rejected unless finite and positive
    pub fn checked_weight(&self) -> PlanResult<f64> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(PlanError::InvalidRecord(format!(
                "weight must be greater than 0 (got {} at {})",
                self.weight, self.timestamp
            )));
        }
        Ok(self.weight)
    }
}

/// Weight samples in chronological order
///
/// Serialized as a plain sample list; deserializing sorts it like `new`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WeightSample>", into = "Vec<WeightSample>")]
pub struct WeightHistory {
    samples: Vec<WeightSample>,
}

impl WeightHistory {
    /// Build a history, sorting samples by timestamp
    ///
    /// Samples sharing a timestamp keep their input order.
    pub fn new(mut samples: Vec<WeightSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    /// Build a history from store rows
    pub fn from_records(records: &[WeightRecord]) -> PlanResult<Self> {
        let samples = records
            .iter()
            .map(WeightRecord::to_sample)
            .collect::<PlanResult<Vec<_>>>()?;
        Ok(Self::new(samples))
    }

    pub fn samples(&self) -> &[WeightSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest recorded sample
    pub fn first(&self) -> Option<&WeightSample> {
        self.samples.first()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&WeightSample> {
        self.samples.last()
    }
}

impl From<Vec<WeightSample>> for WeightHistory {
    fn from(samples: Vec<WeightSample>) -> Self {
        Self::new(samples)
    }
}

impl From<WeightHistory> for Vec<WeightSample> {
    fn from(history: WeightHistory) -> Self {
        history.samples
    }
}
