use crate::error::{Result, ScheduleError};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    Increase,
    Decrease,
    Adjust,
}

/// A request to change the rate from a given row onwards.
///
/// `row` is the 1-based sequence number shown next to each payment. Increase
/// and decrease move the rate by one percentage point unless `delta` says
/// otherwise; adjust applies `delta` as a signed change and requires it.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RateChange {
    pub r#type: AdjustmentType,
    pub row: u32,
    pub delta: Option<Decimal>,
}

impl RateChange {
    pub fn increase(row: u32) -> Self {
        Self {
            r#type: AdjustmentType::Increase,
            row,
            delta: None,
        }
    }

    pub fn decrease(row: u32) -> Self {
        Self {
            r#type: AdjustmentType::Decrease,
            row,
            delta: None,
        }
    }

    pub fn adjust(row: u32, delta: Decimal) -> Self {
        Self {
            r#type: AdjustmentType::Adjust,
            row,
            delta: Some(delta),
        }
    }

    /// The 0-based schedule index this change starts at.
    pub fn row_index(&self) -> Result<usize> {
        (self.row as usize)
            .checked_sub(1)
            .ok_or_else(|| ScheduleError::invalid("row", "sequence numbers start at 1"))
    }

    /// Signed change in percentage points.
    pub fn delta_percent(&self) -> Result<Decimal> {
        let step = self.delta.unwrap_or(Decimal::ONE).abs();
        match self.r#type {
            AdjustmentType::Increase => Ok(step),
            AdjustmentType::Decrease => Ok(-step),
            AdjustmentType::Adjust => self
                .delta
                .ok_or_else(|| ScheduleError::invalid("delta", "adjust requires a delta")),
        }
    }
}
