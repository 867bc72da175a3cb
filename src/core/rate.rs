//! Exchange rate records and the provider abstraction

use async_trait::async_trait;

use super::date::DateKey;
use super::error::LookupError;

/// A noon USD→CAD rate and its CAD→USD inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    /// The rate exactly as published, e.g. `"1.2700"`.
    pub raw: String,
    pub rate: f64,
    /// `1 / rate`, rounded to 4 decimal places.
    pub inverse: f64,
}

impl RateRecord {
    /// Builds a record from the published rate string. Zero, negative and
    /// non-numeric rates are rejected.
    pub fn from_raw(raw: &str) -> Result<Self, LookupError> {
        let trimmed = raw.trim();
        let rate = trimmed.parse::<f64>().map_err(|_| {
            LookupError::MalformedResponse(format!("rate '{raw}' is not a number"))
        })?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(LookupError::MalformedResponse(format!(
                "rate '{raw}' is not a positive number"
            )));
        }

        Ok(RateRecord {
            raw: trimmed.to_string(),
            rate,
            inverse: round_to(1.0 / rate, 4),
        })
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch(&self, date: DateKey) -> Result<RateRecord, LookupError>;
}
