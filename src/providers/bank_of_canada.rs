use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::{DateKey, LookupError, RateProvider, RateRecord};

/// Valet series holding the daily USD→CAD rate.
pub const SERIES: &str = "FXUSDCAD";

/// Fetches noon rates from the Bank of Canada Valet API. Every call hits the
/// network; wrap it in a `CachingRateProvider` to memoize.
pub struct BankOfCanadaProvider {
    base_url: String,
    client: reqwest::Client,
}

impl BankOfCanadaProvider {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder().user_agent("noonrate/1.0");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(BankOfCanadaProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn observations_url(&self, date: DateKey) -> String {
        format!(
            "{}/observations/{SERIES}/json?start_date={date}&end_date={date}",
            self.base_url
        )
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    #[serde(rename = "FXUSDCAD")]
    usd_cad: Option<ObservationValue>,
}

#[derive(Debug, Deserialize)]
struct ObservationValue {
    v: String,
}

/// Extracts the first observation's rate from a Valet response body.
fn parse_observations(date: DateKey, body: &str) -> Result<RateRecord, LookupError> {
    let data: ObservationsResponse = serde_json::from_str(body)?;

    let observation = data
        .observations
        .first()
        .ok_or(LookupError::NoData(date.date()))?;

    let value = observation.usd_cad.as_ref().ok_or_else(|| {
        LookupError::MalformedResponse(format!("observation for {date} has no {SERIES} value"))
    })?;

    RateRecord::from_raw(&value.v)
}

#[async_trait]
impl RateProvider for BankOfCanadaProvider {
    #[instrument(
        name = "ValetRateFetch",
        skip(self),
        fields(date = %date)
    )]
    async fn fetch(&self, date: DateKey) -> Result<RateRecord, LookupError> {
        let url = self.observations_url(date);
        debug!("Requesting rate from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(format!("{e} for date: {date}")))?;

        debug!(response = ?response, "Received Valet response");

        if !response.status().is_success() {
            return Err(LookupError::Network(format!(
                "HTTP error: {} for date: {}",
                response.status(),
                date
            )));
        }

        let text = response.text().await?;

        let record = parse_observations(date, &text)?;
        debug!(rate = %record.raw, inverse = record.inverse, "Parsed rate");
        Ok(record)
    }
}
