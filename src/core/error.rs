//! Error kinds surfaced by date validation and rate lookups

use chrono::NaiveDate;
use thiserror::Error;

/// Every failure the lookup pipeline can report. All of them are recoverable;
/// callers turn them into a warning for the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("No such day in calendar: '{input}' ({reason})")]
    MalformedDate { input: String, reason: String },

    #[error("Your date must be prior to today ({today}), got {date}")]
    NotPast { date: NaiveDate, today: NaiveDate },

    #[error("No rate for {0}: date is a weekend or holiday or prior to 2017")]
    NoData(NaiveDate),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

/// Fieldless view of [`LookupError`] for callers that only need the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedDate,
    NotPast,
    NoData,
    NetworkError,
    MalformedResponse,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::MalformedDate { .. } => ErrorKind::MalformedDate,
            LookupError::NotPast { .. } => ErrorKind::NotPast,
            LookupError::NoData(_) => ErrorKind::NoData,
            LookupError::Network(_) => ErrorKind::NetworkError,
            LookupError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    pub(crate) fn malformed_date(input: &str, reason: impl Into<String>) -> Self {
        LookupError::MalformedDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let date = NaiveDate::from_ymd_opt(2021, 2, 13).unwrap();
        assert_eq!(
            LookupError::malformed_date("2021-13-01", "not a calendar date").kind(),
            ErrorKind::MalformedDate
        );
        assert_eq!(
            LookupError::NotPast { date, today: date }.kind(),
            ErrorKind::NotPast
        );
        assert_eq!(LookupError::NoData(date).kind(), ErrorKind::NoData);
        assert_eq!(
            LookupError::Network("timeout".into()).kind(),
            ErrorKind::NetworkError
        );
        assert_eq!(
            LookupError::MalformedResponse("bad".into()).kind(),
            ErrorKind::MalformedResponse
        );
    }

    #[test]
    fn test_no_data_message_mentions_weekends_and_holidays() {
        let date = NaiveDate::from_ymd_opt(2021, 2, 13).unwrap();
        let msg = LookupError::NoData(date).to_string();
        assert_eq!(
            msg,
            "No rate for 2021-02-13: date is a weekend or holiday or prior to 2017"
        );
    }

    #[test]
    fn test_http_client_error_is_network_error() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        assert_eq!(LookupError::from(err).kind(), ErrorKind::NetworkError);
    }

    #[test]
    fn test_json_error_is_malformed_response() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(LookupError::from(err).kind(), ErrorKind::MalformedResponse);
    }
}
