pub mod lookup;
pub mod session;
pub mod setup;
pub mod ui;

use crate::core::{Clock, DateKey, LookupError, RateProvider, RateRecord, validate};

/// Validates `input` and fetches the rate for it. Shared by every front end.
pub async fn lookup_date(
    provider: &dyn RateProvider,
    clock: &dyn Clock,
    input: &str,
) -> Result<(DateKey, RateRecord), LookupError> {
    let date = validate(input, clock)?;
    let record = provider.fetch(date).await?;
    Ok((date, record))
}
