use super::{lookup_date, ui};
use crate::core::{Clock, DateKey, LookupError, RateProvider, RateRecord};
use comfy_table::Table;

pub type LookupOutcome = (String, Result<(DateKey, RateRecord), LookupError>);

/// Looks up each date in order. Failures are kept alongside successes.
pub async fn lookup_all(
    provider: &dyn RateProvider,
    clock: &dyn Clock,
    dates: &[String],
) -> Vec<LookupOutcome> {
    let pb = ui::new_spinner("Fetching rates...");
    let mut outcomes = Vec::with_capacity(dates.len());
    for input in dates {
        pb.set_message(format!("Fetching rate for {input}..."));
        let outcome = lookup_date(provider, clock, input).await;
        outcomes.push((input.clone(), outcome));
    }
    pb.finish_and_clear();
    outcomes
}

pub fn display_as_table(outcomes: &[LookupOutcome]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("USD to CAD"),
        ui::header_cell("CAD to USD"),
    ]);

    for (input, outcome) in outcomes {
        match outcome {
            Ok((date, record)) => {
                table.add_row(vec![
                    comfy_table::Cell::new(date.to_string()),
                    ui::rate_cell(&record.raw),
                    ui::rate_cell(&format!("{:.4}", record.inverse)),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    comfy_table::Cell::new(input.trim()),
                    ui::warning_cell(&e.to_string()),
                    comfy_table::Cell::new(""),
                ]);
            }
        }
    }
    table
}

pub async fn run(provider: &dyn RateProvider, clock: &dyn Clock, dates: &[String]) {
    let outcomes = lookup_all(provider, clock, dates).await;
    println!("{}", display_as_table(&outcomes));
}
