//! Interactive session: read dates line by line and keep a list of looked up rates.

use super::{lookup_date, ui};
use crate::core::{Clock, RateProvider, format_row, header_row};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "Enter a date as YYYY-MM-DD to look up its noon USD/CAD rate.
Commands: list (show rows), clear (empty the list), help, quit";

/// Rows shown to the user during a session.
#[derive(Debug, Default)]
pub struct RateList {
    rows: Vec<String>,
}

impl RateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: String) {
        self.rows.push(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by every row, one per line.
    pub fn render(&self) -> String {
        let mut output = ui::style_text(&header_row(), ui::StyleType::Header);
        for row in &self.rows {
            output.push('\n');
            output.push_str(row);
        }
        output
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction<'a> {
    Lookup(&'a str),
    List,
    Clear,
    Help,
    Quit,
    Empty,
}

pub fn parse_action(line: &str) -> SessionAction<'_> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => SessionAction::Empty,
        "list" | "ls" => SessionAction::List,
        "clear" => SessionAction::Clear,
        "help" | "?" => SessionAction::Help,
        "quit" | "exit" | "q" => SessionAction::Quit,
        _ => SessionAction::Lookup(line),
    }
}

/// Runs the session on stdin/stdout until `quit` or end of input.
pub async fn run(provider: &dyn RateProvider, clock: &dyn Clock) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let list = run_with_io(provider, clock, stdin, &mut stdout).await?;
    debug!(rows = list.len(), "Session ended");
    Ok(())
}

/// Drives the session over arbitrary input and output, returning the final list.
pub async fn run_with_io<R, W>(
    provider: &dyn RateProvider,
    clock: &dyn Clock,
    input: R,
    out: &mut W,
) -> Result<RateList>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut list = RateList::new();
    let mut lines = input.lines();

    writeln!(
        out,
        "{}",
        ui::style_text("Noon USD to CAD Exchange Rates", ui::StyleType::Title)
    )?;
    writeln!(out, "{}", ui::style_text(HELP, ui::StyleType::Subtle))?;

    loop {
        write!(out, "date> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_action(&line) {
            SessionAction::Empty => {}
            SessionAction::Quit => break,
            SessionAction::Help => writeln!(out, "{HELP}")?,
            SessionAction::List => writeln!(out, "{}", list.render())?,
            SessionAction::Clear => {
                list.clear();
                writeln!(out, "{}", ui::style_text("List cleared", ui::StyleType::Subtle))?;
            }
            SessionAction::Lookup(input) => match lookup_date(provider, clock, input).await {
                Ok((date, record)) => {
                    if list.is_empty() {
                        writeln!(out, "{}", ui::style_text(&header_row(), ui::StyleType::Header))?;
                    }
                    let row = format_row(date, &record);
                    writeln!(out, "{row}")?;
                    list.push(row);
                }
                Err(e) => {
                    debug!(error = %e, kind = ?e.kind(), "Lookup failed");
                    writeln!(out, "{}", ui::warning(&e.to_string()))?;
                }
            },
        }
    }

    Ok(list)
}
