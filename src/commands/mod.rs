//! Command implementations for the football-data CLI

pub mod report;

#[cfg(test)]
mod tests;

use std::io::Write;

use crate::{cli::Cli, config::ApiConfig, Result};

pub use report::{handle_report, ReportParams};

/// Dispatch parsed arguments. With no report flag nothing is loaded or written.
pub async fn run<W: Write>(app: Cli, out: &mut W) -> Result<()> {
    let Some((kind, league_id)) = app.report_request() else {
        return Ok(());
    };

    let config = ApiConfig::load()?;
    let params = ReportParams {
        kind,
        league_id,
        as_json: app.json,
        color: !app.no_color,
    };
    handle_report(&config, &params, out).await
}
