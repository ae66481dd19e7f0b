//! Report command implementation

use std::io::Write;
use tracing::info;

use crate::{
    cli::types::{LeagueId, ReportKind},
    config::ApiConfig,
    football::{transform, FootballDataClient},
    render::{render_json, render_table},
    Result,
};

/// What to fetch and how to print it.
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub kind: ReportKind,
    pub league_id: LeagueId,
    pub as_json: bool,
    pub color: bool,
}

/// Fetch, shape and print one report.
///
/// Nothing is written to `out` unless the whole report was produced.
pub async fn handle_report<W: Write>(
    config: &ApiConfig,
    params: &ReportParams,
    out: &mut W,
) -> Result<()> {
    let client = FootballDataClient::new(config)?;
    let payload = client.fetch(params.kind, &params.league_id).await?;
    let report = transform(params.kind, &payload)?;
    info!(kind = %params.kind, league = %params.league_id, rows = report.len(), "report ready");

    let rendered = if params.as_json {
        let mut json = render_json(&report)?;
        json.push('\n');
        json
    } else {
        render_table(&report, params.color)
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
