//! Pure transforms from raw API payloads to [`Report`]s.
//!
//! Each transform decodes only the keys its report needs and keeps the
//! upstream order. A payload missing an expected key or shape is reported as
//! [`FootyError::MalformedPayload`].

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    cli::types::ReportKind,
    error::FootyError,
    football::types::{
        MatchSides, MatchSlot, MatchesEnvelope, ScorersEnvelope, StandingsEnvelope,
    },
    models::{Cell, Report},
    Result,
};


/// Upper bound on rows in a matches report.
pub const MATCHES_ROW_CAP: usize = 30;

/// Status of fixtures whose kickoff hour is not confirmed yet.
pub const SCHEDULED_STATUS: &str = "SCHEDULED";

pub const NOT_YET_PROVIDED: &str = " (Not yet provided)";

const UTC_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shape `payload` into the report for `kind`.
pub fn transform(kind: ReportKind, payload: &Value) -> Result<Report> {
    match kind {
        ReportKind::Standings => standings_report(payload),
        ReportKind::Scorers => scorers_report(payload),
        ReportKind::Matches => matches_report(payload),
    }
}

fn decode<'a, T: Deserialize<'a>>(kind: ReportKind, payload: &'a Value) -> Result<T> {
    T::deserialize(payload).map_err(|e| FootyError::malformed(kind, e))
}

/// One row per team of the first standings group.
///
/// Goal difference is computed here from goals for and against; the
/// upstream `goalDifference` field is ignored.
pub fn standings_report(payload: &Value) -> Result<Report> {
    let kind = ReportKind::Standings;
    let envelope: StandingsEnvelope = decode(kind, payload)?;
    let group = envelope
        .standings
        .into_iter()
        .next()
        .ok_or_else(|| FootyError::malformed(kind, "no standings groups"))?;

    let mut report = Report::new(kind);
    for team in group.table {
        let goal_difference = team
            .goals_for
            .checked_sub(team.goals_against)
            .ok_or_else(|| {
                FootyError::malformed(
                    kind,
                    format!("goal difference out of range for {}", team.team.name),
                )
            })?;
        report.push_row(vec![
            Cell::Int(team.position),
            team.team.name.into(),
            Cell::Int(team.points),
            Cell::Int(team.played_games),
            Cell::Int(team.won),
            Cell::Int(team.draw),
            Cell::Int(team.lost),
            Cell::Int(team.goals_for),
            Cell::Int(team.goals_against),
            Cell::Int(goal_difference),
        ]);
    }
    Ok(report)
}

/// One row per scorer. Positions count from 1 in list order.
pub fn scorers_report(payload: &Value) -> Result<Report> {
    let kind = ReportKind::Scorers;
    let envelope: ScorersEnvelope = decode(kind, payload)?;

    let mut report = Report::new(kind);
    for (position, scorer) in (1i64..).zip(envelope.scorers) {
        report.push_row(vec![
            Cell::Int(position),
            scorer.player.name.into(),
            scorer.team.name.into(),
            Cell::Int(scorer.played_matches),
            Cell::Int(scorer.goals),
            Cell::optional(scorer.assists),
            Cell::optional(scorer.penalties),
        ]);
    }
    Ok(report)
}

/// Upcoming fixtures, skipping any with an undecided side, capped at
/// [`MATCHES_ROW_CAP`] rows.
///
/// `utcDate` and `status` are only read for fixtures that become rows.
pub fn matches_report(payload: &Value) -> Result<Report> {
    let kind = ReportKind::Matches;
    let envelope: MatchesEnvelope = decode(kind, payload)?;

    let mut report = Report::new(kind);
    for fixture in &envelope.matches {
        if report.len() >= MATCHES_ROW_CAP {
            break;
        }
        let sides: MatchSides = decode(kind, fixture)?;
        let Some((home, away)) = sides.names() else {
            continue;
        };

        let slot: MatchSlot = decode(kind, fixture)?;
        let date = display_date(&slot.utc_date, &slot.status)?;
        report.push_row(vec![
            format!("{home} vs {away}").into(),
            date.into(),
            slot.status.into(),
        ]);
    }
    Ok(report)
}

fn display_date(utc_date: &str, status: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(utc_date, UTC_DATE_FORMAT).map_err(|e| {
        FootyError::malformed(ReportKind::Matches, format!("bad utcDate {utc_date:?}: {e}"))
    })?;

    if status == SCHEDULED_STATUS {
        let day = utc_date.split('T').next().unwrap_or(utc_date);
        Ok(format!("{day}{NOT_YET_PROVIDED}"))
    } else {
        Ok(parsed.format(DISPLAY_DATE_FORMAT).to_string())
    }
}
