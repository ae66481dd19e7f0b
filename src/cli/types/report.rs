//! Report selection.

use colored::Color;
use serde::Serialize;
use std::fmt;

/// Which of the three data views is requested.
///
/// The kind decides the request path suffix, the column schema of the
/// resulting report and the header color used when rendering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Standings,
    Scorers,
    Matches,
}

impl ReportKind {
    /// Path suffix appended after the league code.
    pub fn path_suffix(&self) -> &'static str {
        match self {
            ReportKind::Standings => "/standings",
            ReportKind::Scorers => "/scorers",
            ReportKind::Matches => "/matches?status=SCHEDULED",
        }
    }

    /// Column labels, in display order.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Standings => &[
                "Position",
                "Team",
                "Points",
                "Matches Played",
                "Won",
                "Drawn",
                "Lost",
                "Goals Scored",
                "Goals Conceded",
                "Goal Difference",
            ],
            ReportKind::Scorers => &[
                "Position",
                "Player",
                "Team",
                "Played Matches",
                "Goals",
                "Assists",
                "Penalties",
            ],
            ReportKind::Matches => &["Match", "Date / Hour(UTC)", "Status"],
        }
    }

    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    pub fn header_color(&self) -> Color {
        match self {
            ReportKind::Standings => Color::Yellow,
            ReportKind::Scorers => Color::Green,
            ReportKind::Matches => Color::Blue,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportKind::Standings => "standings",
            ReportKind::Scorers => "scorers",
            ReportKind::Matches => "matches",
        };
        write!(f, "{}", s)
    }
}
