//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgGroup, Parser};
use types::{LeagueId, ReportKind};

const LEAGUES_HELP: &str = "Available League IDs:
  PD   Primera Division
  SA   Serie A
  PL   Premier League
  BL1  Bundesliga
  FL1  Ligue 1
  CL   Champions League";

/// Get the table, top scorers, and upcoming matches for the league of your
/// choice from the major European leagues and the Champions League.
#[derive(Debug, Parser)]
#[clap(name = "footy", version, after_help = LEAGUES_HELP)]
#[clap(group(ArgGroup::new("report").multiple(false)))]
pub struct Cli {
    /// Provide the table of the league of interest.
    #[clap(short = 't', long = "table", value_name = "LEAGUE", group = "report")]
    pub table: Option<LeagueId>,

    /// Provide the top scorers of the league of interest.
    #[clap(short = 's', long = "scorers", value_name = "LEAGUE", group = "report")]
    pub scorers: Option<LeagueId>,

    /// Provide the upcoming matches of the league of interest.
    #[clap(short = 'm', long = "matches", value_name = "LEAGUE", group = "report")]
    pub matches: Option<LeagueId>,

    /// Output the report as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    /// Disable colored table headers (also honoured via `NO_COLOR`).
    #[clap(long)]
    pub no_color: bool,

    /// Log request URLs and response statuses to stderr.
    #[clap(long)]
    pub debug: bool,
}

impl Cli {
    /// The selected report, if any flag was given.
    pub fn report_request(&self) -> Option<(ReportKind, LeagueId)> {
        if let Some(league) = &self.table {
            Some((ReportKind::Standings, league.clone()))
        } else if let Some(league) = &self.scorers {
            Some((ReportKind::Scorers, league.clone()))
        } else {
            self.matches
                .as_ref()
                .map(|league| (ReportKind::Matches, league.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("footy").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_short_flags_select_report_kind() {
        assert_eq!(
            parse(&["-t", "PD"]).report_request(),
            Some((ReportKind::Standings, LeagueId::new("PD")))
        );
        assert_eq!(
            parse(&["-s", "PL"]).report_request(),
            Some((ReportKind::Scorers, LeagueId::new("PL")))
        );
        assert_eq!(
            parse(&["-m", "SA"]).report_request(),
            Some((ReportKind::Matches, LeagueId::new("SA")))
        );
    }

    #[test]
    fn test_long_flags_and_options() {
        let cli = parse(&["--scorers", "BL1", "--json", "--no-color", "--debug"]);
        assert_eq!(
            cli.report_request(),
            Some((ReportKind::Scorers, LeagueId::new("BL1")))
        );
        assert!(cli.json);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn test_no_flag_selects_nothing() {
        let cli = parse(&[]);
        assert!(cli.report_request().is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_report_flags_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["footy", "-t", "PD", "-s", "PD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_flag_requires_league() {
        let result = Cli::try_parse_from(["footy", "-m"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_lists_leagues() {
        use clap::CommandFactory;
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("BL1"));
        assert!(help.contains("Champions League"));
    }
}
