use serde::Deserialize;
use serde_json::Value;


/// Team reference inside standings and scorers payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRef {
    pub name: String,
}

/// Top-level envelope for `/standings`
#[derive(Debug, Deserialize)]
pub struct StandingsEnvelope {
    pub standings: Vec<StandingGroup>,
}

/// One standings group (total, home, away, or a cup group)
#[derive(Debug, Deserialize)]
pub struct StandingGroup {
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableEntry {
    pub position: i64,
    pub team: TeamRef,
    #[serde(rename = "playedGames")]
    pub played_games: i64,
    pub won: i64,
    pub draw: i64,
    pub lost: i64,
    pub points: i64,
    #[serde(rename = "goalsFor")]
    pub goals_for: i64,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: i64,
}

/// Top-level envelope for `/scorers`
#[derive(Debug, Deserialize)]
pub struct ScorersEnvelope {
    pub scorers: Vec<Scorer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scorer {
    pub player: PlayerRef,
    pub team: TeamRef,
    #[serde(rename = "playedMatches")]
    pub played_matches: i64,
    pub goals: i64,
    /// `null` when the competition does not track assists
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub penalties: Option<i64>,
}

/// Top-level envelope for `/matches`. Fixtures stay raw so each one is
/// decoded only as far as the report needs.
#[derive(Debug, Deserialize)]
pub struct MatchesEnvelope {
    pub matches: Vec<Value>,
}

/// Both sides of a fixture. A side may be `null`, absent or unnamed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchSides {
    #[serde(rename = "homeTeam", default)]
    pub home_team: Option<MatchTeam>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Option<MatchTeam>,
}

impl MatchSides {
    /// Home and away names, or `None` if either side is undecided.
    pub fn names(self) -> Option<(String, String)> {
        let home = self.home_team?.name?;
        let away = self.away_team?.name?;
        Some((home, away))
    }
}

/// Knockout fixtures list undecided sides with a `null` name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchTeam {
    #[serde(default)]
    pub name: Option<String>,
}

/// Kick-off time and status of a fixture that is shown.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchSlot {
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    pub status: String,
}
