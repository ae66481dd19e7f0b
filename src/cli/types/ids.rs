//! League identifier type.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Short competition code understood by football-data.org.
///
/// The code is passed through untouched; an unknown code is reported by the
/// remote service as an HTTP failure rather than rejected locally.
///
/// # Examples
///
/// ```rust
/// use footy::LeagueId;
///
/// let league_id = LeagueId::new("PL");
/// assert_eq!(league_id.as_str(), "PL");
/// assert_eq!(league_id.to_string(), "PL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

