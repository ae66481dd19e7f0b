//! football-data.org access: request dispatch, payload types and the
//! transforms that shape payloads into reports.

pub mod http;
pub mod transform;
pub mod types;

pub use http::{FootballDataClient, RawPayload};
pub use transform::{matches_report, scorers_report, standings_report, transform};
