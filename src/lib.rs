//! football-data.org CLI library
//!
//! Fetches league standings, top scorers or upcoming matches for one
//! competition and shapes the JSON response into a flat [`Report`] ready
//! for display.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use footy::{commands::{handle_report, ReportParams}, ApiConfig, LeagueId, ReportKind};
//!
//! # async fn example() -> footy::Result<()> {
//! let config = ApiConfig::load()?;
//! let params = ReportParams {
//!     kind: ReportKind::Standings,
//!     league_id: LeagueId::new("PL"),
//!     as_json: false,
//!     color: true,
//! };
//!
//! handle_report(&config, &params, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The API credential is read from the environment (or `.env`, or the
//! config file):
//! ```bash
//! export FOOTBALL_DATA_API_KEY=your-token
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod football;
pub mod logging;
pub mod models;
pub mod render;

pub use cli::types::{LeagueId, ReportKind};
pub use config::ApiConfig;
pub use error::{FootyError, Result};
pub use models::{Cell, Report, Row};

pub const API_KEY_ENV_VAR: &str = "FOOTBALL_DATA_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "FOOTBALL_DATA_BASE_URL";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FOOTBALL_DATA_HTTP_TIMEOUT";
