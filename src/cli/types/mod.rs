//! Type-safe wrappers for report selection and league codes.

pub mod ids;
pub mod report;

pub use ids::LeagueId;
pub use report::ReportKind;
