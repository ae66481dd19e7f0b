//! Report data shared by the transformer and the renderer.

pub mod output;

pub use output::{Cell, Report, Row, PLACEHOLDER};
