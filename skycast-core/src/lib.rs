//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The WeatherAPI.com forecast client
//! - Report selection, filtering and formatting
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries.

pub mod config;
pub mod model;
pub mod report;
pub mod source;
pub mod style;

pub use config::Config;
pub use model::WeatherResponse;
pub use report::{Report, ReportError};
pub use source::{FetchError, ForecastSource, WeatherApiClient};
pub use style::Styles;
