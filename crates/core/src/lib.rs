//! Error dialog core: error normalization and bug-report composition.
//!
//! - [`normalize`] turns a heterogeneous error record into a summary and a
//!   trace string.
//! - [`report`] turns that text, a live [`EnvironmentSnapshot`] and a
//!   [`ReportConfig`] into a pre-filled issue URL.
//!
//! Nothing in this crate performs I/O or panics on malformed input.

pub mod args;
pub mod encoding;
pub mod environment;
pub mod error;
pub mod exception;
pub mod normalize;
pub mod report;
pub mod report_config;

pub use args::DialogArgs;
pub use environment::{EnvironmentProbe, EnvironmentSnapshot, SystemEnvironment};
pub use error::CoreError;
pub use exception::ErrorInput;
pub use normalize::{normalize, NormalizedError};
pub use report::{compose, report_offered, BugReport, ReportRequest};
pub use report_config::ReportConfig;
