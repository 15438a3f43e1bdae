//! Testbench - developer tooling for integration tests and code review.
//!
//! - [`serve`]: mock HTTP servers standing in for third-party APIs
//! - [`report`]: HTML reports from complexity-metrics JSON
//!
//! Both are driven by the `testbench` binary and configured through
//! [`config::TestbenchConfig`].

pub mod config;
pub mod logging;
pub mod output;
pub mod report;
pub mod serve;
