//! RugCheck Adapter
//!
//! `SecurityReportPort` implementation over the public RugCheck token report summary.

mod client;

pub use client::{parse_report_summary, RugCheckClient, DEFAULT_BASE_URL};
