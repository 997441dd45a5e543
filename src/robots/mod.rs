//! Robots.txt discovery module
//!
//! This module probes hosts for a `/robots.txt` file and records the ones that
//! exist. It does not parse or interpret robots.txt rules.

mod checker;

pub use checker::{ProbeOutcome, RobotsChecker};
