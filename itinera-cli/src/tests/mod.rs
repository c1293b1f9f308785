//! Shared test harness modules for the Itinera CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(clippy::expect_used, reason = "tests should fail fast")]

use super::*;

mod commands_unit;
mod helpers;
