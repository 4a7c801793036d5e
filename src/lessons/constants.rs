//! Constants versus construction-time values.
//!
//! `PI` is fixed when the crate is compiled and shared by every instance.
//! `created_on` is captured once in [`ConstantsDemo::new`] and can only be read
//! afterwards.

use chrono::{DateTime, Local};
use std::io::{self, Write};

/// Default rendering for `created_on`, e.g. `10/17/2026 3:04:05 PM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

#[derive(Debug, Clone)]
pub struct ConstantsDemo {
    created_on: DateTime<Local>,
}

impl ConstantsDemo {
    #[allow(clippy::approx_constant)]
    pub const PI: f64 = 3.14159;

    pub fn new() -> Self {
        Self::created_at(Local::now())
    }

    /// Builds an instance with an explicit creation time.
    pub fn created_at(created_on: DateTime<Local>) -> Self {
        Self { created_on }
    }

    pub fn created_on(&self) -> DateTime<Local> {
        self.created_on
    }

    pub fn show_values<W: Write>(&self, out: &mut W, timestamp_format: &str) -> io::Result<()> {
        writeln!(out, "Pi: {}", Self::PI)?;
        writeln!(
            out,
            "CreatedOn: {}",
            self.created_on.format(timestamp_format)
        )
    }
}

impl Default for ConstantsDemo {
    fn default() -> Self {
        Self::new()
    }
}
