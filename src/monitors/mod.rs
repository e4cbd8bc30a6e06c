//! Launch monitor profiles.
//!
//! A [`LaunchMonitor`] knows how one device's CSV export maps onto
//! [`ProcessedShot`]. [`MonitorRegistry`] resolves a user-supplied type name
//! to a profile, so new devices plug in without touching the scanner.

mod mlm2pro;
mod registry;

pub use mlm2pro::Mlm2Pro;
pub use registry::MonitorRegistry;

use crate::error::Result;
use crate::shot::{ProcessedShot, RawShot};

pub trait LaunchMonitor {
    /// Display name recorded on every [`RawShot`] this profile produces.
    fn name(&self) -> &'static str;

    /// Maps a data row onto the active header set.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::InsufficientColumns`](crate::error::ShotError::InsufficientColumns)
    /// when the row is shorter than the headers.
    fn parse_row(&self, row: &[&str], headers: &[String]) -> Result<RawShot>;

    /// Converts a raw row into a normalized shot with a zero target.
    fn process_raw(&self, raw: &RawShot) -> ProcessedShot;
}
