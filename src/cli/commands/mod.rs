//! Command implementations for stoa.
//!
//! This module contains the implementation of all CLI commands.

mod article;
mod breathe;
mod meditate;

pub use article::article;
pub use breathe::breathe;
pub use meditate::meditate;

use crate::cli::args::{OutputFormat, StatsArgs};
use crate::error::StoaError;
use crate::output::{format_practice_pretty, to_json};
use crate::practice::{PracticeReport, PracticeStorage};

/// Execute stats command
///
/// # Errors
///
/// Returns an error if the practice log cannot be read.
pub fn stats(args: &StatsArgs, format: OutputFormat) -> Result<String, StoaError> {
    let storage = PracticeStorage::new()?;
    let report = PracticeReport::generate(&storage)?;

    match format {
        OutputFormat::Json => {
            if args.history > 0 {
                let sessions = storage.recent(args.history)?;
                to_json(&serde_json::json!({
                    "report": report,
                    "history": sessions,
                }))
            } else {
                to_json(&report)
            }
        }
        OutputFormat::Pretty => {
            let mut output = report.format();
            if args.history > 0 {
                let sessions = storage.recent(args.history)?;
                output.push_str("\n\n");
                output.push_str(&format_practice_pretty(&sessions));
            }
            Ok(output)
        }
    }
}
