//! Output formatting for stoa.
//!
//! This module provides formatters for displaying stoa data in various formats.

mod json;
pub mod markdown;
mod pretty;

use crate::articles::Article;
use crate::cli::args::OutputFormat;
use crate::error::StoaError;

pub use json::*;
pub use pretty::*;

/// Format articles based on output format
///
/// # Errors
///
/// Returns `StoaError::Parse` if JSON serialization fails.
pub fn format_articles(articles: &[Article], format: OutputFormat) -> Result<String, StoaError> {
    match format {
        OutputFormat::Pretty => Ok(format_articles_pretty(articles)),
        OutputFormat::Json => format_articles_json(articles),
    }
}

/// Format a single article based on output format
///
/// # Errors
///
/// Returns `StoaError::Parse` if JSON serialization fails.
pub fn format_article(article: &Article, format: OutputFormat) -> Result<String, StoaError> {
    match format {
        OutputFormat::Pretty => Ok(format_article_pretty(article)),
        OutputFormat::Json => format_article_json(article),
    }
}
