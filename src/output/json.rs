//! JSON output formatting for stoa.
//!
//! This module provides functions for formatting stoa data as JSON.

use serde::Serialize;
use serde_json::json;

use crate::articles::Article;
use crate::error::StoaError;

/// Format articles as JSON
///
/// # Errors
///
/// Returns `StoaError::Parse` if JSON serialization fails.
pub fn format_articles_json(articles: &[Article]) -> Result<String, StoaError> {
    let output = json!({
        "count": articles.len(),
        "items": articles
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single article as JSON
///
/// # Errors
///
/// Returns `StoaError::Parse` if JSON serialization fails.
pub fn format_article_json(article: &Article) -> Result<String, StoaError> {
    Ok(serde_json::to_string_pretty(article)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `StoaError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StoaError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::Category;

    fn make_article(title: &str) -> Article {
        let mut article = Article::new(
            title.to_string(),
            "An excerpt".to_string(),
            "The body text.".to_string(),
            Category::Philosophy,
        );
        article.id = Some(1);
        article
    }

    #[test]
    fn test_format_articles_json_empty_list() {
        let articles: Vec<Article> = vec![];
        let result = format_articles_json(&articles).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_articles_json_single() {
        let articles = vec![make_article("On Patience")];
        let result = format_articles_json(&articles).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"title\": \"On Patience\""));
        assert!(result.contains("\"category\": \"philosophy\""));
        assert!(result.contains("\"readTime\": \"1 min\""));
    }

    #[test]
    fn test_format_article_json_single() {
        let article = make_article("On Patience");
        let result = format_article_json(&article).unwrap();

        assert!(result.contains("\"title\": \"On Patience\""));
        assert!(result.contains("\"favorite\": false"));
    }

    #[test]
    fn test_json_preserves_special_characters() {
        let mut article = make_article("Quotes \"and\" backslashes \\");
        article.body = "Line 1\nLine 2\tTabbed".to_string();
        let result = format_article_json(&article).unwrap();

        assert!(result.contains("\\\"and\\\""));
        assert!(result.contains("\\\\"));
        assert!(result.contains("\\n"));
        assert!(result.contains("\\t"));
    }

    #[test]
    fn test_to_json_generic() {
        let article = make_article("Generic test");
        let result = to_json(&article).unwrap();

        assert!(result.contains("\"title\": \"Generic test\""));
    }
}
