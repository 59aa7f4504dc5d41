use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Words per minute assumed when computing read time.
const READ_WORDS_PER_MINUTE: usize = 200;

/// An article in the reading library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Database ID (None if not persisted).
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Markdown body.
    pub body: String,
    pub category: Category,
    /// Computed read-time string, e.g. "3 min".
    pub read_time: String,
    #[serde(default)]
    pub favorite: bool,
    /// True for the built-in articles shipped with stoa.
    #[serde(default)]
    pub seeded: bool,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

const fn default_published() -> bool {
    true
}

impl Article {
    /// Create a new unsaved article. Read time is computed from the
    /// body; an empty excerpt falls back to a body prefix.
    #[must_use]
    pub fn new(title: String, excerpt: String, body: String, category: Category) -> Self {
        let now = Utc::now();
        let excerpt = if excerpt.trim().is_empty() {
            excerpt_from_body(&body)
        } else {
            excerpt.trim().to_string()
        };

        Self {
            id: None,
            read_time: compute_read_time(&body),
            title: title.trim().to_string(),
            excerpt,
            body: body.trim().to_string(),
            category,
            favorite: false,
            seeded: false,
            published: true,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Recompute derived fields after the body changed.
    pub fn refresh_derived(&mut self) {
        self.read_time = compute_read_time(&self.body);
        if self.excerpt.trim().is_empty() {
            self.excerpt = excerpt_from_body(&self.body);
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Article category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Uncategorized,
    CorePrinciples,
    PracticeGuide,
    Mindfulness,
    Philosophy,
}

impl Category {
    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Uncategorized,
            Self::CorePrinciples,
            Self::PracticeGuide,
            Self::Mindfulness,
            Self::Philosophy,
        ]
    }

    /// Stable identifier stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::CorePrinciples => "core-principles",
            Self::PracticeGuide => "practice-guide",
            Self::Mindfulness => "mindfulness",
            Self::Philosophy => "philosophy",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Uncategorized => "Uncategorized",
            Self::CorePrinciples => "Core Principles",
            Self::PracticeGuide => "Practice Guide",
            Self::Mindfulness => "Mindfulness",
            Self::Philosophy => "Philosophy",
        }
    }

    /// Parse from the stored identifier; unknown values map to
    /// `Uncategorized`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "core-principles" => Self::CorePrinciples,
            "practice-guide" => Self::PracticeGuide,
            "mindfulness" => Self::Mindfulness,
            "philosophy" => Self::Philosophy,
            _ => Self::Uncategorized,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Compute a read-time string from body text (200 wpm, minimum 1 minute).
#[must_use]
pub fn compute_read_time(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(READ_WORDS_PER_MINUTE).max(1);
    format!("{minutes} min")
}

/// First 150 characters of the body, used when no excerpt was given.
fn excerpt_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= 150 {
        trimmed.to_string()
    } else {
        let prefix: String = trimmed.chars().take(150).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_read_time() {
        assert_eq!(compute_read_time("one two three"), "1 min");

        let four_hundred = "word ".repeat(400);
        assert_eq!(compute_read_time(&four_hundred), "2 min");

        let four_oh_one = "word ".repeat(401);
        assert_eq!(compute_read_time(&four_oh_one), "3 min");

        assert_eq!(compute_read_time(""), "1 min");
    }

    #[test]
    fn test_new_article_fills_excerpt() {
        let article = Article::new(
            "  Title  ".to_string(),
            String::new(),
            "A short body.".to_string(),
            Category::Philosophy,
        );

        assert_eq!(article.title, "Title");
        assert_eq!(article.excerpt, "A short body.");
        assert_eq!(article.read_time, "1 min");
        assert!(article.published);
        assert!(!article.seeded);
    }

    #[test]
    fn test_long_body_excerpt_truncated() {
        let body = "x".repeat(400);
        let article = Article::new("T".to_string(), String::new(), body, Category::default());

        assert!(article.excerpt.ends_with("..."));
        assert_eq!(article.excerpt.chars().count(), 153);
    }

    #[test]
    fn test_category_round_trip() {
        for cat in Category::all() {
            assert_eq!(Category::parse(cat.as_str()), *cat);
        }
        assert_eq!(Category::parse("bogus"), Category::Uncategorized);
    }

    #[test]
    fn test_refresh_derived_updates_read_time() {
        let mut article = Article::new(
            "T".to_string(),
            "Excerpt".to_string(),
            "short".to_string(),
            Category::default(),
        );
        article.body = "word ".repeat(500);
        article.refresh_derived();
        assert_eq!(article.read_time, "3 min");
        assert_eq!(article.excerpt, "Excerpt");
    }
}
