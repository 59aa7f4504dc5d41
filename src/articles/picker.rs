//! Fuzzy picker implementation using skim.
//!
//! Provides an interactive terminal interface for selecting an article.

use std::sync::Arc;

use skim::prelude::*;

use super::types::Article;

/// A wrapper around Article that implements SkimItem.
struct ArticleItem {
    article: Article,
    display: String,
}

impl ArticleItem {
    fn new(article: Article) -> Self {
        let favorite = if article.favorite { "♥ " } else { "  " };
        let display = format!(
            "{}{}  [{}] ({})",
            favorite,
            article.title,
            article.category.display_name(),
            article.read_time,
        );

        Self { article, display }
    }
}

impl SkimItem for ArticleItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    fn preview(&self, _context: PreviewContext<'_>) -> ItemPreview {
        let mut preview = String::new();

        preview.push_str(&format!("Title: {}\n", self.article.title));
        preview.push_str(&format!("Category: {}\n", self.article.category));
        preview.push_str(&format!("Read time: {}\n", self.article.read_time));

        if self.article.favorite {
            preview.push_str("Favorite: yes\n");
        }

        preview.push_str(&format!("\n{}\n", self.article.excerpt));

        ItemPreview::Text(preview)
    }

    fn output(&self) -> Cow<'_, str> {
        // Return the ID for easy processing
        Cow::Owned(self.article.id.unwrap_or_default().to_string())
    }
}

/// Run the interactive picker on a list of articles.
///
/// Returns the selected article ID, or None if the list was empty or
/// the user aborted.
#[must_use]
pub fn pick_article(articles: Vec<Article>) -> Option<i64> {
    if articles.is_empty() {
        return None;
    }

    let skim_options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(false)
        .prompt(Some("Select article > "))
        .preview(Some(""))
        .preview_window(Some("right:50%:wrap"))
        .bind(vec!["ctrl-c:abort", "enter:accept"])
        .header(Some("Enter: read | Ctrl-C: cancel"))
        .build()
        .ok()?;

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();

    for article in articles {
        let item: Arc<dyn SkimItem> = Arc::new(ArticleItem::new(article));
        let _ = tx.send(item);
    }
    drop(tx); // Close sender

    let output = Skim::run_with(&skim_options, Some(rx))?;

    if output.is_abort {
        return None;
    }

    output
        .selected_items
        .first()
        .and_then(|item| item.output().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::types::Category;

    fn make_article(title: &str, favorite: bool) -> Article {
        let mut article = Article::new(
            title.to_string(),
            "An excerpt.".to_string(),
            "A body.".to_string(),
            Category::Philosophy,
        );
        article.id = Some(7);
        article.favorite = favorite;
        article
    }

    #[test]
    fn test_article_item_display() {
        let item = ArticleItem::new(make_article("On Anger", false));
        assert!(item.display.contains("On Anger"));
        assert!(item.display.contains("[Philosophy]"));
        assert!(!item.display.contains('♥'));
    }

    #[test]
    fn test_favorite_marker() {
        let item = ArticleItem::new(make_article("On Joy", true));
        assert!(item.display.starts_with('♥'));
    }

    #[test]
    fn test_output_is_id() {
        let item = ArticleItem::new(make_article("On Anger", false));
        assert_eq!(item.output(), "7");
    }

    #[test]
    fn test_pick_empty() {
        assert!(pick_article(vec![]).is_none());
    }
}
