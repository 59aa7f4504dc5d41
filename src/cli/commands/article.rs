//! Article command implementation.
//!
//! CRUD over the reading library, plus narration and the fuzzy picker.

use std::io::Read;

use colored::Colorize;

use crate::articles::{pick_article, Article, ArticleStorage, Category};
use crate::cli::args::{ArticleCommands, OutputFormat};
use crate::config::Config;
use crate::error::StoaError;
use crate::narration::{Narrator, SpeechCommand, VoiceProfile};
use crate::output::{format_article, format_articles, markdown, to_json};

/// Execute article subcommands.
pub fn article(
    config: &Config,
    cmd: ArticleCommands,
    format: OutputFormat,
) -> Result<String, StoaError> {
    let storage = ArticleStorage::new()?;

    match cmd {
        ArticleCommands::List { all, category } => list(&storage, all, category.as_deref(), format),
        ArticleCommands::Show { id } => show(&storage, id, format),
        ArticleCommands::New {
            title,
            excerpt,
            category,
            file,
            draft,
        } => create(&storage, title, excerpt, category.as_deref(), file, draft, format),
        ArticleCommands::Edit {
            id,
            title,
            excerpt,
            category,
            file,
            publish,
            draft,
        } => edit(
            &storage,
            id,
            title,
            excerpt,
            category.as_deref(),
            file,
            publish,
            draft,
            format,
        ),
        ArticleCommands::Favorite { id } => favorite(&storage, id),
        ArticleCommands::Delete { id, force } => delete(&storage, id, force),
        ArticleCommands::Speak { id, voice } => speak(config, &storage, id, voice.as_deref()),
        ArticleCommands::Pick => pick(&storage, format),
    }
}

fn list(
    storage: &ArticleStorage,
    all: bool,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String, StoaError> {
    let articles = match (all, category) {
        (true, _) => storage.list_all()?,
        (false, Some(cat)) => storage.list_by_category(Category::parse(cat))?,
        (false, None) => storage.list()?,
    };

    format_articles(&articles, format)
}

fn show(storage: &ArticleStorage, id: i64, format: OutputFormat) -> Result<String, StoaError> {
    let article = storage
        .get(id)?
        .ok_or_else(|| StoaError::NotFound(format!("Article {id}")))?;

    format_article(&article, format)
}

fn create(
    storage: &ArticleStorage,
    title: String,
    excerpt: Option<String>,
    category: Option<&str>,
    file: Option<String>,
    draft: bool,
    format: OutputFormat,
) -> Result<String, StoaError> {
    if title.trim().is_empty() {
        return Err(StoaError::Config("Title is required".to_string()));
    }

    let body = read_body(file)?;
    if body.trim().is_empty() {
        return Err(StoaError::Config(
            "Body is required; pass --file or pipe markdown on stdin".to_string(),
        ));
    }

    let mut article = Article::new(
        title,
        excerpt.unwrap_or_default(),
        body,
        category.map(Category::parse).unwrap_or_default(),
    );
    article.published = !draft;

    storage.save(&mut article)?;

    match format {
        OutputFormat::Json => to_json(&article),
        OutputFormat::Pretty => Ok(format!(
            "{} \"{}\" ({})",
            if draft { "Saved draft" } else { "Published" }.green(),
            article.title,
            article.read_time
        )),
    }
}

#[allow(clippy::too_many_arguments)]
fn edit(
    storage: &ArticleStorage,
    id: i64,
    title: Option<String>,
    excerpt: Option<String>,
    category: Option<&str>,
    file: Option<String>,
    publish: bool,
    draft: bool,
    format: OutputFormat,
) -> Result<String, StoaError> {
    let mut article = storage
        .get(id)?
        .ok_or_else(|| StoaError::NotFound(format!("Article {id}")))?;

    if article.seeded {
        return Err(StoaError::Config(
            "Built-in articles cannot be edited".to_string(),
        ));
    }

    if let Some(t) = title {
        article.title = t.trim().to_string();
    }
    if let Some(e) = excerpt {
        article.excerpt = e.trim().to_string();
    }
    if let Some(c) = category {
        article.category = Category::parse(c);
    }
    if let Some(f) = file {
        article.body = read_body(Some(f))?;
    }
    if publish {
        article.published = true;
    } else if draft {
        article.published = false;
    }

    article.refresh_derived();
    storage.save(&mut article)?;

    match format {
        OutputFormat::Json => to_json(&article),
        OutputFormat::Pretty => Ok(format!("{} \"{}\"", "Updated".green(), article.title)),
    }
}

fn favorite(storage: &ArticleStorage, id: i64) -> Result<String, StoaError> {
    let now_favorite = storage.toggle_favorite(id)?;

    Ok(if now_favorite {
        format!("{} Article {id} favorited", "♥".red())
    } else {
        format!("Article {id} unfavorited")
    })
}

fn delete(storage: &ArticleStorage, id: i64, force: bool) -> Result<String, StoaError> {
    if !force {
        return Err(StoaError::Config(format!(
            "This will permanently delete article {id}.\nUse --force to confirm."
        )));
    }

    storage.delete(id)?;
    Ok(format!("Deleted article {id}"))
}

/// Read an article aloud, blocking until narration finishes.
fn speak(
    config: &Config,
    storage: &ArticleStorage,
    id: i64,
    voice: Option<&str>,
) -> Result<String, StoaError> {
    let article = storage
        .get(id)?
        .ok_or_else(|| StoaError::NotFound(format!("Article {id}")))?;

    let voice = match voice {
        Some(v) => VoiceProfile::parse(v)
            .ok_or_else(|| StoaError::NotFound(format!("Unknown voice: {v}")))?,
        None => config.narration.voice,
    };

    let text = format!("{}.\n{}", article.title, markdown::plain(&article.body));

    println!(
        "{} \"{}\" ({} voice)",
        "Narrating".bold(),
        article.title,
        voice
    );

    let mut narrator = SpeechCommand::new(&config.narration);
    narrator.speak(&text, voice)?;
    narrator.wait()?;

    Ok("Narration finished.".to_string())
}

/// Fuzzy-pick an article, then show it.
fn pick(storage: &ArticleStorage, format: OutputFormat) -> Result<String, StoaError> {
    let articles = storage.list()?;

    match pick_article(articles) {
        Some(id) => show(storage, id, format),
        None => Ok(String::new()),
    }
}

/// Read the body from a file, or stdin when the path is `-` or absent.
fn read_body(file: Option<String>) -> Result<String, StoaError> {
    match file.as_deref() {
        Some("-") | None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            StoaError::Config(format!("Failed to read body from {path}: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn create_test_storage() -> ArticleStorage {
        let db = Database::open_in_memory().unwrap();
        ArticleStorage::with_database(db).unwrap()
    }

    #[test]
    fn test_list_pretty() {
        let storage = create_test_storage();
        let output = list(&storage, false, None, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Control What You Can Control"));
    }

    #[test]
    fn test_list_by_category() {
        let storage = create_test_storage();
        let output = list(
            &storage,
            false,
            Some("mindfulness"),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("The Wisdom of the Present"));
        assert!(!output.contains("Growth Through Adversity"));
    }

    #[test]
    fn test_show_missing_article() {
        let storage = create_test_storage();
        assert!(matches!(
            show(&storage, 999, OutputFormat::Pretty),
            Err(StoaError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_requires_title() {
        let storage = create_test_storage();
        let result = create(
            &storage,
            "  ".to_string(),
            None,
            None,
            None,
            false,
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(StoaError::Config(_))));
    }

    #[test]
    fn test_create_from_file() {
        let storage = create_test_storage();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let body_path = temp_dir.path().join("body.md");
        std::fs::write(&body_path, "# A reflection\n\nWritten words.").unwrap();

        let output = create(
            &storage,
            "A Reflection".to_string(),
            None,
            Some("philosophy"),
            Some(body_path.to_string_lossy().to_string()),
            false,
            OutputFormat::Json,
        )
        .unwrap();

        assert!(output.contains("\"title\": \"A Reflection\""));
        assert_eq!(storage.list().unwrap().len(), 4);
    }

    #[test]
    fn test_edit_seeded_refused() {
        let storage = create_test_storage();
        let id = storage.list().unwrap()[0].id.unwrap();

        let result = edit(
            &storage,
            id,
            Some("Hijacked".to_string()),
            None,
            None,
            None,
            false,
            false,
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(StoaError::Config(_))));
    }

    #[test]
    fn test_delete_requires_force() {
        let storage = create_test_storage();
        assert!(matches!(
            delete(&storage, 1, false),
            Err(StoaError::Config(_))
        ));
    }

    #[test]
    fn test_favorite_toggles() {
        let storage = create_test_storage();
        let id = storage.list().unwrap()[0].id.unwrap();

        let first = favorite(&storage, id).unwrap();
        assert!(first.contains("favorited"));

        let second = favorite(&storage, id).unwrap();
        assert!(second.contains("unfavorited"));
    }
}
