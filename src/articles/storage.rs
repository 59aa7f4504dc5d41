//! Article storage.
//!
//! Persists the reading library to the local database and seeds the
//! built-in articles on first use.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::seed::seed_articles;
use super::types::{Article, Category};
use crate::error::StoaError;
use crate::storage::Database;

/// Storage for articles.
pub struct ArticleStorage {
    db: Database,
}

impl ArticleStorage {
    /// Open article storage at the default location, seeding the
    /// built-in articles if the library is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, StoaError> {
        let storage = Self {
            db: Database::open()?,
        };
        storage.ensure_seeded()?;
        Ok(storage)
    }

    /// Create storage with an existing database connection.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding fails.
    pub fn with_database(db: Database) -> Result<Self, StoaError> {
        let storage = Self { db };
        storage.ensure_seeded()?;
        Ok(storage)
    }

    /// Insert the built-in articles if none are present.
    fn ensure_seeded(&self) -> Result<(), StoaError> {
        let conn = self.db.connection();
        let seeded: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM articles WHERE seeded = 1",
                [],
                |row| row.get(0),
            )
            .map_err(|e| StoaError::Database(format!("Failed to count seeded articles: {e}")))?;

        if seeded > 0 {
            return Ok(());
        }

        for mut article in seed_articles() {
            self.insert(&mut article)?;
        }

        Ok(())
    }

    /// Save an article, inserting or updating depending on whether it
    /// has an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, article: &mut Article) -> Result<(), StoaError> {
        if article.id.is_some() {
            self.update(article)
        } else {
            self.insert(article)
        }
    }

    /// Insert a new article.
    fn insert(&self, article: &mut Article) -> Result<(), StoaError> {
        let conn = self.db.connection();
        let now = Utc::now();
        let created = article.created_at.unwrap_or(now);
        let updated = article.updated_at.unwrap_or(now);

        conn.execute(
            r"INSERT INTO articles
              (title, excerpt, body, category, read_time, favorite, seeded, published,
               created_at, updated_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                article.title,
                article.excerpt,
                article.body,
                article.category.as_str(),
                article.read_time,
                article.favorite,
                article.seeded,
                article.published,
                created.to_rfc3339(),
                updated.to_rfc3339(),
            ],
        )
        .map_err(|e| StoaError::Database(format!("Failed to insert article: {e}")))?;

        article.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Update an existing article.
    fn update(&self, article: &Article) -> Result<(), StoaError> {
        let conn = self.db.connection();

        conn.execute(
            r"UPDATE articles SET
              title = ?1,
              excerpt = ?2,
              body = ?3,
              category = ?4,
              read_time = ?5,
              favorite = ?6,
              published = ?7,
              updated_at = ?8
              WHERE id = ?9",
            params![
                article.title,
                article.excerpt,
                article.body,
                article.category.as_str(),
                article.read_time,
                article.favorite,
                article.published,
                Utc::now().to_rfc3339(),
                article.id,
            ],
        )
        .map_err(|e| StoaError::Database(format!("Failed to update article: {e}")))?;

        Ok(())
    }

    /// Get an article by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Article>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_article)
            .optional()
            .map_err(|e| StoaError::Database(format!("Failed to query article: {e}")))?;

        Ok(result)
    }

    /// List published articles, seeded first, newest user articles last.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<Article>, StoaError> {
        self.query_list(&format!(
            "{SELECT_COLUMNS} WHERE published = 1 ORDER BY seeded DESC, created_at ASC"
        ))
    }

    /// List every article including unpublished drafts.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all(&self) -> Result<Vec<Article>, StoaError> {
        self.query_list(&format!(
            "{SELECT_COLUMNS} ORDER BY seeded DESC, created_at ASC"
        ))
    }

    /// List published articles in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_by_category(&self, category: Category) -> Result<Vec<Article>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!(
                "{SELECT_COLUMNS} WHERE published = 1 AND category = ?1
                 ORDER BY seeded DESC, created_at ASC"
            ))
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([category.as_str()], row_to_article)
            .map_err(|e| StoaError::Database(format!("Failed to query articles: {e}")))?;

        collect_articles(rows)
    }

    /// Toggle the favorite flag. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the article does not exist or the write fails.
    pub fn toggle_favorite(&self, id: i64) -> Result<bool, StoaError> {
        let article = self
            .get(id)?
            .ok_or_else(|| StoaError::NotFound(format!("Article {id}")))?;

        let new_value = !article.favorite;
        let conn = self.db.connection();
        conn.execute(
            "UPDATE articles SET favorite = ?1 WHERE id = ?2",
            params![new_value, id],
        )
        .map_err(|e| StoaError::Database(format!("Failed to update favorite: {e}")))?;

        Ok(new_value)
    }

    /// Delete a user-authored article. Seeded articles cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the article is seeded or the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, StoaError> {
        let article = self
            .get(id)?
            .ok_or_else(|| StoaError::NotFound(format!("Article {id}")))?;

        if article.seeded {
            return Err(StoaError::Config(
                "Built-in articles cannot be deleted".to_string(),
            ));
        }

        let conn = self.db.connection();
        let rows = conn
            .execute("DELETE FROM articles WHERE id = ?1", [id])
            .map_err(|e| StoaError::Database(format!("Failed to delete article: {e}")))?;

        Ok(rows > 0)
    }

    fn query_list(&self, sql: &str) -> Result<Vec<Article>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_article)
            .map_err(|e| StoaError::Database(format!("Failed to query articles: {e}")))?;

        collect_articles(rows)
    }
}

const SELECT_COLUMNS: &str = r"SELECT id, title, excerpt, body, category, read_time,
       favorite, seeded, published, created_at, updated_at
  FROM articles";

fn collect_articles<I>(rows: I) -> Result<Vec<Article>, StoaError>
where
    I: IntoIterator<Item = Result<Article, rusqlite::Error>>,
{
    let mut articles = Vec::new();
    for row in rows {
        articles.push(row.map_err(|e| StoaError::Database(e.to_string()))?);
    }
    Ok(articles)
}

/// Convert a database row to an Article.
fn row_to_article(row: &Row<'_>) -> Result<Article, rusqlite::Error> {
    let category_str: String = row.get(4)?;
    let created_at_str: String = row.get(9)?;
    let updated_at_str: String = row.get(10)?;

    Ok(Article {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        excerpt: row.get(2)?,
        body: row.get(3)?,
        category: Category::parse(&category_str),
        read_time: row.get(5)?,
        favorite: row.get(6)?,
        seeded: row.get(7)?,
        published: row.get(8)?,
        created_at: parse_timestamp(&created_at_str),
        updated_at: parse_timestamp(&updated_at_str),
    })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
}

// Add optional() extension for rusqlite
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> ArticleStorage {
        let db = Database::open_in_memory().unwrap();
        ArticleStorage::with_database(db).unwrap()
    }

    #[test]
    fn test_seeded_on_open() {
        let storage = create_test_storage();
        let articles = storage.list().unwrap();

        assert_eq!(articles.len(), 3);
        assert!(articles.iter().all(|a| a.seeded));
    }

    #[test]
    fn test_save_and_get() {
        let storage = create_test_storage();

        let mut article = Article::new(
            "On Morning Routines".to_string(),
            String::new(),
            "Wake before dawn and consider the day ahead.".to_string(),
            Category::PracticeGuide,
        );

        storage.save(&mut article).unwrap();
        assert!(article.id.is_some());

        let loaded = storage.get(article.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded.title, article.title);
        assert_eq!(loaded.category, Category::PracticeGuide);
        assert!(!loaded.seeded);
    }

    #[test]
    fn test_update_round_trip() {
        let storage = create_test_storage();

        let mut article = Article::new(
            "Draft".to_string(),
            String::new(),
            "First version.".to_string(),
            Category::default(),
        );
        storage.save(&mut article).unwrap();

        article.body = "Second version, revised.".to_string();
        article.refresh_derived();
        storage.save(&mut article).unwrap();

        let loaded = storage.get(article.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded.body, "Second version, revised.");
    }

    #[test]
    fn test_toggle_favorite() {
        let storage = create_test_storage();
        let articles = storage.list().unwrap();
        let id = articles[0].id.unwrap();

        assert!(storage.toggle_favorite(id).unwrap());
        assert!(storage.get(id).unwrap().unwrap().favorite);

        assert!(!storage.toggle_favorite(id).unwrap());
        assert!(!storage.get(id).unwrap().unwrap().favorite);
    }

    #[test]
    fn test_delete_user_article() {
        let storage = create_test_storage();

        let mut article = Article::new(
            "Ephemeral".to_string(),
            String::new(),
            "Gone soon.".to_string(),
            Category::default(),
        );
        storage.save(&mut article).unwrap();
        let id = article.id.unwrap();

        assert!(storage.delete(id).unwrap());
        assert!(storage.get(id).unwrap().is_none());
    }

    #[test]
    fn test_delete_seeded_refused() {
        let storage = create_test_storage();
        let id = storage.list().unwrap()[0].id.unwrap();

        assert!(storage.delete(id).is_err());
        assert!(storage.get(id).unwrap().is_some());
    }

    #[test]
    fn test_unpublished_hidden_from_list() {
        let storage = create_test_storage();

        let mut draft = Article::new(
            "Draft".to_string(),
            String::new(),
            "Not ready.".to_string(),
            Category::default(),
        );
        draft.published = false;
        storage.save(&mut draft).unwrap();

        assert_eq!(storage.list().unwrap().len(), 3);
        assert_eq!(storage.list_all().unwrap().len(), 4);
    }

    #[test]
    fn test_list_by_category() {
        let storage = create_test_storage();
        let mindful = storage.list_by_category(Category::Mindfulness).unwrap();
        assert_eq!(mindful.len(), 1);
        assert_eq!(mindful[0].category, Category::Mindfulness);
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("articles.db");

        {
            let db = Database::open_at(&db_path).unwrap();
            let storage = ArticleStorage::with_database(db).unwrap();
            assert_eq!(storage.list().unwrap().len(), 3);
        }
        {
            let db = Database::open_at(&db_path).unwrap();
            let storage = ArticleStorage::with_database(db).unwrap();
            assert_eq!(storage.list().unwrap().len(), 3);
        }
    }
}
