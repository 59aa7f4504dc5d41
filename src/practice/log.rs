//! The practice log.
//!
//! Records completed breathing and meditation sessions in the local
//! database.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoaError;
use crate::storage::Database;

/// What kind of practice a session was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    /// Guided breathing.
    Breathing,
    /// Ambient-sound meditation.
    Meditation,
}

impl PracticeKind {
    /// Stable identifier stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breathing => "breathing",
            Self::Meditation => "meditation",
        }
    }

    fn parse(s: &str) -> Self {
        match s {
            "meditation" => Self::Meditation,
            _ => Self::Breathing,
        }
    }
}

impl std::fmt::Display for PracticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breathing => write!(f, "Breathing"),
            Self::Meditation => write!(f, "Meditation"),
        }
    }
}

/// One recorded practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Database ID (None if not persisted).
    pub id: Option<i64>,
    pub kind: PracticeKind,
    /// Method or session title.
    pub label: String,
    pub started_at: DateTime<Utc>,
    pub duration_seconds: u32,
    /// Completed breathing cycles (zero for meditation).
    pub cycles: u32,
    /// Whether the session ran to its planned end.
    pub completed: bool,
}

impl PracticeSession {
    /// Record the start of a session now.
    #[must_use]
    pub fn begin(kind: PracticeKind, label: String) -> Self {
        Self {
            id: None,
            kind,
            label,
            started_at: Utc::now(),
            duration_seconds: 0,
            cycles: 0,
            completed: false,
        }
    }

    /// Duration in whole minutes, rounded down.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.duration_seconds / 60
    }
}

/// Storage for practice sessions.
pub struct PracticeStorage {
    db: Database,
}

impl PracticeStorage {
    /// Open practice storage at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, StoaError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Save a session, inserting or updating by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, session: &mut PracticeSession) -> Result<(), StoaError> {
        let conn = self.db.connection();

        if let Some(id) = session.id {
            conn.execute(
                r"UPDATE practice_sessions SET
                  kind = ?1, label = ?2, started_at = ?3,
                  duration_seconds = ?4, cycles = ?5, completed = ?6
                  WHERE id = ?7",
                params![
                    session.kind.as_str(),
                    session.label,
                    session.started_at.to_rfc3339(),
                    session.duration_seconds,
                    session.cycles,
                    session.completed,
                    id,
                ],
            )
            .map_err(|e| StoaError::Database(format!("Failed to update session: {e}")))?;
        } else {
            conn.execute(
                r"INSERT INTO practice_sessions
                  (kind, label, started_at, duration_seconds, cycles, completed)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    session.kind.as_str(),
                    session.label,
                    session.started_at.to_rfc3339(),
                    session.duration_seconds,
                    session.cycles,
                    session.completed,
                ],
            )
            .map_err(|e| StoaError::Database(format!("Failed to insert session: {e}")))?;

            session.id = Some(conn.last_insert_rowid());
        }

        Ok(())
    }

    /// Get the most recent sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<PracticeSession>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, label, started_at, duration_seconds, cycles, completed
                  FROM practice_sessions
                  ORDER BY started_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_session)
            .map_err(|e| StoaError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| StoaError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    /// Get sessions in a time range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PracticeSession>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, label, started_at, duration_seconds, cycles, completed
                  FROM practice_sessions
                  WHERE started_at >= ?1 AND started_at < ?2
                  ORDER BY started_at DESC",
            )
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_rfc3339(), end.to_rfc3339()], row_to_session)
            .map_err(|e| StoaError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| StoaError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    /// Distinct practice dates (UTC, YYYY-MM-DD), newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn practice_dates(&self) -> Result<Vec<String>, StoaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT DISTINCT substr(started_at, 1, 10) AS day
                  FROM practice_sessions
                  WHERE completed = 1
                  ORDER BY day DESC",
            )
            .map_err(|e| StoaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoaError::Database(format!("Failed to query dates: {e}")))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(row.map_err(|e| StoaError::Database(e.to_string()))?);
        }

        Ok(dates)
    }
}

/// Convert a database row to a PracticeSession.
fn row_to_session(row: &Row<'_>) -> Result<PracticeSession, rusqlite::Error> {
    let kind_str: String = row.get(1)?;
    let started_at_str: String = row.get(3)?;

    let started_at = DateTime::parse_from_rfc3339(&started_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(PracticeSession {
        id: Some(row.get(0)?),
        kind: PracticeKind::parse(&kind_str),
        label: row.get(2)?,
        started_at,
        duration_seconds: row.get(4)?,
        cycles: row.get(5)?,
        completed: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_storage() -> PracticeStorage {
        let db = Database::open_in_memory().unwrap();
        PracticeStorage::with_database(db)
    }

    fn completed_session(kind: PracticeKind, label: &str, seconds: u32) -> PracticeSession {
        let mut session = PracticeSession::begin(kind, label.to_string());
        session.duration_seconds = seconds;
        session.completed = true;
        session
    }

    #[test]
    fn test_save_and_recent() {
        let storage = create_test_storage();

        let mut session = completed_session(PracticeKind::Breathing, "4-7-8 Breathing", 190);
        session.cycles = 10;
        storage.save(&mut session).unwrap();
        assert!(session.id.is_some());

        let recent = storage.recent(5).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].kind, PracticeKind::Breathing);
        assert_eq!(recent[0].cycles, 10);
        assert!(recent[0].completed);
    }

    #[test]
    fn test_update_session() {
        let storage = create_test_storage();

        let mut session = PracticeSession::begin(PracticeKind::Meditation, "Rain".to_string());
        storage.save(&mut session).unwrap();

        session.duration_seconds = 600;
        session.completed = true;
        storage.save(&mut session).unwrap();

        let recent = storage.recent(1).unwrap();
        assert_eq!(recent[0].duration_seconds, 600);
        assert!(recent[0].completed);
    }

    #[test]
    fn test_range_excludes_outside() {
        let storage = create_test_storage();

        let mut old = completed_session(PracticeKind::Breathing, "Old", 60);
        old.started_at = Utc::now() - Duration::days(10);
        storage.save(&mut old).unwrap();

        let mut fresh = completed_session(PracticeKind::Breathing, "Fresh", 60);
        storage.save(&mut fresh).unwrap();

        let start = Utc::now() - Duration::days(1);
        let end = Utc::now() + Duration::days(1);
        let sessions = storage.range(start, end).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].label, "Fresh");
    }

    #[test]
    fn test_practice_dates_distinct() {
        let storage = create_test_storage();

        for _ in 0..3 {
            let mut session = completed_session(PracticeKind::Breathing, "B", 60);
            storage.save(&mut session).unwrap();
        }

        let dates = storage.practice_dates().unwrap();
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_incomplete_sessions_have_no_practice_date() {
        let storage = create_test_storage();

        let mut session = PracticeSession::begin(PracticeKind::Breathing, "B".to_string());
        storage.save(&mut session).unwrap();

        assert!(storage.practice_dates().unwrap().is_empty());
    }

    #[test]
    fn test_minutes() {
        let session = completed_session(PracticeKind::Meditation, "M", 605);
        assert_eq!(session.minutes(), 10);
    }
}
