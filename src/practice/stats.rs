//! Practice statistics.
//!
//! Aggregates the practice log into the numbers shown on the Profile
//! tab and by `stoa stats`: today's minutes and sessions, the streak of
//! consecutive practice days, and lifetime totals.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::log::{PracticeKind, PracticeStorage};
use crate::error::StoaError;

/// Aggregated practice statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeReport {
    /// Minutes practiced today.
    pub today_minutes: u32,
    /// Sessions completed today.
    pub today_sessions: u32,
    /// Consecutive days with at least one completed session, ending today
    /// or yesterday.
    pub streak_days: u32,
    /// Lifetime practiced minutes.
    pub total_minutes: u32,
    /// Lifetime completed sessions.
    pub total_sessions: u32,
    /// Lifetime completed breathing cycles.
    pub total_cycles: u32,
}

impl PracticeReport {
    /// Build a report from the practice log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn generate(storage: &PracticeStorage) -> Result<Self, StoaError> {
        let now = Utc::now();
        let today = now.date_naive();
        let day_start = start_of_day(today);
        let day_end = day_start + Duration::days(1);

        let today_sessions = storage.range(day_start, day_end)?;
        let (today_minutes, today_count) = today_sessions
            .iter()
            .filter(|s| s.completed)
            .fold((0u32, 0u32), |(mins, count), s| {
                (mins + s.minutes(), count + 1)
            });

        let all = storage.range(start_of_epoch(), day_end)?;
        let mut total_minutes = 0u32;
        let mut total_sessions = 0u32;
        let mut total_cycles = 0u32;
        for session in all.iter().filter(|s| s.completed) {
            total_minutes += session.minutes();
            total_sessions += 1;
            if session.kind == PracticeKind::Breathing {
                total_cycles += session.cycles;
            }
        }

        Ok(Self {
            today_minutes,
            today_sessions: today_count,
            streak_days: streak(&storage.practice_dates()?, today),
            total_minutes,
            total_sessions,
            total_cycles,
        })
    }

    /// Format the report for terminal display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = Vec::new();

        output.push("Practice".bold().to_string());
        output.push("─".repeat(40));
        output.push(format!(
            "Today:    {} min across {} session{}",
            self.today_minutes,
            self.today_sessions,
            if self.today_sessions == 1 { "" } else { "s" }
        ));
        output.push(format!(
            "Streak:   {} day{}",
            self.streak_days,
            if self.streak_days == 1 { "" } else { "s" }
        ));
        output.push(format!(
            "Lifetime: {} min, {} sessions, {} breathing cycles",
            self.total_minutes, self.total_sessions, self.total_cycles
        ));

        output.join("\n")
    }
}

/// Count consecutive practice days ending today (or yesterday, so an
/// unbroken streak is not lost before today's session).
fn streak(dates_desc: &[String], today: NaiveDate) -> u32 {
    let mut expected = today;
    let mut count = 0u32;

    for (i, date_str) in dates_desc.iter().enumerate() {
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
            continue;
        };

        if date == expected {
            count += 1;
            expected = date - Duration::days(1);
        } else if i == 0 && date == today - Duration::days(1) {
            // No session yet today; streak continues from yesterday.
            count += 1;
            expected = date - Duration::days(1);
        } else {
            break;
        }
    }

    count
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        Utc,
    )
}

fn start_of_epoch() -> DateTime<Utc> {
    start_of_day(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::log::PracticeSession;
    use crate::storage::Database;

    fn create_test_storage() -> PracticeStorage {
        let db = Database::open_in_memory().unwrap();
        PracticeStorage::with_database(db)
    }

    fn save_completed(
        storage: &PracticeStorage,
        kind: PracticeKind,
        seconds: u32,
        cycles: u32,
        days_ago: i64,
    ) {
        let mut session = PracticeSession::begin(kind, "test".to_string());
        session.started_at = Utc::now() - Duration::days(days_ago);
        session.duration_seconds = seconds;
        session.cycles = cycles;
        session.completed = true;
        storage.save(&mut session).unwrap();
    }

    #[test]
    fn test_empty_report() {
        let storage = create_test_storage();
        let report = PracticeReport::generate(&storage).unwrap();

        assert_eq!(report.today_minutes, 0);
        assert_eq!(report.today_sessions, 0);
        assert_eq!(report.streak_days, 0);
        assert_eq!(report.total_sessions, 0);
    }

    #[test]
    fn test_today_totals() {
        let storage = create_test_storage();
        save_completed(&storage, PracticeKind::Breathing, 300, 15, 0);
        save_completed(&storage, PracticeKind::Meditation, 600, 0, 0);

        let report = PracticeReport::generate(&storage).unwrap();
        assert_eq!(report.today_minutes, 15);
        assert_eq!(report.today_sessions, 2);
        assert_eq!(report.total_cycles, 15);
    }

    #[test]
    fn test_incomplete_sessions_ignored() {
        let storage = create_test_storage();

        let mut session =
            PracticeSession::begin(PracticeKind::Breathing, "abandoned".to_string());
        session.duration_seconds = 120;
        storage.save(&mut session).unwrap();

        let report = PracticeReport::generate(&storage).unwrap();
        assert_eq!(report.today_sessions, 0);
        assert_eq!(report.total_minutes, 0);
    }

    #[test]
    fn test_streak_consecutive_days() {
        let storage = create_test_storage();
        save_completed(&storage, PracticeKind::Breathing, 60, 3, 0);
        save_completed(&storage, PracticeKind::Breathing, 60, 3, 1);
        save_completed(&storage, PracticeKind::Breathing, 60, 3, 2);
        // Gap at 3 days ago breaks the streak.
        save_completed(&storage, PracticeKind::Breathing, 60, 3, 5);

        let report = PracticeReport::generate(&storage).unwrap();
        assert_eq!(report.streak_days, 3);
    }

    #[test]
    fn test_streak_survives_missing_today() {
        let storage = create_test_storage();
        save_completed(&storage, PracticeKind::Meditation, 60, 0, 1);
        save_completed(&storage, PracticeKind::Meditation, 60, 0, 2);

        let report = PracticeReport::generate(&storage).unwrap();
        assert_eq!(report.streak_days, 2);
    }

    #[test]
    fn test_streak_helper() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let dates = vec![
            "2024-03-10".to_string(),
            "2024-03-09".to_string(),
            "2024-03-07".to_string(),
        ];
        assert_eq!(streak(&dates, today), 2);

        assert_eq!(streak(&[], today), 0);
    }

    #[test]
    fn test_format() {
        let report = PracticeReport {
            today_minutes: 12,
            today_sessions: 2,
            streak_days: 4,
            total_minutes: 90,
            total_sessions: 11,
            total_cycles: 52,
        };

        let text = report.format();
        assert!(text.contains("12 min across 2 sessions"));
        assert!(text.contains("4 days"));
        assert!(text.contains("52 breathing cycles"));
    }
}
