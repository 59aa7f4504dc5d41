use colored::Colorize;

use crate::articles::Article;
use crate::breathing::BreathingMethod;
use crate::meditation::MeditationTheme;
use crate::practice::PracticeSession;

use super::markdown;

/// Format the article list as a pretty table
#[must_use]
pub fn format_articles_pretty(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "Articles (0)\n  No articles".to_string();
    }

    let mut output = format!("Articles ({})\n", articles.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for article in articles {
        let id = article
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let favorite = if article.favorite {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };

        let mut line = format!(
            "{:>3} {} {}",
            id.dimmed(),
            favorite,
            article.title.bold()
        );

        line.push_str(&format!("  {}", article.category.to_string().dimmed()));
        line.push_str(&format!("  {}", article.read_time.yellow()));

        if article.seeded {
            line.push_str(&format!("  {}", "built-in".cyan()));
        }
        if !article.published {
            line.push_str(&format!("  {}", "draft".dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a full article for reading
#[must_use]
pub fn format_article_pretty(article: &Article) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", article.title.bold()));
    output.push_str(&format!(
        "{} • {}\n",
        article.read_time.dimmed(),
        article.category.to_string().dimmed()
    ));

    if article.favorite {
        output.push_str(&format!("{}\n", "♥ favorited".red()));
    }

    output.push_str(&"─".repeat(60));
    output.push_str("\n\n");
    output.push_str(&markdown::render(&article.body));
    output.push('\n');

    output
}

/// Format the breathing method catalog
#[must_use]
pub fn format_methods_pretty(methods: &[BreathingMethod]) -> String {
    let mut output = format!("Breathing methods ({})\n", methods.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for method in methods {
        output.push_str(&format!(
            "{:<6} {}  {}\n",
            method.id().cyan(),
            method.display_name().bold(),
            method.description().dimmed()
        ));

        let phases = method
            .phases()
            .iter()
            .map(|spec| format!("{} {}s", spec.phase.label(), spec.seconds))
            .collect::<Vec<_>>()
            .join(" → ");
        output.push_str(&format!(
            "       {} ({}s per cycle)\n",
            phases,
            method.cycle_seconds()
        ));
    }

    output
}

/// Format the meditation catalog
#[must_use]
pub fn format_catalog_pretty(themes: &[MeditationTheme]) -> String {
    let mut output = String::new();

    for theme in themes {
        output.push_str(&format!(
            "{}  {}\n",
            theme.display_name().bold(),
            theme.description().dimmed()
        ));

        for spec in theme.sessions() {
            output.push_str(&format!(
                "  {:<24} {:>3} min  {}\n",
                spec.title,
                spec.minutes,
                spec.track.to_string().cyan()
            ));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format recent practice sessions
#[must_use]
pub fn format_practice_pretty(sessions: &[PracticeSession]) -> String {
    if sessions.is_empty() {
        return "Practice history (0)\n  No sessions yet".to_string();
    }

    let mut output = format!("Practice history ({})\n", sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let date = session.started_at.format("%Y-%m-%d %H:%M").to_string();
        let status = if session.completed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        let detail = if session.cycles > 0 {
            format!("{} min, {} cycles", session.minutes(), session.cycles)
        } else {
            format!("{} min", session.minutes())
        };

        output.push_str(&format!(
            "{} {:<12} {:<24} {:<18} {}\n",
            status,
            session.kind.to_string().cyan(),
            session.label,
            detail,
            date.dimmed()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::Category;
    use crate::practice::PracticeKind;

    #[test]
    fn test_format_articles_empty() {
        let output = format_articles_pretty(&[]);
        assert!(output.contains("No articles"));
    }

    #[test]
    fn test_format_articles_list() {
        let mut article = Article::new(
            "On Calm".to_string(),
            String::new(),
            "Body.".to_string(),
            Category::Mindfulness,
        );
        article.id = Some(4);
        article.seeded = true;

        let output = format_articles_pretty(&[article]);
        assert!(output.contains("On Calm"));
        assert!(output.contains("Mindfulness"));
        assert!(output.contains("built-in"));
    }

    #[test]
    fn test_format_article_renders_markdown() {
        let article = Article::new(
            "Title".to_string(),
            String::new(),
            "# Heading\n\n- point one".to_string(),
            Category::default(),
        );

        let output = format_article_pretty(&article);
        assert!(output.contains("Heading"));
        assert!(output.contains("• point one"));
    }

    #[test]
    fn test_format_methods() {
        let output = format_methods_pretty(BreathingMethod::all());
        assert!(output.contains("4-7-8 Breathing"));
        assert!(output.contains("Box Breathing"));
        assert!(output.contains("19s per cycle"));
        assert!(output.contains("16s per cycle"));
    }

    #[test]
    fn test_format_catalog() {
        let output = format_catalog_pretty(MeditationTheme::all());
        assert!(output.contains("Stress Relief"));
        assert!(output.contains("Rain Relaxation"));
        assert!(output.contains("10 min"));
    }

    #[test]
    fn test_format_practice() {
        let mut session =
            PracticeSession::begin(PracticeKind::Breathing, "4-7-8 Breathing".to_string());
        session.duration_seconds = 190;
        session.cycles = 10;
        session.completed = true;

        let output = format_practice_pretty(&[session]);
        assert!(output.contains("4-7-8 Breathing"));
        assert!(output.contains("10 cycles"));
    }
}
