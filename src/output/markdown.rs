//! Minimal markdown rendering for the terminal.
//!
//! Article bodies are markdown; this renders the subset the editor
//! produces (headings, emphasis, lists, links, images) with ANSI styling
//! instead of carrying a full markdown engine.

use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})\s+(.*)$").unwrap_or_else(|e| panic!("Invalid heading regex: {e}"))
});

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap_or_else(|e| panic!("Invalid bold regex: {e}")));

static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap_or_else(|e| panic!("Invalid italic regex: {e}")));

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap_or_else(|e| panic!("Invalid image regex: {e}")));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap_or_else(|e| panic!("Invalid link regex: {e}")));

/// Render markdown text for terminal display.
#[must_use]
pub fn render(text: &str) -> String {
    let mut lines = Vec::new();

    for line in text.lines() {
        lines.push(render_line(line));
    }

    lines.join("\n")
}

/// Strip markdown markers entirely, for narration.
#[must_use]
pub fn plain(text: &str) -> String {
    let mut lines = Vec::new();

    for line in text.lines() {
        let line = HEADING.replace(line, "$2");
        let line = line.strip_prefix("- ").unwrap_or(&line);
        let line = line.strip_prefix("> ").unwrap_or(line);

        let line = IMAGE.replace_all(line, "");
        let line = LINK.replace_all(&line, "$1");
        let line = BOLD.replace_all(&line, "$1");
        let line = ITALIC.replace_all(&line, "$1");

        lines.push(line.trim().to_string());
    }

    // Stripped images can leave empty lines at the end; drop them so the
    // narrator gets no trailing silence.
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines.join("\n")
}

fn render_line(line: &str) -> String {
    if let Some(caps) = HEADING.captures(line) {
        let title = render_inline(&caps[2]);
        return match caps[1].len() {
            1 => title.bold().cyan().underline().to_string(),
            2 => title.bold().cyan().to_string(),
            _ => title.bold().to_string(),
        };
    }

    if let Some(item) = line.strip_prefix("- ") {
        return format!("  • {}", render_inline(item));
    }

    if let Some(quote) = line.strip_prefix("> ") {
        return format!("  │ {}", render_inline(quote).italic());
    }

    render_inline(line)
}

fn render_inline(text: &str) -> String {
    // Images before links: the image syntax contains the link syntax.
    let text = IMAGE.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("[image: {}]", &caps[1]).dimmed().to_string()
    });

    let text = LINK.replace_all(&text, |caps: &regex::Captures<'_>| {
        format!("{} {}", caps[1].underline(), format!("({})", &caps[2]).dimmed())
    });

    let text = BOLD.replace_all(&text, |caps: &regex::Captures<'_>| {
        caps[1].bold().to_string()
    });

    let text = ITALIC.replace_all(&text, |caps: &regex::Captures<'_>| {
        caps[1].italic().to_string()
    });

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // colored adds escape codes only when attached to a tty, so tests
    // assert on content rather than styling.

    #[test]
    fn test_heading_text_preserved() {
        let out = render("# The Discipline of Perception");
        assert!(out.contains("The Discipline of Perception"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let out = render("- first\n- second");
        assert!(out.contains("• first"));
        assert!(out.contains("• second"));
    }

    #[test]
    fn test_bold_markers_stripped() {
        let out = render("stay **calm** now");
        assert!(out.contains("calm"));
        assert!(!out.contains("**"));
    }

    #[test]
    fn test_link_shows_text_and_url() {
        let out = render("see [the source](https://example.com)");
        assert!(out.contains("the source"));
        assert!(out.contains("(https://example.com)"));
    }

    #[test]
    fn test_image_replaced_with_placeholder() {
        let out = render("![sunset](https://example.com/s.jpg)");
        assert!(out.contains("[image: sunset]"));
        assert!(!out.contains("s.jpg"));
    }

    #[test]
    fn test_blockquote() {
        let out = render("> the obstacle is the way");
        assert!(out.contains("│ "));
        assert!(out.contains("the obstacle is the way"));
    }

    #[test]
    fn test_plain_paragraphs_unchanged() {
        let text = "Just a plain paragraph.\n\nAnother one.";
        assert_eq!(render(text), text);
    }

    #[test]
    fn test_plain_strips_everything() {
        let text = "# Heading\n\nstay **calm** and read [this](https://x.y)\n\n- item\n\n![pic](u.jpg)";
        let out = plain(text);
        assert_eq!(out, "Heading\n\nstay calm and read this\n\nitem");
    }
}
