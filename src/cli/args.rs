use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "stoa")]
#[command(about = "A Stoic wellness companion for the terminal")]
#[command(long_about = "stoa - A Stoic wellness companion for the terminal

Guided breathing exercises, ambient-sound meditation, and a library of
Stoic readings with spoken narration, all from your terminal. Practice
history is tracked locally so you can watch your streak grow.

QUICK START:
  stoa tui                  Open the full-screen app
  stoa breathe start        Start a guided 4-7-8 breathing session
  stoa meditate list        Browse meditation sessions
  stoa article list         Browse the reading library
  stoa stats                Show today's practice and your streak

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  stoa <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Guided breathing exercises
    ///
    /// Runs a phase timer through the selected method's inhale, hold
    /// and exhale phases, one second at a time, counting completed
    /// cycles. Pause and resume without losing your place.
    ///
    /// # Examples
    ///
    ///   stoa breathe start                 4-7-8 by default
    ///   stoa breathe start --method box    Box breathing
    ///   stoa breathe start --cycles 5      Stop after five cycles
    ///   stoa breathe methods               List available methods
    #[command(alias = "b")]
    Breathe(BreatheArgs),

    /// Ambient-sound meditation sessions
    ///
    /// Themed sessions (stress relief, deep focus, sleep) pairing a
    /// fixed-length countdown with a looping ambient track.
    ///
    /// # Examples
    ///
    ///   stoa meditate list
    ///   stoa meditate start "Rain Relaxation"
    ///   stoa meditate start 1 --sound ocean
    #[command(alias = "m")]
    Meditate(MeditateArgs),

    /// The Stoic reading library
    ///
    /// Three built-in articles plus anything you write. Bodies are
    /// markdown; read time is computed automatically. Articles can be
    /// read aloud through the system speech command.
    ///
    /// # Examples
    ///
    ///   stoa article list
    ///   stoa article show 2
    ///   stoa article new "On Mornings" --file draft.md
    ///   stoa article speak 2 --voice calm
    #[command(alias = "a")]
    Article(ArticleArgs),

    /// Show practice statistics
    ///
    /// Today's practiced minutes and sessions, your streak of
    /// consecutive practice days, and lifetime totals.
    ///
    /// # Examples
    ///
    ///   stoa stats
    ///   stoa stats --history 20
    Stats(StatsArgs),

    /// Open the full-screen terminal app
    ///
    /// A tabbed shell with Home, Breathe, Meditate, Articles and
    /// Profile tabs, mirroring the command-line features.
    Tui,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   stoa completions zsh > ~/.zfunc/_stoa
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BreatheArgs {
    #[command(subcommand)]
    pub command: BreatheCommands,
}

#[derive(Subcommand)]
pub enum BreatheCommands {
    /// Start a guided breathing session
    Start {
        /// Breathing method (478, box)
        #[arg(short, long)]
        method: Option<String>,

        /// Stop after this many completed cycles (0 = until quit)
        #[arg(short, long)]
        cycles: Option<u32>,
    },

    /// List available breathing methods
    Methods,
}

#[derive(Args)]
pub struct MeditateArgs {
    #[command(subcommand)]
    pub command: MeditateCommands,
}

#[derive(Subcommand)]
pub enum MeditateCommands {
    /// List meditation themes and sessions
    List,

    /// Start a meditation session
    Start {
        /// Session title, or its number in `stoa meditate list`
        session: String,

        /// Ambient track override (rain, forest, ocean, whitenoise,
        /// brownian, pink, none)
        #[arg(short, long)]
        sound: Option<String>,
    },
}

#[derive(Args)]
pub struct ArticleArgs {
    #[command(subcommand)]
    pub command: ArticleCommands,
}

#[derive(Subcommand)]
pub enum ArticleCommands {
    /// List articles
    List {
        /// Include unpublished drafts
        #[arg(long)]
        all: bool,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show an article
    Show {
        /// Article ID
        id: i64,
    },

    /// Create a new article
    New {
        /// Article title
        title: String,

        /// Short excerpt (defaults to the start of the body)
        #[arg(short, long)]
        excerpt: Option<String>,

        /// Category (core-principles, practice-guide, mindfulness,
        /// philosophy)
        #[arg(short, long)]
        category: Option<String>,

        /// Read the markdown body from a file ('-' for stdin)
        #[arg(short, long)]
        file: Option<String>,

        /// Save as an unpublished draft
        #[arg(long)]
        draft: bool,
    },

    /// Edit an existing article
    Edit {
        /// Article ID
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New excerpt
        #[arg(short, long)]
        excerpt: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// Replace the body from a file ('-' for stdin)
        #[arg(short, long)]
        file: Option<String>,

        /// Publish the article
        #[arg(long, conflicts_with = "draft")]
        publish: bool,

        /// Unpublish the article
        #[arg(long)]
        draft: bool,
    },

    /// Toggle an article's favorite flag
    #[command(alias = "fav")]
    Favorite {
        /// Article ID
        id: i64,
    },

    /// Delete a user-authored article
    Delete {
        /// Article ID
        id: i64,

        /// Skip the confirmation error
        #[arg(long)]
        force: bool,
    },

    /// Read an article aloud
    Speak {
        /// Article ID
        id: i64,

        /// Voice profile (default, male, female, calm, warm)
        #[arg(short, long)]
        voice: Option<String>,
    },

    /// Fuzzy-pick an article to read
    Pick,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Also show this many recent sessions
    #[arg(long, default_value_t = 0)]
    pub history: usize,
}
