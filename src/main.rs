use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use stoa::cli::args::{Cli, Commands};
use stoa::cli::commands;
use stoa::config::Config;
use stoa::error::StoaError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StoaError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    let output = match cli.command {
        Commands::Breathe(args) => commands::breathe(&config, args.command, format)?,
        Commands::Meditate(args) => commands::meditate(&config, args.command, format)?,
        Commands::Article(args) => commands::article(&config, args.command, format)?,
        Commands::Stats(args) => commands::stats(&args, format)?,
        Commands::Tui => {
            stoa::tui::run(config)?;
            String::new()
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "stoa", &mut std::io::stdout());
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
