mod aggregate;
mod merge;
mod parser;
mod pipeline;
mod records;
mod render;
mod scanner;
mod settings;
mod summary;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use settings::Settings;

#[derive(Parser)]
#[command(name = "hackathon_summary", about = "Regenerate hackathon READMEs from registration and demo files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate README.md for one hackathon (default: current directory)
    Event {
        /// Hackathon directory containing registration/ and demos/
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Title for the README (default: hackathon_name setting)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Regenerate every hackathon under hackathons/ plus the main README
    All {
        /// Directory holding one subdirectory per hackathon
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Print participant and project statistics without writing anything
    Stats {
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Emit records and statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;

    let command = cli.command.unwrap_or(Commands::Event { dir: None, name: None });
    match command {
        Commands::Event { dir, name } => {
            let dir = dir.unwrap_or(cwd);
            let name = name.unwrap_or_else(|| settings.hackathon_name.clone());
            let report = pipeline::run_event(&dir, &name, &settings)?;
            println!(
                "Updated {} for {} ({} participants, {} projects)",
                report.readme.display(),
                report.name,
                report.participants,
                report.projects
            );
        }
        Commands::All { root } => {
            let root = root.unwrap_or_else(|| cwd.join(&settings.events_dir));
            let report = aggregate::run_all(&root, &settings)?;
            for e in &report.events {
                println!(
                    "  {:<32} {:>4} participants {:>4} projects",
                    e.name, e.participants, e.projects
                );
            }
            println!(
                "Updated {} ({} hackathons)",
                report.readme.display(),
                report.events.len()
            );
        }
        Commands::Stats { dir, json } => {
            let dir = dir.unwrap_or(cwd);
            let summary = pipeline::collect(&dir, &settings);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let s = &summary.stats;
                println!("Participants: {}", s.participants);
                println!("Teams:        {}", s.teams);
                println!("Developers:   {}", s.developers);
                println!("Designers:    {}", s.designers);
                println!("Projects:     {}", s.projects);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
