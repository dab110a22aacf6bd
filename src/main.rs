use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use gitsim::Session;
use gitsim::areas::transcript::TranscriptEntry;
use std::io::Read;

#[derive(Parser)]
#[command(
    name = "gitsim",
    version = "0.1.0",
    about = "An educational git command simulator",
    long_about = "This is a terminal front-end for a simulated git session. \
    No real repository is touched: files, the staging index, and commits live \
    purely in memory. Feed it commands from a script file, from repeated -c \
    options, or from stdin, and it prints the resulting terminal transcript.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Script file with one command per line")]
    script: Option<std::path::PathBuf>,

    #[arg(
        short = 'c',
        long = "command",
        help = "Run a single command (repeatable, in order)"
    )]
    commands: Vec<String>,

    #[arg(long, help = "Print the repository state after running")]
    state: bool,

    #[arg(long, help = "Suppress the welcome banner")]
    no_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new();

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            session.run(line);
        }
    } else if let Some(path) = &cli.script {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file {}", path.display()))?;
        session.run_script(&script);
    } else {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read commands from stdin")?;
        session.run_script(&input);
    }

    print_transcript(&session, cli.no_banner);

    if cli.state {
        print_state(&session);
    }

    Ok(())
}

fn print_transcript(session: &Session, no_banner: bool) {
    for entry in session.transcript().entries() {
        match entry {
            TranscriptEntry::Notice(_) if no_banner => {}
            TranscriptEntry::Notice(text) => println!("{}", text.green()),
            TranscriptEntry::Command { input, output } => {
                println!("{} {}", "$".bold(), input);
                if !output.is_empty() {
                    println!("{}", output.green());
                }
            }
        }
    }
}

// Repository status view: working directory, staging area, and the latest
// five commits.
fn print_state(session: &Session) {
    let repository = session.repository();

    println!();
    println!("{}", "Working Directory".bold());
    if repository.files().is_empty() {
        println!("  (empty)");
    } else {
        for file in repository.files() {
            println!("  {file}");
        }
    }

    println!("{}", "Staging Area (Index)".bold());
    if repository.index().is_empty() {
        println!("  (empty)");
    } else {
        for file in repository.index() {
            println!("  {file}");
        }
    }

    println!("{}", "Commit History (Latest 5)".bold());
    if repository.commits().is_empty() {
        println!("  (No commits yet)");
    } else {
        for commit in repository.recent_commits(5) {
            println!("  {}", commit.summary());
        }
    }
}
