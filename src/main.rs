use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use support_responder::lexicon::MatchMode;
use support_responder::{batch, chat, Assistant};

#[derive(Parser)]
#[command(name = "support-responder")]
#[command(about = "Keyword-based supportive responder for short wellbeing check-ins", long_about = None)]
struct Cli {
    /// How emotion keywords are matched inside a message
    #[arg(long, value_enum, global = true, default_value_t = MatchMode::Substring)]
    matching: MatchMode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive conversation (default)
    Chat,
    /// Print the reply for a single message
    Respond {
        #[arg(long)]
        text: String,
    },
    /// Show how a message is judged
    Classify {
        #[arg(long)]
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// List the suggestions kept for a category
    Tips {
        #[arg(long)]
        category: String,
    },
    /// Assess every message in a CSV file
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn message(text: &str) -> anyhow::Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        bail!("message must not be empty");
    }
    Ok(text)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let assistant =
        Assistant::builtin(cli.matching).context("failed to build the built-in tables")?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut stdout = io::stdout();
            if io::stdin().is_terminal() {
                let mut input = chat::EditorInput::new()?;
                chat::run(&assistant, &mut input, &mut stdout)?;
            } else {
                let mut input = chat::PipedInput::new(io::stdin().lock(), io::stdout());
                chat::run(&assistant, &mut input, &mut stdout)?;
            }
        }
        Commands::Respond { text } => {
            let reply = assistant.respond(message(&text)?);
            println!("{}", reply.text());
        }
        Commands::Classify { text, json } => {
            let assessment = assistant.assess(message(&text)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("Risk: {}", assessment.risk);
                if let Some(phrase) = &assessment.matched_phrase {
                    println!("Matched phrase: {phrase}");
                }
                if let (Some(category), Some(scores)) = (assessment.category, assessment.scores) {
                    println!("Category: {category}");
                    println!(
                        "Scores: sad {} / stressed {} / anxious {}",
                        scores.sad, scores.stressed, scores.anxious
                    );
                }
            }
        }
        Commands::Tips { category } => {
            for tip in assistant.knowledge().lookup_label(&category) {
                println!("- {tip}");
            }
        }
        Commands::Batch { csv, out } => {
            let input = File::open(&csv)
                .with_context(|| format!("failed to open {}", csv.display()))?;
            let summary = match &out {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    batch::assess_csv(&assistant, input, BufWriter::new(file))?
                }
                None => batch::assess_csv(&assistant, input, io::stdout().lock())?,
            };
            tracing::info!(?summary, "batch finished");

            let mut stderr = io::stderr();
            writeln!(
                stderr,
                "Assessed {} messages from {} ({} high risk, {} blank skipped).",
                summary.assessed,
                csv.display(),
                summary.high_risk,
                summary.skipped
            )?;
            if let Some(path) = out {
                writeln!(stderr, "Results written to {}.", path.display())?;
            }
        }
    }

    Ok(())
}
