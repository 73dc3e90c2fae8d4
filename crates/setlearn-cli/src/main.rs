//! setlearn CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "setlearn",
    version,
    about = "Set theory practice: Venn calculator and quiz"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split two sets into Venn diagram regions
    Venn {
        /// First set, e.g. "{a, b, c}"
        #[arg(long)]
        a: String,

        /// Second set, e.g. "{b, c, d}"
        #[arg(long)]
        b: String,

        /// Also write the diagram as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Take the quiz interactively (answers are read from stdin)
    Quiz {
        /// Question bank TOML file (defaults to the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Seed for the question order
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many answers
        #[arg(long)]
        max_questions: Option<usize>,

        /// Write a JSON session summary here when the quiz ends
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Show the normalized form of an answer
    Normalize {
        /// Answer text
        text: String,

        /// Compare against this canonical answer
        #[arg(long)]
        against: Option<String>,
    },

    /// List the questions in a bank
    List {
        /// Question bank file or directory (defaults to the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Add a like (or just show the count)
    Like {
        /// Print the current count without adding one
        #[arg(long)]
        show: bool,
    },

    /// Render a frame of the particle background as SVG
    Particles {
        /// Frames to simulate before rendering
        #[arg(long, default_value = "0")]
        frames: u32,

        /// Output SVG path
        #[arg(long, default_value = "particles.svg")]
        output: PathBuf,

        /// Seed for particle placement
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured particle count
        #[arg(long)]
        count: Option<usize>,
    },

    /// Create a starter config and a copy of the built-in question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("setlearn=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Venn { a, b, svg, format } => commands::venn::execute(a, b, svg, format),
        Commands::Quiz {
            bank,
            seed,
            max_questions,
            summary,
        } => commands::quiz::execute(bank, seed, max_questions, summary, config),
        Commands::Normalize { text, against } => commands::normalize::execute(text, against),
        Commands::List { bank } => commands::list::execute(bank, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Like { show } => commands::like::execute(show, config),
        Commands::Particles {
            frames,
            output,
            seed,
            count,
        } => commands::particles::execute(frames, output, seed, count, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
