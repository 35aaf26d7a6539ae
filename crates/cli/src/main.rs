mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use commands::determinize::cmd_determinize;
use commands::fmt::cmd_fmt;
use commands::problem::cmd_problem;
use commands::reduce::cmd_reduce;

/// Output format for CLI reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Determinization selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    /// Every combination of single-outcome choices
    All,
    /// The single most-likely-outcome choice
    Mlo,
}

/// PPDDL determinization and model-reduction toolchain.
#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "PPDDL determinization and model-reduction toolchain"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace probabilistic effects with deterministic alternatives
    Determinize {
        /// Path to the PPDDL description file
        file: PathBuf,

        /// Prefix for the generated .pddl/.desc artifact pairs
        #[arg(short = 'o', long = "out")]
        out: PathBuf,

        /// Enumerate all combinations or pick the most likely outcome
        #[arg(long, value_enum, default_value = "all")]
        mode: Mode,

        /// Stop after this many determinizations (all mode)
        #[arg(long)]
        limit: Option<usize>,

        /// Domain to transform when the file defines several
        #[arg(long)]
        domain: Option<String>,
    },

    /// Cap the exceptional outcomes of every probabilistic effect
    Reduce {
        /// Path to the PPDDL description file
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Domain to transform when the file defines several
        #[arg(long)]
        domain: Option<String>,
    },

    /// Extract a problem description for a deterministic planner
    Problem {
        /// Path to the PPDDL description file
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Problem to extract when the file defines several
        #[arg(long)]
        problem: Option<String>,
    },

    /// Parse a description and reprint it in canonical form
    Fmt {
        /// Path to the PPDDL description file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Determinize {
            file,
            out,
            mode,
            limit,
            domain,
        } => {
            cmd_determinize(
                &file,
                &out,
                mode,
                limit,
                domain.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Reduce { file, out, domain } => {
            cmd_reduce(&file, out.as_deref(), domain.as_deref(), cli.output, cli.quiet);
        }
        Commands::Problem { file, out, problem } => {
            cmd_problem(
                &file,
                out.as_deref(),
                problem.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Fmt { file } => {
            cmd_fmt(&file, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}

pub(crate) fn report_core_error(err: &recast_core::RecastError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", err),
        OutputFormat::Json => eprintln!("{}", err.to_json_value()),
    }
}
