//! Command-line interface.

pub mod output;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::app::AppContext;
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "compass",
    version,
    about = "Match a resume against a job description and explain the fit"
)]
pub struct Cli {
    /// Path to a config file (overrides the global config).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output.
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description.
    Analyze(AnalyzeArgs),
    /// List the loaded skill catalog.
    Skills,
    /// List the loaded role catalog.
    Roles,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Resume text file ('-' for stdin).
    #[arg(long, value_name = "PATH")]
    pub resume: PathBuf,

    /// Job description text file ('-' for stdin).
    #[arg(long, value_name = "PATH")]
    pub jd: PathBuf,
}

/// Dispatch a parsed command.
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => {
            let resume = read_text(&args.resume)?;
            let jd = read_text(&args.jd)?;
            let report = ctx.engine.analyze(Some(&resume), Some(&jd));
            if ctx.robot_mode {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::render_report(&report);
            }
            Ok(())
        }
        Commands::Skills => {
            if ctx.robot_mode {
                println!("{}", serde_json::to_string_pretty(&ctx.catalog.skills)?);
            } else {
                output::render_skills(&ctx.catalog.skills);
            }
            Ok(())
        }
        Commands::Roles => {
            if ctx.robot_mode {
                println!("{}", serde_json::to_string_pretty(&ctx.catalog.roles)?);
            } else {
                output::render_roles(&ctx.catalog.roles, ctx.engine.cached_roles());
            }
            Ok(())
        }
    }
}

/// Read a text input, with '-' meaning stdin.
fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
