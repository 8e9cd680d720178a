//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "attest", version, about = "Certificate trust-score analysis")]
pub struct Cli {
    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log debug output.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a scanned certificate and print the trust-score report.
    Analyze(AnalyzeArgs),

    /// Golden-template registry helpers.
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to the certificate file (PDF or image).
    pub file: PathBuf,

    /// Issuing institution as claimed by the submitter (hint only).
    #[arg(long)]
    pub institution: Option<String>,

    /// Use the seeded in-memory template store instead of the configured
    /// registry service.
    #[arg(long)]
    pub seed: bool,

    /// Skip appending to the activity log.
    #[arg(long)]
    pub no_activity: bool,
}

#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    /// Look up the golden template for an institution name.
    Lookup {
        /// Exact institution name.
        name: String,

        /// Use the seeded in-memory template store.
        #[arg(long)]
        seed: bool,
    },
}
