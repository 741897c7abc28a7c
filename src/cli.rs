use clap::{Parser, Subcommand};
use lintdoc::output::{CheckFormat, GenerateFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lintdoc",
    version,
    about = "Wiki page generator for static-analysis bug pattern documentation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every record in a records file into wiki pages
    Generate {
        /// Path to the tab-delimited records file
        records: PathBuf,

        /// Directory where pages are written
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Root of the example snippet tree
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Root of the sidecar explanation files
        #[arg(long)]
        explanations_dir: Option<PathBuf>,

        /// Emit a structured front-matter header on each page
        #[arg(long)]
        front_matter: bool,

        /// Use highlighter directives instead of GFM code fences
        #[arg(long)]
        pygments: bool,

        /// Stop at the first failed record instead of continuing
        #[arg(long)]
        fail_fast: bool,

        /// Report format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: GenerateFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a records file against its example and explanation trees
    Check {
        /// Path to the tab-delimited records file
        records: PathBuf,

        /// Root of the example snippet tree
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Root of the sidecar explanation files
        #[arg(long)]
        explanations_dir: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Report format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: CheckFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render one record to stdout without writing any file
    Preview {
        /// Path to the tab-delimited records file
        records: PathBuf,

        /// Short name of the record to render
        short_name: String,

        /// Root of the example snippet tree
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Root of the sidecar explanation files
        #[arg(long)]
        explanations_dir: Option<PathBuf>,

        /// Emit a structured front-matter header
        #[arg(long)]
        front_matter: bool,

        /// Use highlighter directives instead of GFM code fences
        #[arg(long)]
        pygments: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
