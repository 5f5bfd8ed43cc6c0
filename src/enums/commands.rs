use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::analysis_facet::AnalysisFacet;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Review a zipped project
    Analyze {
        /// Path to the project zip archive
        archive: PathBuf,
        /// The issue you are facing, the review pays special attention to it
        #[clap(short, long)]
        issue: Option<String>,
        /// Facets to review; defaults to the configured facets
        #[clap(short, long, value_enum)]
        facet: Vec<AnalysisFacet>,
        /// Ask the model to apply its findings and download the changed files
        #[clap(long)]
        fix: bool,
        /// Start a follow-up conversation about the code
        #[clap(long)]
        chat: bool,
        /// Directory the fixed archive is written to
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the configuration and API key
    Validate,
}
