use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "code-forensics")]
#[clap(about = "AI-powered forensic code review", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
