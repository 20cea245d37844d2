use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reading-companion")]
#[command(about = "Split text into reading sections with gists, prompts and annotations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Segment text and print the reading session as JSON
    Process {
        /// Text file to read (stdin when omitted)
        input: Option<PathBuf>,

        /// Seed for reflection prompt selection
        #[arg(long)]
        seed: Option<u64>,

        /// Settings file with enrichment options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write annotated sections of a session file to a text file
    Export {
        /// Session JSON as printed by `process`
        session: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print read progress for a session file
    Progress {
        session: PathBuf,
    },
}
