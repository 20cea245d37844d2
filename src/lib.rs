pub mod cli;
pub mod commands;
pub mod enrichment;
pub mod models;
pub mod segmentation;
pub mod session;
pub mod settings;
pub mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

pub use enrichment::{
    enrich, gist, process_text, reflection_prompt, EnrichmentConfig, FixedSelector,
    PromptSelector, RandomSelector,
};
pub use models::{EnrichedSegment, Section, Segment};
pub use segmentation::segment;
pub use session::{Progress, ReadingSession};

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    utils::init_logging(log::LevelFilter::Info);

    let cli = Cli::parse();
    log::debug!("reading companion command: {:?}", cli.command);

    match cli.command {
        Commands::Process {
            input,
            seed,
            config,
        } => {
            let json = commands::process(input.as_deref(), seed, config.as_deref())?;
            println!("{json}");
        }
        Commands::Export { session, output } => {
            let written = commands::export(&session, output.as_deref())?;
            println!("Annotations written to {}", written.display());
        }
        Commands::Progress { session } => {
            println!("{}", commands::progress(&session)?);
        }
    }

    Ok(())
}
