//! the args for running bftc

use bftc_parsing::parser::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use bftc_parsing::{BuildParserError, Parser};
use clap::ArgAction;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Checks programs and prints their symbol tables")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Specify which source files to check
    #[clap(required = true, value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
    /// Give each scope its own namespace instead of storing every declaration globally
    #[clap(long)]
    pub nested_scopes: bool,
    /// The largest number of cells an array may be declared with
    #[clap(long, env = "BFTC_MAX_ARRAY_SIZE", default_value_t = MAX_ARRAY_SIZE)]
    pub max_array_size: usize,
}

impl Args {
    /// Creates the parser described by these args
    pub fn parser(&self) -> Result<Parser, BuildParserError> {
        Parser::builder()
            .collapse_to_global(!self.nested_scopes)
            .array_sizes(MIN_ARRAY_SIZE..=self.max_array_size)
            .build()
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// Sets the logging level with `-v[v]` or `-q[q]`
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    /// Log more
    #[clap(short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less
    #[clap(short = 'q', action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level filter
    pub fn level_filter(&self) -> LevelFilter {
        match self.verbose as i16 - self.quiet as i16 {
            i16::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2..=i16::MAX => LevelFilter::TRACE,
        }
    }
}
