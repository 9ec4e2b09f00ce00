use crate::args::Args;
use clap::Parser as _;
use eyre::{eyre, WrapErr};
use owo_colors::OwoColorize;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().level_filter())?;
    trace!("starting bftc with args: {args:?}");
    debug!("bftc version: {}", env!("CARGO_PKG_VERSION"));

    let parser = args.parser()?;
    let mut failed = 0_usize;
    for path in &args.files {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {path:?}"))?;
        match parser.parse(&source) {
            Ok(table) => {
                debug!(path = ?path, symbols = table.len(), "parsed");
                println!("{}: {table}", path.display());
            }
            Err(e) => {
                debug!(path = ?path, error = %e, "could not parse");
                failed += 1;
                eprint!("{}: {}", "error".red().bold(), e.render(&source, Some(path.as_path())));
            }
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} files could not be parsed", args.files.len()));
    }
    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
