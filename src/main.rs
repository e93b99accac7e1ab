mod cli;

use std::{
    fs::File,
    io::{BufReader, Write},
};

use clap::Parser;
use cli::{Cli, Cmd, OptsPalette, OptsSuggest, PaletteOutput, SuggestOutput};
use skillviz::{Config, Dataset, Generator, Skill, dataset::load, palette};
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load the dataset: {0}")]
    Dataset(#[from] load::Error),
    #[error("Unable to read the palette configuration: {0}")]
    Config(serde_json::Error),
    #[error(transparent)]
    Palette(#[from] palette::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = entry(cli) {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn entry(cli: Cli) -> Result<(), Error> {
    match cli.cmd {
        Cmd::Suggest(opts) => suggest(opts),
        Cmd::Palette(opts) => colours(opts),
    }
}

fn suggest(mut opts: OptsSuggest) -> Result<(), Error> {
    let records: Vec<Skill> = opts.dataset.load(opts.format)?;
    let dataset = if opts.ignore_case {
        Dataset::case_insensitive(records)
    } else {
        Dataset::new(records)
    };

    let mut suggestions = dataset.suggest(&opts.prefix);
    if let Some(limit) = opts.limit {
        suggestions.truncate(limit);
    }
    tracing::debug!(prefix = %opts.prefix, found = suggestions.len(), "suggestions");

    let mut f = std::io::stdout().lock();
    match opts.output {
        SuggestOutput::Human => {
            for suggestion in &suggestions {
                writeln!(
                    f,
                    "{}\t#{}\t@{}",
                    suggestion.record.name, suggestion.position, suggestion.record.total_occurences
                )?;
            }
        }
        SuggestOutput::Json => {
            serde_json::to_writer_pretty(&mut f, &suggestions).map_err(std::io::Error::from)?;
            writeln!(f)?;
        }
    }
    Ok(())
}

fn colours(opts: OptsPalette) -> Result<(), Error> {
    let base = match &opts.config {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))
            .map_err(Error::Config)?,
        None => Config::default(),
    };
    let config = opts.overlay(base);
    let colours = Generator::seeded(config, opts.seed)?.generate(opts.count)?;

    let mut f = std::io::stdout().lock();
    match opts.output {
        PaletteOutput::Css => {
            for colour in &colours {
                writeln!(f, "{}", colour)?;
            }
        }
        PaletteOutput::Human => {
            for colour in &colours {
                let (hue, saturation, lightness, alpha) = colour.as_tuple();
                writeln!(f, "{hue}\t{saturation}\t{lightness}\t{alpha}")?;
            }
        }
        PaletteOutput::Json => {
            serde_json::to_writer_pretty(&mut f, &colours).map_err(std::io::Error::from)?;
            writeln!(f)?;
        }
    }
    Ok(())
}
