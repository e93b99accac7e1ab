mod enumfile;
pub use enumfile::BuiltinOrFile;
mod builtins;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use skillviz::{Config, dataset::load::Format, palette::DEFAULT_SEED};

use crate::cli::builtins::impl_builtin_dataset;

/// Autocomplete over skill names and colours for skill charts.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace).
    /// Without it the RUST_LOG environment variable is honoured.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Suggest records whose name starts with a prefix.
    Suggest(OptsSuggest),
    /// Generate distinct colours for chart series.
    Palette(OptsPalette),
}

#[derive(Debug, Args)]
pub struct OptsSuggest {
    /// Prefix typed so far.
    pub prefix: String,
    /// Dataset to search, a builtin or a file path.
    #[arg(default_value = "skills")]
    pub dataset: BuiltinOrFile<BuiltinsDataset>,
    /// Format of the dataset file.
    /// When unspecified it is taken from the file extension.
    #[arg(short, long)]
    pub format: Option<Format>,
    /// Match names regardless of case.
    #[arg(short, long, default_value_t = false)]
    pub ignore_case: bool,
    /// Maximum number of suggestions to print.
    #[arg(short, long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = SuggestOutput::Human)]
    pub output: SuggestOutput,
}

#[derive(Debug, Args)]
pub struct OptsPalette {
    /// Number of colours to generate.
    pub count: usize,
    /// Seed for the saturation, lightness and alpha draws.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// JSON file with a palette configuration.
    /// Missing fields keep their defaults, flags below override the file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Degrees the hue advances per step.
    #[arg(long)]
    pub h_step: Option<f64>,
    #[arg(long)]
    pub min_s: Option<u32>,
    #[arg(long)]
    pub max_s: Option<u32>,
    #[arg(long)]
    pub min_l: Option<u32>,
    #[arg(long)]
    pub max_l: Option<u32>,
    #[arg(long)]
    pub min_a: Option<u32>,
    #[arg(long)]
    pub max_a: Option<u32>,
    #[arg(short, long, value_enum, default_value_t = PaletteOutput::Css)]
    pub output: PaletteOutput,
}

impl OptsPalette {
    /// Applies the command line overrides on top of `base`.
    pub fn overlay(&self, base: Config) -> Config {
        Config {
            h_step: self.h_step.unwrap_or(base.h_step),
            min_s: self.min_s.unwrap_or(base.min_s),
            max_s: self.max_s.unwrap_or(base.max_s),
            min_l: self.min_l.unwrap_or(base.min_l),
            max_l: self.max_l.unwrap_or(base.max_l),
            min_a: self.min_a.unwrap_or(base.min_a),
            max_a: self.max_a.unwrap_or(base.max_a),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum SuggestOutput {
    /// One suggestion per line: name, position and occurrences.
    #[default]
    Human,
    /// A JSON array of suggestions.
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaletteOutput {
    /// One CSS `hsla(...)` colour per line.
    #[default]
    Css,
    /// Tab separated hue, saturation, lightness and alpha.
    Human,
    /// A JSON array of colours.
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum BuiltinsDataset {
    /// Skills mentioned in job postings.
    #[default]
    Skills,
}

impl_builtin_dataset!(
    BuiltinsDataset,
    Skills => "data/skills.tsv" as TSV
);
