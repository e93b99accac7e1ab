use std::{io::Read, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Malformed delimited record: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    CSV,
    #[default]
    TSV,
    JSON,
}

impl Format {
    /// Guesses the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Format::CSV),
            "tsv" | "tab" => Some(Format::TSV),
            "json" => Some(Format::JSON),
            _ => None,
        }
    }
}

/// Reads records in order.
///
/// Delimited input must start with a header row naming the record fields,
/// JSON input must be a single array.
pub fn parse<R: DeserializeOwned>(reader: impl Read, format: Format) -> Result<Vec<R>> {
    let delimiter = match format {
        Format::CSV => b',',
        Format::TSV => b'\t',
        Format::JSON => return Ok(serde_json::from_reader(reader)?),
    };
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr.deserialize().collect::<std::result::Result<Vec<R>, _>>()?;
    tracing::debug!(records = records.len(), ?format, "parsed dataset");
    Ok(records)
}

pub mod file {
    use std::{fs::File, io::BufReader, path::Path};

    use serde::de::DeserializeOwned;

    use super::{Format, Result};

    /// Opens `path`, taking the format from its extension unless one is given.
    pub fn read<R: DeserializeOwned>(
        path: impl AsRef<Path>,
        format: Option<Format>,
    ) -> Result<Vec<R>> {
        let path = path.as_ref();
        let format = format
            .or_else(|| Format::from_path(path))
            .unwrap_or_default();
        super::parse(BufReader::new(File::open(path)?), format)
    }
}
