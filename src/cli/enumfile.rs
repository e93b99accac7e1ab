use std::path::Path;

use crate::cli::builtins::BuiltinDataset;
use clap::{
    ValueEnum,
    builder::{TypedValueParser, ValueParserFactory},
};
use serde::de::DeserializeOwned;
use skillviz::dataset::load::{self, Format};

#[derive(Debug, Clone)]
pub enum BuiltinOrFile<T: ValueEnum> {
    /// A dataset shipped with the binary.
    Builtin(T),
    /// A file path, or `-` for stdin.
    File(clio::Input),
}

impl<T: ValueEnum + BuiltinDataset> BuiltinOrFile<T> {
    /// Parses the records, preferring `format` over the builtin's format or the
    /// file extension.
    pub fn load<R: DeserializeOwned>(&mut self, format: Option<Format>) -> load::Result<Vec<R>> {
        match self {
            Self::Builtin(builtin) => {
                let format = format.unwrap_or_else(|| builtin.format());
                load::parse(builtin.reader(), format)
            }
            Self::File(file) => {
                let path: &Path = file.path();
                let format = format
                    .or_else(|| Format::from_path(path))
                    .unwrap_or_default();
                load::parse(file.lock(), format)
            }
        }
    }
}

impl<T: ValueEnum + Default> Default for BuiltinOrFile<T> {
    fn default() -> Self {
        BuiltinOrFile::Builtin(T::default())
    }
}

impl<T: ValueEnum> ValueParserFactory for BuiltinOrFile<T> {
    type Parser = BuiltinOrFileParser<T>;

    fn value_parser() -> Self::Parser {
        BuiltinOrFileParser(std::marker::PhantomData)
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinOrFileParser<T: ValueEnum>(std::marker::PhantomData<T>);

impl<T: ValueEnum + Send + Sync + 'static> TypedValueParser for BuiltinOrFileParser<T> {
    type Value = BuiltinOrFile<T>;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        if let Ok(builtin) = clap::builder::EnumValueParser::<T>::new().parse_ref(cmd, arg, value) {
            return Ok(Self::Value::Builtin(builtin));
        }
        clio::Input::try_from(value)
            .map(Self::Value::File)
            .map_err(|err| clap::Error::raw(clap::error::ErrorKind::Io, err.to_string()).with_cmd(cmd))
    }

    fn possible_values(
        &self,
    ) -> Option<Box<dyn Iterator<Item = clap::builder::PossibleValue> + '_>> {
        Some(Box::new(
            T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .chain(std::iter::once(
                    clap::builder::PossibleValue::new("<filepath>").help("Path to a dataset file"),
                )),
        ))
    }
}
