use include_flate::flate;
use serde::Serialize;
use skillviz::{
    Dataset, Generator, Skill,
    dataset::load::{self, Format},
    palette::{Config, DEFAULT_SEED},
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn initialise() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Autocomplete match as handed to the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub key: String,
    pub value: usize,
    pub total_occurences: u64,
}

/// Prefix search over a set of skill names.
#[wasm_bindgen]
pub struct SearchIndex {
    dataset: Dataset<Skill>,
}

#[wasm_bindgen]
impl SearchIndex {
    /// Indexes `names` by their position.
    #[wasm_bindgen(constructor)]
    pub fn new(names: Vec<String>, ignore_case: bool) -> SearchIndex {
        let records = names.into_iter().map(|name| Skill::new(name, 0)).collect();
        SearchIndex::from_records(records, ignore_case)
    }

    pub fn builtin(id: DatasetID, ignore_case: bool) -> Result<SearchIndex, String> {
        let records = load::parse(id.reader(), Format::TSV).map_err(|err| err.to_string())?;
        Ok(SearchIndex::from_records(records, ignore_case))
    }

    /// Matches for the text typed so far, `[{ key, value, total_occurences }]`.
    pub fn lookup(&self, prefix: &str) -> Result<JsValue, String> {
        let suggestions: Vec<Suggestion> = self
            .dataset
            .suggest(prefix)
            .into_iter()
            .map(|suggestion| Suggestion {
                key: suggestion.record.name.clone(),
                value: suggestion.position,
                total_occurences: suggestion.record.total_occurences,
            })
            .collect();
        serde_wasm_bindgen::to_value(&suggestions).map_err(|err| err.to_string())
    }

    /// Name of the record at `value`, as returned by [`SearchIndex::lookup`].
    pub fn name(&self, value: usize) -> Option<String> {
        self.dataset.pick(value).map(|skill| skill.name.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.dataset.len()
    }
}

impl SearchIndex {
    fn from_records(records: Vec<Skill>, ignore_case: bool) -> Self {
        let dataset = if ignore_case {
            Dataset::case_insensitive(records)
        } else {
            Dataset::new(records)
        };
        SearchIndex { dataset }
    }
}

fn generate(count: usize, seed: Option<u64>) -> Result<skillviz::Palette, String> {
    Generator::seeded(Config::default(), seed.unwrap_or(DEFAULT_SEED))
        .and_then(|mut generator| generator.generate(count))
        .map_err(|err| err.to_string())
}

/// `count` CSS colours for chart series.
#[wasm_bindgen]
pub fn palette(count: usize, seed: Option<u64>) -> Result<Vec<String>, String> {
    Ok(generate(count, seed)?.css())
}

/// `count` colours as `[hue, saturation, lightness, alpha]` arrays.
#[wasm_bindgen]
pub fn palette_tuples(count: usize, seed: Option<u64>) -> Result<JsValue, String> {
    let tuples: Vec<(f64, u32, u32, u32)> = generate(count, seed)?
        .iter()
        .map(|colour| colour.as_tuple())
        .collect();
    serde_wasm_bindgen::to_value(&tuples).map_err(|err| err.to_string())
}

#[wasm_bindgen]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DatasetID {
    #[default]
    Skills,
}

trait IncludeReader {
    fn reader(&self) -> std::io::Cursor<&'static [u8]>;
}

macro_rules! impl_include_reader {
    ($name:ident, $(($variant:ident, $path:literal)),*) => {
        impl IncludeReader for $name {
            fn reader(&self) -> std::io::Cursor<&'static [u8]> {
                match self {
                    $(Self::$variant => {
                        flate!(static DATA: [u8] from $path);
                        std::io::Cursor::new(DATA.as_slice())
                    })*
                }
            }
        }
    };
}

impl_include_reader!(DatasetID, (Skills, "../data/skills.tsv"));

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_skills_parse() {
        let index = SearchIndex::builtin(DatasetID::Skills, true).unwrap();
        assert!(index.length() > 0);
        let found = index.dataset.suggest("ru");
        assert_eq!(found.len(), 1);
        assert_eq!(index.name(found[0].position).as_deref(), Some("Rust"));
    }

    #[test]
    fn palette_css() {
        let colours = palette(3, None).unwrap();
        assert_eq!(colours.len(), 3);
        assert!(colours[0].starts_with("hsla(222.5, "));
        assert_eq!(palette(3, Some(DEFAULT_SEED)).unwrap(), colours);
    }
}
