//! Named records with an autocomplete index over their names.

#[cfg(feature = "load")]
pub mod load;

use crate::trie::{Entry, Trie};

/// A record that can be found by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

/// A skill as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_occurences: u64,
}

impl Skill {
    pub fn new(name: impl Into<String>, total_occurences: u64) -> Self {
        Self {
            name: name.into(),
            total_occurences,
        }
    }
}

impl Named for Skill {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A lookup match resolved back to its record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Suggestion<'d, R> {
    /// The indexed key, lowercased when the dataset ignores case.
    pub key: String,
    /// Position of the record in the dataset.
    pub position: usize,
    pub record: &'d R,
}

/// Records in load order plus a prefix index from name to position.
///
/// A dataset is not modified after construction; to refresh it build a new
/// one from the new records and replace the old value.
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    records: Vec<R>,
    index: Trie<usize>,
    ignore_case: bool,
}

impl<R: Named> Dataset<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::build(records, false)
    }

    /// Matches names regardless of case by lowercasing both names and queries.
    pub fn case_insensitive(records: Vec<R>) -> Self {
        Self::build(records, true)
    }

    fn build(records: Vec<R>, ignore_case: bool) -> Self {
        let mut index = Trie::new();
        for (position, record) in records.iter().enumerate() {
            if ignore_case {
                index.insert(&record.name().to_lowercase(), position);
            } else {
                index.insert(record.name(), position);
            }
        }
        tracing::debug!(records = records.len(), ignore_case, "built name index");
        Self {
            records,
            index,
            ignore_case,
        }
    }

    /// Records whose name starts with `query`.
    ///
    /// An empty query suggests nothing.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion<'_, R>> {
        if query.is_empty() {
            return Vec::new();
        }
        let matches = if self.ignore_case {
            self.index.lookup(&query.to_lowercase())
        } else {
            self.index.lookup(query)
        };
        matches
            .into_iter()
            .filter_map(|entry| self.resolve(entry))
            .collect()
    }

    fn resolve(&self, Entry { key, value }: Entry<'_, usize>) -> Option<Suggestion<'_, R>> {
        Some(Suggestion {
            key,
            position: *value,
            record: self.records.get(*value)?,
        })
    }
}

impl<R> Dataset<R> {
    /// The record a suggestion's position refers to.
    pub fn pick(&self, position: usize) -> Option<&R> {
        self.records.get(position)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn index(&self) -> &Trie<usize> {
        &self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }
}

impl<R: Named> FromIterator<R> for Dataset<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}
