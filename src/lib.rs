//! Autocomplete and colouring for skill charts

pub mod dataset;
pub mod palette;
pub mod trie;

pub use dataset::{Dataset, Named, Skill, Suggestion};
pub use palette::{Config, Generator, Hsla, Palette, palette};
pub use trie::{Entry, Trie};
