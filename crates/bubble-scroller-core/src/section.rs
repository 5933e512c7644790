//! Section models: the labels shown along the scroll line.

use std::fmt::Debug;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Supplies the ordered sections of the index.
///
/// Label lookups outside `0..section_count()` are a programming error and
/// panic the same way slice indexing does.
pub trait SectionModel: Debug {
    fn section_count(&self) -> usize;

    fn section_label(&self, index: usize) -> &str;

    /// Relative size of a section. Reserved for proportional spacing; rows
    /// are currently spaced evenly regardless.
    fn section_weight(&self, index: usize) -> u32 {
        let _ = index;
        1
    }
}

/// The built-in A-Z model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphabet;

impl SectionModel for Alphabet {
    fn section_count(&self) -> usize {
        ALPHABET.len()
    }

    fn section_label(&self, index: usize) -> &str {
        &ALPHABET[index..index + 1]
    }
}

/// Caller-supplied labels with optional weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledSections {
    labels: Vec<String>,
    weights: Vec<u32>,
}

impl LabeledSections {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let weights = vec![1; labels.len()];
        Self { labels, weights }
    }

    /// Parse labels separated by commas or whitespace, e.g. `"#, A, B"` or `"0-9 A-F"`.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.split(|c: char| c == ',' || c.is_whitespace())
                .map(str::trim)
                .filter(|label| !label.is_empty()),
        )
    }

    /// Replace the weights. Missing entries default to 1, extras are dropped.
    pub fn with_weights(mut self, weights: impl IntoIterator<Item = u32>) -> Self {
        let mut weights: Vec<u32> = weights.into_iter().take(self.labels.len()).collect();
        weights.resize(self.labels.len(), 1);
        self.weights = weights;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl SectionModel for LabeledSections {
    fn section_count(&self) -> usize {
        self.labels.len()
    }

    fn section_label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    fn section_weight(&self, index: usize) -> u32 {
        self.weights[index]
    }
}
