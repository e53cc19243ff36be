use std::collections::HashMap;

/// Stroke-data lookup keyed by character.
///
/// Returns the character's stroke outlines as SVG path strings in writing order, or `None` when
/// the character is unknown. Parsing the strings is left to the caller.
pub trait StrokeSource {
    /// Look up the ordered stroke paths for `character`.
    fn load(&self, character: char) -> Option<Vec<String>>;
}

impl<T: StrokeSource + ?Sized> StrokeSource for &T {
    fn load(&self, character: char) -> Option<Vec<String>> {
        (**self).load(character)
    }
}

impl<T: StrokeSource + ?Sized> StrokeSource for Box<T> {
    fn load(&self, character: char) -> Option<Vec<String>> {
        (**self).load(character)
    }
}

/// Map-backed source for tests and embedders that already hold the data.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    records: HashMap<char, Vec<String>>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the paths for `character`.
    pub fn insert<I, S>(&mut self, character: char, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records
            .insert(character, paths.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`InMemorySource::insert`].
    pub fn with<I, S>(mut self, character: char, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(character, paths);
        self
    }
}

impl StrokeSource for InMemorySource {
    fn load(&self, character: char) -> Option<Vec<String>> {
        self.records.get(&character).cloned()
    }
}
