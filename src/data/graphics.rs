use crate::data::source::StrokeSource;
use crate::foundation::error::{HanziError, HanziResult};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

#[derive(serde::Deserialize)]
struct GraphicsRecord {
    character: String,
    #[serde(default)]
    strokes: Option<Vec<String>>,
}

/// Stroke outlines loaded from a Make Me A Hanzi style `graphics.txt`.
///
/// The file holds one JSON object per line with at least `character` and `strokes` (an array of
/// SVG path strings). Other keys such as `medians` are ignored. Lines that are not UTF-8, fail to
/// parse, lack `strokes`, or whose `character` is not a single char are skipped.
#[derive(Clone, Debug, Default)]
pub struct GraphicsFile {
    records: HashMap<char, Vec<String>>,
    skipped: usize,
}

impl GraphicsFile {
    /// Read and index a graphics file.
    #[tracing::instrument]
    pub fn open(path: &Path) -> HanziResult<Self> {
        let f = std::fs::File::open(path)?;
        let out = Self::from_reader(std::io::BufReader::new(f))?;
        tracing::info!(
            characters = out.len(),
            skipped = out.skipped,
            "loaded stroke graphics"
        );
        Ok(out)
    }

    /// Index graphics records from any buffered reader.
    ///
    /// Only genuine read failures are errors; undecodable lines are skipped like any other bad
    /// record.
    pub fn from_reader(mut reader: impl BufRead) -> HanziResult<Self> {
        let mut out = Self::default();
        let mut buf = Vec::new();
        let mut lineno = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lineno += 1;
            match std::str::from_utf8(&buf) {
                Ok(line) => out.ingest_line(lineno, line),
                Err(e) => out.skip(lineno, &HanziError::data(format!("invalid UTF-8: {e}"))),
            }
        }
        Ok(out)
    }

    /// Index graphics records held in memory.
    pub fn parse_str(text: &str) -> Self {
        let mut out = Self::default();
        for (lineno, line) in text.lines().enumerate() {
            out.ingest_line(lineno + 1, line);
        }
        out
    }

    fn ingest_line(&mut self, lineno: usize, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match parse_record(line) {
            // First record wins, matching a top-down scan of the file.
            Ok((ch, strokes)) => {
                self.records.entry(ch).or_insert(strokes);
            }
            Err(e) => self.skip(lineno, &e),
        }
    }

    fn skip(&mut self, lineno: usize, err: &HanziError) {
        tracing::warn!(line = lineno, error = %err, "skipping graphics record");
        self.skipped += 1;
    }

    /// Number of indexed characters.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no character was indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of lines that could not be used.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// `true` when stroke data exists for `character`.
    pub fn contains(&self, character: char) -> bool {
        self.records.contains_key(&character)
    }
}

fn parse_record(line: &str) -> HanziResult<(char, Vec<String>)> {
    let record: GraphicsRecord = serde_json::from_str(line)?;
    let mut chars = record.character.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(HanziError::data(format!(
            "expected a single character, got {:?}",
            record.character
        )));
    };
    let strokes = record
        .strokes
        .ok_or_else(|| HanziError::data(format!("record for {ch} has no strokes")))?;
    Ok((ch, strokes))
}

impl StrokeSource for GraphicsFile {
    fn load(&self, character: char) -> Option<Vec<String>> {
        self.records.get(&character).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/graphics.rs"]
mod tests;
