const DEFAULT_DECK: &str = "一二三四五六七八九十";

/// Ordered study list with a wrapping cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterDeck {
    chars: Vec<char>,
    index: usize,
}

impl Default for CharacterDeck {
    fn default() -> Self {
        Self::new(DEFAULT_DECK.chars())
    }
}

impl CharacterDeck {
    /// Deck over `chars`, duplicates and whitespace removed, cursor on the first entry.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut deck = Self {
            chars: Vec::new(),
            index: 0,
        };
        for ch in chars {
            deck.add(ch);
        }
        deck
    }

    /// Deck from a character list file: first character of every non-blank line.
    ///
    /// Text with no usable line gives the default deck (一 through 十).
    pub fn from_text(text: &str) -> Self {
        let deck = Self::new(text.lines().filter_map(|l| l.trim().chars().next()));
        if deck.is_empty() {
            return Self::default();
        }
        deck
    }

    /// Character under the cursor.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Move forward one entry (wrapping) and return it.
    pub fn next_char(&mut self) -> Option<char> {
        if self.chars.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.chars.len();
        self.current()
    }

    /// Move back one entry (wrapping) and return it.
    pub fn previous_char(&mut self) -> Option<char> {
        if self.chars.is_empty() {
            return None;
        }
        self.index = (self.index + self.chars.len() - 1) % self.chars.len();
        self.current()
    }

    /// Append `ch` unless it is whitespace or already present.
    pub fn add(&mut self, ch: char) -> bool {
        if ch.is_whitespace() || self.chars.contains(&ch) {
            return false;
        }
        self.chars.push(ch);
        true
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// `true` when the deck has no entries.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All entries in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// One entry per line, the list file format read by [`CharacterDeck::from_text`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for ch in &self.chars {
            out.push(*ch);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/deck.rs"]
mod tests;
