use std::fmt;

/// Append-only transcript assembled from partial fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Append a fragment, separated from existing text by a single space.
    ///
    /// The fragment is taken as-is: no trimming, no deduplication.
    pub fn append(&mut self, fragment: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }

    /// Drop all accumulated text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
