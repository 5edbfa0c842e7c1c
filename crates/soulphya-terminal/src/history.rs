//! Command history with a navigation cursor.

/// Ordered list of submitted lines plus the up/down navigation cursor.
///
/// The cursor ranges over `0..=len`; `len` is the "end" position where the
/// input line is empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Create an empty history that keeps at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Append a line and move the cursor to the end.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len();
    }

    /// Step back one entry. Returns the entry to show, or `None` when
    /// already at the oldest entry.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry. Stepping past the newest entry returns to
    /// the end position and yields an empty string; at the end it is a
    /// no-op.
    pub fn next(&mut self) -> Option<&str> {
        let len = self.entries.len();
        if self.cursor + 1 < len {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else if self.cursor + 1 == len {
            self.cursor = len;
            Some("")
        } else {
            None
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits past the newest entry.
    pub fn at_end(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
