//! Output sink contract and the in-memory line buffer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Visual style tag attached to every output line.
///
/// The serialized form matches the CSS class the web front end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    Normal,
    Welcome,
    Command,
    Success,
    Error,
    Warning,
    Info,
    Hint,
    FileContent,
    Consciousness,
    AiResponse,
    Meditation,
    Inspiration,
    Awakening,
}

impl LineStyle {
    /// CSS class name for this style.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Welcome => "welcome",
            Self::Command => "command",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Hint => "hint",
            Self::FileContent => "file-content",
            Self::Consciousness => "consciousness",
            Self::AiResponse => "ai-response",
            Self::Meditation => "meditation",
            Self::Inspiration => "inspiration",
            Self::Awakening => "awakening",
        }
    }
}

/// One rendered line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

/// Destination for rendered terminal output.
///
/// Implementations must preserve insertion order.
pub trait OutputSink {
    /// Append one line.
    fn append(&mut self, line: &str, style: LineStyle);

    /// Remove everything appended so far.
    fn clear(&mut self);

    /// Receive the freshly rendered prompt after a command completes.
    fn set_prompt(&mut self, _prompt: &str) {}
}

/// Maximum number of lines an [`OutputBuffer`] retains by default.
pub const DEFAULT_MAX_LINES: usize = 5000;

/// In-memory [`OutputSink`] that keeps the most recent lines.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    lines: Vec<OutputLine>,
    prompt: String,
    max_lines: usize,
}

impl OutputBuffer {
    /// Create an empty buffer with the default line cap.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_LINES)
    }

    /// Create an empty buffer retaining at most `max_lines` lines.
    pub fn with_capacity(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            prompt: String::new(),
            max_lines: max_lines.max(1),
        }
    }

    /// All retained lines, oldest first.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Just the text of every retained line.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Most recently rendered prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Move all retained lines out, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.lines)
    }

    /// Serialize retained lines as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.lines)?)
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn append(&mut self, line: &str, style: LineStyle) {
        self.lines.push(OutputLine {
            text: line.to_string(),
            style,
        });
        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut buf = OutputBuffer::new();
        buf.append("one", LineStyle::Info);
        buf.append("two", LineStyle::Success);
        buf.append("one", LineStyle::Info);
        assert_eq!(buf.texts(), vec!["one", "two", "one"]);
        assert_eq!(buf.lines()[1].style, LineStyle::Success);
    }

    #[test]
    fn clear_empties_lines_but_keeps_prompt() {
        let mut buf = OutputBuffer::new();
        buf.set_prompt("user@host:~$ ");
        buf.append("x", LineStyle::Normal);
        buf.clear();
        assert!(buf.lines().is_empty());
        assert_eq!(buf.prompt(), "user@host:~$ ");
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut buf = OutputBuffer::with_capacity(2);
        buf.append("a", LineStyle::Normal);
        buf.append("b", LineStyle::Normal);
        buf.append("c", LineStyle::Normal);
        assert_eq!(buf.texts(), vec!["b", "c"]);
    }

    #[test]
    fn take_drains_buffer() {
        let mut buf = OutputBuffer::new();
        buf.append("a", LineStyle::Normal);
        let taken = buf.take();
        assert_eq!(taken.len(), 1);
        assert!(buf.lines().is_empty());
    }

    #[test]
    fn css_class_matches_serde_name() {
        for style in [
            LineStyle::Normal,
            LineStyle::FileContent,
            LineStyle::AiResponse,
            LineStyle::Consciousness,
        ] {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.css_class()));
        }
    }

    #[test]
    fn to_json_contains_text_and_style() {
        let mut buf = OutputBuffer::new();
        buf.append("hello", LineStyle::Hint);
        let json = buf.to_json().unwrap();
        assert_eq!(json, r#"[{"text":"hello","style":"hint"}]"#);
    }
}
