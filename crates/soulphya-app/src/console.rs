//! Stdout output sink: ANSI-colored text or JSON lines.

use std::io::Write;

use soulphya_types::output::{LineStyle, OutputLine, OutputSink};

const RESET: &str = "\x1b[0m";

/// ANSI escape for a line style.
fn ansi_color(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Normal | LineStyle::FileContent => "",
        LineStyle::Welcome => "\x1b[1;35m",
        LineStyle::Command => "\x1b[1;37m",
        LineStyle::Success => "\x1b[32m",
        LineStyle::Error => "\x1b[31m",
        LineStyle::Warning => "\x1b[33m",
        LineStyle::Info => "\x1b[36m",
        LineStyle::Hint => "\x1b[2;36m",
        LineStyle::Consciousness | LineStyle::Awakening => "\x1b[35m",
        LineStyle::AiResponse => "\x1b[1;34m",
        LineStyle::Meditation => "\x1b[34m",
        LineStyle::Inspiration => "\x1b[1;33m",
    }
}

/// Render one line for a color terminal.
pub fn render_ansi(line: &str, style: LineStyle) -> String {
    match ansi_color(style) {
        "" => line.to_string(),
        color => format!("{color}{line}{RESET}"),
    }
}

/// Writes every appended line straight to stdout.
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn write(&self, text: &str, newline: bool) {
        let mut out = std::io::stdout().lock();
        let result = if newline {
            writeln!(out, "{text}")
        } else {
            write!(out, "{text}").and_then(|()| out.flush())
        };
        if let Err(e) = result {
            log::error!("stdout write failed: {e}");
        }
    }
}

impl OutputSink for ConsoleSink {
    fn append(&mut self, line: &str, style: LineStyle) {
        if self.json {
            let record = OutputLine {
                text: line.to_string(),
                style,
            };
            match serde_json::to_string(&record) {
                Ok(json) => self.write(&json, true),
                Err(e) => log::error!("Failed to encode output line: {e}"),
            }
        } else {
            self.write(&render_ansi(line, style), true);
        }
    }

    fn clear(&mut self) {
        if self.json {
            self.write(r#"{"clear":true}"#, true);
        } else {
            self.write("\x1b[2J\x1b[H", false);
        }
    }

    fn set_prompt(&mut self, prompt: &str) {
        if self.json {
            match serde_json::to_string(&serde_json::json!({ "prompt": prompt })) {
                Ok(json) => self.write(&json, true),
                Err(e) => log::error!("Failed to encode prompt: {e}"),
            }
        } else {
            self.write(prompt, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styles_are_uncolored() {
        assert_eq!(render_ansi("text", LineStyle::Normal), "text");
        assert_eq!(render_ansi("fn main()", LineStyle::FileContent), "fn main()");
    }

    #[test]
    fn styled_lines_reset_color() {
        assert_eq!(render_ansi("oops", LineStyle::Error), "\x1b[31moops\x1b[0m");
    }
}
