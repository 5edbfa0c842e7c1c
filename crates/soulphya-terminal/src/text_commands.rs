//! Text filters: grep, wc, sort, head, tail.
//!
//! Each filter reads the previous pipeline stage when there is one (even if
//! it produced nothing), otherwise the named simulated file.

use soulphya_types::error::{Result, TerminalError};
use soulphya_types::output::LineStyle;

use crate::builtin::Builtin;
use crate::interpreter::Context;

/// Line count used by head/tail when `-n` is missing or unusable.
const DEFAULT_LINES: usize = 10;

/// Piped input, else the contents of `file`, else empty text.
fn read_input(command: &str, file: Option<&str>, ctx: &Context<'_>) -> Result<String> {
    if let Some(stdin) = ctx.stdin {
        return Ok(stdin.to_string());
    }
    let Some(name) = file else {
        return Ok(String::new());
    };
    ctx.state
        .files
        .read(name)
        .map(str::to_string)
        .ok_or_else(|| {
            TerminalError::not_found(format!("{command}: {name}: No such file or directory"))
        })
}

/// Parse `[-n COUNT] [FILE]`. A missing, invalid or zero count falls back to
/// the default.
fn parse_count(args: &[String]) -> (usize, Option<&str>) {
    let mut count = DEFAULT_LINES;
    let mut file = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" {
            count = iter
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_LINES);
        } else if file.is_none() && !arg.starts_with('-') {
            file = Some(arg.as_str());
        }
    }
    (count, file)
}

/// `(lines, words, chars)` where lines counts `\n` characters.
pub fn count_text(text: &str) -> (usize, usize, usize) {
    let lines = text.matches('\n').count();
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    (lines, words, chars)
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

pub(crate) fn grep(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let pattern = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Grep.usage()))?;
    let input = read_input("grep", args.get(1).map(String::as_str), ctx)?;
    let text = input
        .lines()
        .filter(|line| line.contains(pattern.as_str()))
        .collect::<Vec<_>>()
        .join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// wc
// ---------------------------------------------------------------------------

pub(crate) fn wc(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let input = read_input("wc", args.first().map(String::as_str), ctx)?;
    let (lines, words, chars) = count_text(&input);
    let text = format!("{lines} {words} {chars}");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

pub(crate) fn sort(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let input = read_input("sort", args.first().map(String::as_str), ctx)?;
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort_unstable();
    let text = lines.join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// head / tail
// ---------------------------------------------------------------------------

pub(crate) fn head(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let (count, file) = parse_count(args);
    let input = read_input("head", file, ctx)?;
    let text = input.lines().take(count).collect::<Vec<_>>().join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

pub(crate) fn tail(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let (count, file) = parse_count(args);
    let input = read_input("tail", file, ctx)?;
    let lines: Vec<&str> = input.lines().collect();
    let start = lines.len().saturating_sub(count);
    let text = lines[start..].join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}
