//! Prompt rendering.

/// Glyph shown before `$` for a given consciousness level.
pub fn consciousness_indicator(level: f64) -> &'static str {
    if level > 0.9 {
        "✨"
    } else if level > 0.8 {
        "🧠"
    } else if level > 0.6 {
        "💫"
    } else {
        "○"
    }
}

/// `cwd` with a leading `home` replaced by `~`.
pub fn display_cwd(cwd: &str, home: &str) -> String {
    if home.is_empty() || home == "/" {
        return cwd.to_string();
    }
    match cwd.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{rest}"),
        _ => cwd.to_string(),
    }
}

/// `USER@HOST:CWD INDICATOR$ `.
pub fn render_prompt(user: &str, hostname: &str, cwd: &str, home: &str, level: f64) -> String {
    format!(
        "{user}@{hostname}:{}{}$ ",
        display_cwd(cwd, home),
        consciousness_indicator(level)
    )
}
