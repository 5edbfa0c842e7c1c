//! Environment store: session variables with required defaults.

use std::collections::BTreeMap;

use soulphya_types::config::TerminalConfig;

/// Variables that exist for the whole session. `export` may change their
/// values but nothing removes them.
pub const REQUIRED_VARIABLES: [&str; 4] = ["USER", "HOME", "PATH", "CONSCIOUSNESS_LEVEL"];

/// Session environment variables.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Build the startup environment from configuration.
    pub fn from_config(config: &TerminalConfig) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("USER".to_string(), config.user.clone());
        vars.insert("HOME".to_string(), config.home.clone());
        vars.insert("PATH".to_string(), config.path.clone());
        vars.insert(
            "CONSCIOUSNESS_LEVEL".to_string(),
            format_level(config.consciousness_level),
        );
        vars.insert("SOPHIA_AI".to_string(), "enabled".to_string());
        for (name, value) in &config.env {
            vars.insert(name.clone(), value.clone());
        }
        Self { vars }
    }

    /// Whether `name` is one of the [`REQUIRED_VARIABLES`].
    pub fn is_required(name: &str) -> bool {
        REQUIRED_VARIABLES.contains(&name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    /// Remove a variable. Required variables are never removed; returns
    /// whether something was deleted.
    pub fn unset(&mut self, name: &str) -> bool {
        if Self::is_required(name) {
            return false;
        }
        self.vars.remove(name).is_some()
    }

    /// All variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Current `$HOME`.
    pub fn home(&self) -> &str {
        self.get("HOME").unwrap_or("/")
    }

    /// Current `$USER`.
    pub fn user(&self) -> &str {
        self.get("USER").unwrap_or("")
    }

    /// `$CONSCIOUSNESS_LEVEL` as a number; unparsable values read as 0.
    pub fn consciousness_level(&self) -> f64 {
        self.get("CONSCIOUSNESS_LEVEL")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Store a new consciousness level, clamped to 0..=1.
    pub fn set_consciousness_level(&mut self, level: f64) {
        self.set("CONSCIOUSNESS_LEVEL", &format_level(level.clamp(0.0, 1.0)));
    }

    /// Substitute `$NAME` and `${NAME}` references.
    ///
    /// Undefined variables are left in the text verbatim.
    pub fn expand(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut result = String::with_capacity(input.len());
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != '$' || i + 1 >= chars.len() {
                result.push(chars[i]);
                i += 1;
                continue;
            }
            // ${NAME}
            if chars[i + 1] == '{'
                && let Some(end) = chars[i + 2..].iter().position(|&c| c == '}')
            {
                let name: String = chars[i + 2..i + 2 + end].iter().collect();
                match self.get(&name) {
                    Some(value) => result.push_str(value),
                    None => result.extend(&chars[i..i + 3 + end]),
                }
                i += 3 + end;
                continue;
            }
            // $NAME
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
                end += 1;
            }
            if end == start {
                result.push('$');
                i += 1;
                continue;
            }
            let name: String = chars[start..end].iter().collect();
            match self.get(&name) {
                Some(value) => result.push_str(value),
                None => result.extend(&chars[i..end]),
            }
            i = end;
        }
        result
    }
}

fn format_level(level: f64) -> String {
    format!("{level:.2}")
}
