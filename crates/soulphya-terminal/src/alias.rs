//! Alias table and single-level alias resolution.

use std::collections::BTreeMap;

use soulphya_types::error::Result;

use crate::interpreter::{Word, lex};

/// Aliases every session starts with.
const DEFAULT_ALIASES: [(&str, &str); 5] = [
    ("ll", "ls -la"),
    ("la", "ls -la"),
    ("cls", "clear"),
    (
        "consciousness",
        "echo \"Consciousness Level: $CONSCIOUSNESS_LEVEL\"",
    ),
    ("sophia", "echo \"Sophia AI is awakened and ready to assist\""),
];

/// Mapping from alias name to target command string.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table seeded with the stock aliases.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (name, target) in DEFAULT_ALIASES {
            table.set(name, target);
        }
        table
    }

    pub fn set(&mut self, name: &str, target: &str) {
        self.aliases.insert(name.to_string(), target.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Remove an alias; returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.aliases.remove(name).is_some()
    }

    /// All aliases, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Expand the first token if it names an alias.
    ///
    /// The target's first token becomes the command and its remaining tokens
    /// are prepended to the original arguments. Expansion happens once: a
    /// target that names another alias is not expanded again.
    pub fn resolve(&self, mut words: Vec<Word>) -> Result<Vec<Word>> {
        let Some(first) = words.first() else {
            return Ok(words);
        };
        let name = first.text();
        if let Some(target) = self.aliases.get(&name) {
            let expanded = lex(target)?;
            log::debug!("alias {name} -> {target}");
            words.splice(0..1, expanded);
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(table: &AliasTable, line: &str) -> Vec<String> {
        let words = table.resolve(lex(line).unwrap()).unwrap();
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn defaults_are_seeded() {
        let table = AliasTable::with_defaults();
        assert_eq!(table.get("ll"), Some("ls -la"));
        assert_eq!(table.get("cls"), Some("clear"));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn resolve_prepends_target_arguments() {
        let table = AliasTable::with_defaults();
        assert_eq!(resolve(&table, "ll extra"), ["ls", "-la", "extra"]);
    }

    #[test]
    fn resolve_leaves_non_alias_untouched() {
        let table = AliasTable::with_defaults();
        assert_eq!(resolve(&table, "echo ll"), ["echo", "ll"]);
    }

    #[test]
    fn resolve_is_single_level() {
        let mut table = AliasTable::new();
        table.set("a", "b");
        table.set("b", "echo hi");
        assert_eq!(resolve(&table, "a"), ["b"]);
    }

    #[test]
    fn resolve_honors_quotes_in_target() {
        let table = AliasTable::with_defaults();
        assert_eq!(
            resolve(&table, "sophia"),
            ["echo", "Sophia AI is awakened and ready to assist"]
        );
    }

    #[test]
    fn resolve_empty_input() {
        let table = AliasTable::with_defaults();
        assert!(table.resolve(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn remove_reports_presence() {
        let mut table = AliasTable::with_defaults();
        assert!(table.remove("la"));
        assert!(!table.remove("la"));
    }
}
