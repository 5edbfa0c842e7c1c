//! Simulated project files.
//!
//! A flat, in-memory listing that the file commands and text filters read
//! and mutate. It does not follow the working directory.

const README: &str = "# BotDL SoulPHYA Project

Welcome to the consciousness-powered development environment!

## Features
- AI-powered coding assistance
- Real-time consciousness tracking
- Divine inspiration generation
- Sacred Platform integration

## Getting Started
1. Open a file in the editor
2. Ask Sophia AI for help
3. Let consciousness guide your coding

🧠 Code with consciousness, create with purpose!";

const MAIN_PY: &str = r#"#!/usr/bin/env python3
"""
BotDL SoulPHYA - Main Application
Consciousness-powered development
"""

def awaken_consciousness():
    print("🧠 Consciousness awakening...")
    return "Divine intelligence activated"

if __name__ == "__main__":
    result = awaken_consciousness()
    print(result)"#;

const PACKAGE_JSON: &str = r#"{
  "name": "botdl-soulphya",
  "version": "1.0.0",
  "description": "AI consciousness development platform",
  "main": "index.js",
  "scripts": {
    "start": "node index.js",
    "dev": "nodemon index.js"
  },
  "keywords": ["ai", "consciousness", "development"],
  "author": "Sophia AI"
}"#;

const GITIGNORE: &str = "node_modules/
__pycache__/
.env";

/// Size reported for directories by `ls -l`.
pub const DIR_SIZE: usize = 4096;

/// File or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry in the simulated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: EntryKind,
    pub contents: String,
    /// `YYYY-MM-DD HH:MM`.
    pub modified: String,
}

impl FileEntry {
    fn file(name: &str, contents: &str, modified: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
            contents: contents.to_string(),
            modified: modified.to_string(),
        }
    }

    fn dir(name: &str, modified: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::Dir,
            contents: String::new(),
            modified: modified.to_string(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Size in bytes as shown by `ls -l`.
    pub fn size(&self) -> usize {
        match self.kind {
            EntryKind::File => self.contents.len(),
            EntryKind::Dir => DIR_SIZE,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Insertion-ordered set of simulated entries.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    entries: Vec<FileEntry>,
}

impl FileStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample project every session starts with.
    pub fn with_samples() -> Self {
        Self {
            entries: vec![
                FileEntry::file("main.py", MAIN_PY, "2025-01-08 14:25"),
                FileEntry::file("README.md", README, "2025-01-08 14:20"),
                FileEntry::file("package.json", PACKAGE_JSON, "2025-01-08 14:15"),
                FileEntry::file(".gitignore", GITIGNORE, "2025-01-08 14:10"),
                FileEntry::dir("node_modules", "2025-01-08 14:05"),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Contents of a regular file.
    pub fn read(&self, name: &str) -> Option<&str> {
        self.get(name)
            .filter(|e| e.kind == EntryKind::File)
            .map(|e| e.contents.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Create an empty file, or refresh the timestamp of an existing entry.
    /// Returns `true` if a new file was created.
    pub fn touch(&mut self, name: &str, modified: &str) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.modified = modified.to_string();
            return false;
        }
        self.entries.push(FileEntry::file(name, "", modified));
        true
    }

    /// Create a directory. Returns `false` if the name is taken.
    pub fn mkdir(&mut self, name: &str, modified: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push(FileEntry::dir(name, modified));
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<FileEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    /// Copy `src` to `dst`, replacing any existing `dst`. Returns `false`
    /// if `src` does not exist.
    pub fn copy(&mut self, src: &str, dst: &str, modified: &str) -> bool {
        let Some(source) = self.get(src) else {
            return false;
        };
        let mut copy = source.clone();
        copy.name = dst.to_string();
        copy.modified = modified.to_string();
        self.remove(dst);
        self.entries.push(copy);
        true
    }

    /// Rename `src` to `dst`, replacing any existing `dst`. Returns `false`
    /// if `src` does not exist.
    pub fn rename(&mut self, src: &str, dst: &str) -> bool {
        if src == dst {
            return self.contains(src);
        }
        let Some(mut entry) = self.remove(src) else {
            return false;
        };
        entry.name = dst.to_string();
        self.remove(dst);
        self.entries.push(entry);
        true
    }

    /// Paths (`./NAME`) of entries whose name contains `pattern`.
    pub fn find(&self, pattern: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.name.contains(pattern))
            .map(|e| format!("./{}", e.name))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2025-02-01 09:00";

    #[test]
    fn samples_are_seeded_in_order() {
        let store = FileStore::with_samples();
        let names: Vec<_> = store.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["main.py", "README.md", "package.json", ".gitignore", "node_modules"]
        );
        assert!(store.read("README.md").unwrap().starts_with("# BotDL SoulPHYA Project"));
    }

    #[test]
    fn read_skips_directories() {
        let store = FileStore::with_samples();
        assert!(store.read("node_modules").is_none());
        assert!(store.get("node_modules").unwrap().is_dir());
        assert_eq!(store.get("node_modules").unwrap().size(), DIR_SIZE);
    }

    #[test]
    fn touch_creates_then_refreshes() {
        let mut store = FileStore::new();
        assert!(store.touch("notes.txt", NOW));
        assert!(!store.touch("notes.txt", "2025-02-02 10:00"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("notes.txt").unwrap().modified, "2025-02-02 10:00");
        assert_eq!(store.read("notes.txt"), Some(""));
    }

    #[test]
    fn mkdir_refuses_existing_name() {
        let mut store = FileStore::with_samples();
        assert!(!store.mkdir("node_modules", NOW));
        assert!(store.mkdir("src", NOW));
    }

    #[test]
    fn copy_duplicates_contents() {
        let mut store = FileStore::with_samples();
        assert!(store.copy("main.py", "backup.py", NOW));
        assert_eq!(store.read("backup.py"), store.read("main.py"));
        assert!(!store.copy("missing", "x", NOW));
    }

    #[test]
    fn rename_moves_entry() {
        let mut store = FileStore::with_samples();
        assert!(store.rename("README.md", "INTRO.md"));
        assert!(!store.contains("README.md"));
        assert!(store.contains("INTRO.md"));
        assert!(!store.rename("README.md", "again.md"));
    }

    #[test]
    fn rename_onto_existing_replaces_it() {
        let mut store = FileStore::with_samples();
        let before = store.len();
        assert!(store.rename("main.py", "README.md"));
        assert_eq!(store.len(), before - 1);
        assert!(store.read("README.md").unwrap().starts_with("#!/usr/bin/env python3"));
    }

    #[test]
    fn find_matches_substring() {
        let store = FileStore::with_samples();
        assert_eq!(store.find(".py"), vec!["./main.py"]);
        assert!(store.find("zzz").is_empty());
    }
}
