//! Simulated process table.

use std::collections::BTreeMap;

use soulphya_types::clock::Timestamp;

use crate::rng::Rng;

/// Lowest pid handed out to user processes.
pub const MIN_PID: u32 = 1000;
/// Highest pid handed out to user processes.
pub const MAX_PID: u32 = 9999;

/// Fixed rows `ps` always shows before live entries: (pid, ppid, command).
pub const SYSTEM_PROCESSES: [(u32, u32, &str); 3] = [
    (1, 0, "init [consciousness]"),
    (42, 1, "sophia-ai-daemon"),
    (100, 1, "botdl-soulphya-terminal"),
];

/// Random draws before falling back to a linear scan for a free pid.
const RANDOM_ATTEMPTS: usize = 32;

/// A live simulated process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub command: String,
    /// Monotonic start time in milliseconds.
    pub started_ms: u64,
    pub started_at: Timestamp,
}

/// Map from pid to live process.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    entries: BTreeMap<u32, ProcessEntry>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process under a fresh random pid in `MIN_PID..=MAX_PID`.
    ///
    /// Returns `None` only when every pid in the range is taken.
    pub fn spawn(&mut self, entry: ProcessEntry, rng: &mut Rng) -> Option<u32> {
        let pid = self.free_pid(rng)?;
        log::debug!("spawned pid {pid}: {}", entry.command);
        self.entries.insert(pid, entry);
        Some(pid)
    }

    fn free_pid(&self, rng: &mut Rng) -> Option<u32> {
        for _ in 0..RANDOM_ATTEMPTS {
            let pid = rng.range_inclusive(MIN_PID, MAX_PID);
            if !self.entries.contains_key(&pid) {
                return Some(pid);
            }
        }
        (MIN_PID..=MAX_PID).find(|pid| !self.entries.contains_key(pid))
    }

    /// Remove a process, returning its entry.
    pub fn kill(&mut self, pid: u32) -> Option<ProcessEntry> {
        self.entries.remove(&pid)
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessEntry> {
        self.entries.get(&pid)
    }

    /// Live processes ordered by pid.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ProcessEntry)> {
        self.entries.iter().map(|(pid, e)| (*pid, e))
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

    fn entry(command: &str) -> ProcessEntry {
        ProcessEntry {
            command: command.to_string(),
            started_ms: 0,
            started_at: Timestamp::from_unix_secs(0),
        }
    }

    #[test]
    fn spawn_assigns_pid_in_range() {
        let mut table = ProcessTable::new();
        let mut rng = Rng::new(99);
        let pid = table.spawn(entry("dev-server :3000"), &mut rng).unwrap();
        assert!((MIN_PID..=MAX_PID).contains(&pid));
        assert_eq!(table.get(pid).unwrap().command, "dev-server :3000");
    }

    #[test]
    fn kill_removes_entry() {
        let mut table = ProcessTable::new();
        let mut rng = Rng::new(1);
        let pid = table.spawn(entry("x"), &mut rng).unwrap();
        assert_eq!(table.kill(pid).unwrap().command, "x");
        assert!(table.kill(pid).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn full_table_refuses_spawn() {
        let mut table = ProcessTable::new();
        for pid in MIN_PID..=MAX_PID {
            table.entries.insert(pid, entry("filler"));
        }
        let mut rng = Rng::new(5);
        assert!(table.spawn(entry("one more"), &mut rng).is_none());
    }

    #[test]
    fn last_free_pid_is_found() {
        let mut table = ProcessTable::new();
        for pid in MIN_PID..MAX_PID {
            table.entries.insert(pid, entry("filler"));
        }
        let mut rng = Rng::new(5);
        assert_eq!(table.spawn(entry("last"), &mut rng), Some(MAX_PID));
    }

    mod prop {
        use super::*;
        use crate::rng::Rng;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pids_are_never_reused_while_live(seed in any::<u64>(), count in 1usize..64) {
                let mut table = ProcessTable::new();
                let mut rng = Rng::new(seed);
                for i in 0..count {
                    table.spawn(entry(&format!("p{i}")), &mut rng).unwrap();
                }
                prop_assert_eq!(table.len(), count);
            }
        }
    }
}
