//! Cancellable delayed output.
//!
//! Commands that finish "later" (npm, git, deploy, server, sophia) queue
//! their remaining lines here. The owner of the terminal drives delivery by
//! calling `tick`; nothing runs on its own.

use soulphya_types::output::LineStyle;

/// Identifier returned by [`Scheduler::schedule`].
pub type TaskId = u64;

/// One pending output line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Monotonic time (ms) at which the line becomes due.
    pub due_ms: u64,
    pub text: String,
    pub style: LineStyle,
    /// Process whose termination cancels this task.
    pub owner: Option<u32>,
}

/// Queue of pending output lines.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: TaskId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `text` to be emitted `delay_ms` after `now_ms`.
    pub fn schedule(
        &mut self,
        now_ms: u64,
        delay_ms: u64,
        text: &str,
        style: LineStyle,
        owner: Option<u32>,
    ) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        let due_ms = now_ms.saturating_add(delay_ms);
        log::debug!("scheduled task {id} due at {due_ms}ms");
        self.tasks.push(ScheduledTask {
            id,
            due_ms,
            text: text.to_string(),
            style,
            owner,
        });
        id
    }

    /// Cancel one task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before != self.tasks.len()
    }

    /// Cancel every task owned by `pid`; returns how many were dropped.
    pub fn cancel_owned(&mut self, pid: u32) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.owner != Some(pid));
        let dropped = before - self.tasks.len();
        if dropped > 0 {
            log::debug!("cancelled {dropped} task(s) owned by pid {pid}");
        }
        dropped
    }

    /// Drop everything pending; returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        if dropped > 0 {
            log::debug!("cancelled {dropped} pending task(s)");
        }
        dropped
    }

    /// Remove and return every task due at or before `now_ms`, ordered by
    /// due time, then by scheduling order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| t.due_ms <= now_ms);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due_ms, t.id));
        due
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }
}
