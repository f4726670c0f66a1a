//! Tick scheduler: deferred one-shot tasks on the simulation's own clock.
//!
//! Tasks are due at an absolute tick and fire when the engine reaches that
//! tick. Nothing here touches wall-clock time, so tests advance ticks
//! instead of waiting.

/// Work that can be deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Pass the turn to the next player.
    AdvanceTurn,
}

/// Handle returned by [`TickScheduler::schedule_at`], used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Entry {
    handle: TaskHandle,
    due_tick: u64,
    task: ScheduledTask,
}

#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire once the clock reaches `due_tick`.
    pub fn schedule_at(&mut self, due_tick: u64, task: ScheduledTask) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due_tick,
            task,
        });
        tracing::debug!(due_tick, ?task, "task scheduled");
        handle
    }

    /// Drop a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let cancelled = self.entries.len() != before;
        if cancelled {
            tracing::debug!(?handle, "task cancelled");
        }
        cancelled
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "all tasks cancelled");
        }
        self.entries.clear();
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return every task due at or before `now`, earliest first
    /// (ties in scheduling order).
    pub fn take_due(&mut self, now: u64) -> Vec<(TaskHandle, ScheduledTask)> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.due_tick <= now {
                due.push(e.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| (e.due_tick, e.handle.0));
        due.into_iter().map(|e| (e.handle, e.task)).collect()
    }
}
