//! Typewriter reveal of the hero subtitle
//!
//! A [`RevealTask`] reveals its target one character per tick. The component
//! that owns it drives `tick` from an interval and stops the interval when
//! `tick` returns `None`. Cancelling is final; a new mount builds a new task.

/// Interval between two revealed characters of the hero subtitle
pub const HERO_TYPING_INTERVAL_MS: u64 = 41;

/// Character-by-character prefix of a target string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    /// Byte offset of the revealed prefix, always on a char boundary
    end: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            end: 0,
        }
    }

    pub fn visible(&self) -> &str {
        &self.target[..self.end]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.end == self.target.len()
    }

    /// Reveal one more character; `false` once the target is fully shown
    pub fn advance(&mut self) -> bool {
        match self.target[self.end..].chars().next() {
            Some(c) => {
                self.end += c.len_utf8();
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    Running,
    Finished,
    Cancelled,
}

/// Cancellable timer-driven typewriter
#[derive(Debug, Clone)]
pub struct RevealTask {
    writer: Typewriter,
    state: TaskState,
}

impl RevealTask {
    pub fn start(target: impl Into<String>) -> Self {
        let writer = Typewriter::new(target);
        let state = if writer.is_complete() {
            TaskState::Finished
        } else {
            TaskState::Running
        };
        Self { writer, state }
    }

    /// Advance by one tick.
    ///
    /// Returns the newly visible text, or `None` once the task is finished or
    /// cancelled. The tick that finds nothing left to reveal marks the task
    /// finished.
    pub fn tick(&mut self) -> Option<&str> {
        if self.state != TaskState::Running {
            return None;
        }
        if self.writer.advance() {
            Some(self.writer.visible())
        } else {
            self.state = TaskState::Finished;
            tracing::trace!(chars = self.writer.target().chars().count(), "typewriter finished");
            None
        }
    }

    pub fn cancel(&mut self) {
        if self.state == TaskState::Running {
            self.state = TaskState::Cancelled;
            tracing::trace!(visible = self.writer.visible(), "typewriter cancelled");
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TaskState::Running
    }

    pub fn visible(&self) -> &str {
        self.writer.visible()
    }
}
