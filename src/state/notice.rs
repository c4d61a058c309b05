//! Transient status-bar notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Maximum number of queued notices
const MAX_NOTICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible confirmation or error
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created: Instant,
}

impl Notice {
    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

/// FIFO of notices, newest last
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    /// Same message as the newest notice refreshes it instead of stacking
    fn push(&mut self, level: NoticeLevel, message: String) {
        if let Some(last) = self.items.back_mut() {
            if last.level == level && last.message == message {
                last.created = Instant::now();
                return;
            }
        }
        tracing::debug!(?level, %message, "notice");
        self.items.push_back(Notice {
            level,
            message,
            created: Instant::now(),
        });
        while self.items.len() > MAX_NOTICES {
            self.items.pop_front();
        }
    }

    /// Drop expired notices
    pub fn prune(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }

    /// Newest notice, if any
    pub fn latest(&self) -> Option<&Notice> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
