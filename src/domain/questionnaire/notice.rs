//! Transient validation notices.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Seconds a validation notice stays visible.
pub const DEFAULT_NOTICE_TTL_SECS: u64 = 5;

/// A user-facing message raised by a failed step validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationNotice {
    pub message: String,
    pub raised_at: Timestamp,
    pub expires_at: Timestamp,
}

impl ValidationNotice {
    /// Returns true if the notice should still be shown at `now`.
    pub fn is_visible_at(&self, now: &Timestamp) -> bool {
        now.is_before(&self.expires_at)
    }
}

/// Holds at most one notice; raising a new one replaces the old one.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl_secs: u64,
    current: Option<ValidationNotice>,
}

impl NoticeBoard {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_secs,
            current: None,
        }
    }

    /// Shows `message`, replacing any notice still on screen.
    pub fn raise(&mut self, message: impl Into<String>, now: Timestamp) -> &ValidationNotice {
        self.current.insert(ValidationNotice {
            message: message.into(),
            raised_at: now,
            expires_at: now.plus_secs(self.ttl_secs),
        })
    }

    /// Returns the notice visible at `now`, if any.
    pub fn visible(&self, now: &Timestamp) -> Option<&ValidationNotice> {
        self.current.as_ref().filter(|n| n.is_visible_at(now))
    }

    /// Drops the current notice if it has expired, returning it.
    pub fn expire(&mut self, now: &Timestamp) -> Option<ValidationNotice> {
        match &self.current {
            Some(notice) if !notice.is_visible_at(now) => self.current.take(),
            _ => None,
        }
    }

    /// Removes the current notice regardless of its age.
    pub fn clear(&mut self) -> Option<ValidationNotice> {
        self.current.take()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL_SECS)
    }
}
