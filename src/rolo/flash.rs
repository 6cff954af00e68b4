//! Transient status messages.
//!
//! A [`Flash`] is the single message shown after an operation ("Contact added
//! successfully!", or a validation error). It expires a fixed time after it was
//! posted; whoever drives the UI calls [`crate::session::ContactBook::tick`] to
//! drop it.

use crate::commands::{CmdMessage, MessageLevel};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TTL_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub message: CmdMessage,
    pub posted_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Flash {
    pub fn new(message: CmdMessage, posted_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message,
            posted_at,
            ttl,
        }
    }

    pub fn level(&self) -> MessageLevel {
        self.message.level
    }

    pub fn text(&self) -> &str {
        &self.message.content
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.posted_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let t0 = Utc::now();
        let flash = Flash::new(CmdMessage::success("ok"), t0, Duration::seconds(3));
        assert!(!flash.is_expired(t0));
        assert!(!flash.is_expired(t0 + Duration::milliseconds(2999)));
        assert!(flash.is_expired(t0 + Duration::seconds(3)));
    }

    #[test]
    fn huge_ttl_never_expires() {
        let t0 = Utc::now();
        let flash = Flash::new(CmdMessage::info("sticky"), t0, Duration::MAX);
        assert!(!flash.is_expired(t0 + Duration::days(365 * 100)));
    }
}
