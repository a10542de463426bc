//! Last-request-wins guard for asynchronous loads.
//!
//! Every load takes a [`RequestToken`] before it starts. When the response
//! arrives it is applied only if [`RequestSequencer::is_current`] still holds,
//! so a slow response can never overwrite the result of a newer request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Cheap to clone; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token newer than every token issued before.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Runs `apply` only when `token` is still the latest one.
    /// Returns whether the value was applied.
    pub fn apply_if_current<T>(&self, token: RequestToken, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(token) {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(a.value() + 1, b.value());
    }

    #[test]
    fn test_only_latest_is_current() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let seq = RequestSequencer::new();
        let mut shown = String::new();

        let slow = seq.issue();
        let fast = seq.issue();

        // fast response lands first, slow one arrives afterwards
        assert!(seq.apply_if_current(fast, "fresh", |v| shown = v.to_string()));
        assert!(!seq.apply_if_current(slow, "stale", |v| shown = v.to_string()));
        assert_eq!(shown, "fresh");
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let token = seq.issue();
        other.issue();
        assert!(!seq.is_current(token));
    }
}
