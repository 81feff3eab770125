// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cooperative cancellation and deadline checking for search strategies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A cooperative cancel flag plus an optional wall-clock deadline, checked
/// by every search strategy at iteration boundaries. Cloning shares the
/// same underlying flag: cancel the clone, and the original observes it.
#[derive(Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that never cancels and never times out.
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// A token that times out at `deadline`, in addition to being
    /// cancellable.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Signals cancellation. Safe to call from any thread holding a clone.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// True if cancelled explicitly, or if the deadline (if any) has
    /// passed. Strategies call this at iteration boundaries only, never
    /// mid-iteration.
    pub fn is_triggered(&self) -> bool {
        if self.is_explicitly_cancelled() {
            return true;
        }
        self.is_past_deadline()
    }

    /// True iff [`CancelToken::cancel`] was called, independent of any
    /// deadline. Lets a caller distinguish an explicit cancel from a
    /// timeout after [`CancelToken::is_triggered`] returns true.
    pub fn is_explicitly_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// True iff this token has a deadline and it has passed.
    pub fn is_past_deadline(&self) -> bool {
        matches!(self.deadline, Some(d) if Instant::now() >= d)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_token_is_not_triggered() {
        assert!(!CancelToken::new().is_triggered());
    }

    #[test]
    fn cancel_propagates_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_triggered());
    }

    #[test]
    fn past_deadline_is_triggered() {
        let token = CancelToken::with_deadline(Instant::now() - Duration::from_millis(1));
        assert!(token.is_triggered());
    }

    #[test]
    fn future_deadline_is_not_yet_triggered() {
        let token = CancelToken::with_deadline(Instant::now() + Duration::from_secs(60));
        assert!(!token.is_triggered());
    }
}
