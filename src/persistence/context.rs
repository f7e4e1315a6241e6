//! A cancellation and deadline token that callers thread through every
//! store call.
//!
//! The store accepts a [`Context`] on each operation but never looks at it.
//! Every call runs to completion, even past a deadline or after `cancel()`.
//! Services built on top of the store are free to check it themselves.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn background() -> Context {
        //! A context that never expires and is never cancelled, unless
        //! someone calls [`Context::cancel`] on it.

        Context::default()
    }

    pub fn with_deadline(&self, deadline: Instant) -> Context {
        //! Derive a child context that shares the cancellation flag of the
        //! parent and carries the earlier of the two deadlines.

        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Context {
            deadline: Some(deadline),
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn with_timeout(&self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Context;

    #[test]
    fn background_is_live() {
        let ctx = Context::background();

        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn cancel_reaches_children() {
        let parent = Context::background();
        let child = parent.with_timeout(Duration::from_secs(60));

        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[test]
    fn child_keeps_the_earlier_deadline() {
        let soon = Instant::now() + Duration::from_secs(1);
        let later = soon + Duration::from_secs(60);

        let parent = Context::background().with_deadline(soon);
        let child = parent.with_deadline(later);
        assert_eq!(child.deadline(), Some(soon));
    }

    #[test]
    fn expired_deadline_counts_as_cancelled() {
        let ctx = Context::background().with_deadline(Instant::now());

        assert!(ctx.is_cancelled());
    }
}
