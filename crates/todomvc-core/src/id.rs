//! Fresh Id Generation
//!
//! Ids are seeded from wall-clock milliseconds but forced strictly upward,
//! so additions inside one clock tick still get distinct ids.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::item::{TodoId, TodoItem};

/// Millisecond time source
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock (uses `Date.now()` under wasm via chrono's `wasmbind`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Issues ids greater than every id seen so far
pub struct IdSequence {
    clock: Box<dyn Clock>,
    /// Largest id issued, `i64::MIN` before the first one
    last: AtomicI64,
}

impl IdSequence {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: AtomicI64::new(i64::MIN),
        }
    }

    /// Next id, distinct from everything in `existing` and from all previous ids
    pub fn next(&self, existing: &[TodoItem]) -> TodoId {
        let floor = existing
            .iter()
            .map(|item| item.id.get())
            .fold(self.last.load(Ordering::Relaxed), i64::max);
        let now = self.clock.now_millis();
        let raw = if now <= floor { floor + 1 } else { now };
        self.last.store(raw, Ordering::Relaxed);
        TodoId::new(raw)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

/// Clock pinned to one instant
#[cfg(test)]
pub(crate) struct FixedClock(pub i64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_when_ahead() {
        let ids = IdSequence::new(FixedClock(1_000));
        assert_eq!(ids.next(&[]), TodoId::new(1_000));
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let ids = IdSequence::new(FixedClock(1_000));
        let a = ids.next(&[]);
        let b = ids.next(&[]);
        let c = ids.next(&[]);
        assert_eq!(a, TodoId::new(1_000));
        assert_eq!(b, TodoId::new(1_001));
        assert_eq!(c, TodoId::new(1_002));
    }

    #[test]
    fn test_skips_past_existing_items() {
        let ids = IdSequence::new(FixedClock(10));
        let existing = vec![TodoItem::new(TodoId::new(50), "later")];
        assert_eq!(ids.next(&existing), TodoId::new(51));
    }

    #[test]
    fn test_system_clock_is_positive() {
        assert!(SystemClock.now_millis() > 0);
    }
}
