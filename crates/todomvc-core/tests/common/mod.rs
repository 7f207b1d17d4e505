use todomvc_core::Clock;

/// Clock pinned to one instant, so tests get predictable ids
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
