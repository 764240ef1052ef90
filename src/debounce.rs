use std::time::{Duration, Instant};

/// Delay between the last query edit and the lookup it triggers.
pub const QUIESCENCE_WINDOW: Duration = Duration::from_millis(500);

/// Collapses bursts of query edits into a single delayed trigger.
///
/// Single-shot: each [`note_change`](Self::note_change) restarts the window,
/// so only the most recent edit survives a burst. The host loop drives
/// [`poll`](Self::poll), which fires at most once per armed window.
#[derive(Debug)]
pub(crate) struct DebounceController {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceController {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Restart the quiescence window from `now`.
    pub(crate) fn note_change(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Fire once the window has elapsed, then disarm.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn does_not_fire_before_the_window_elapses() {
        let start = Instant::now();
        let mut debounce = DebounceController::new(millis(500));

        debounce.note_change(start);
        assert!(!debounce.poll(start + millis(499)));
        assert!(debounce.is_armed());
    }

    #[test]
    fn fires_exactly_once_after_the_window() {
        let start = Instant::now();
        let mut debounce = DebounceController::new(millis(500));

        debounce.note_change(start);
        assert!(debounce.poll(start + millis(500)));
        assert!(!debounce.poll(start + millis(501)));
        assert!(!debounce.is_armed());
    }

    #[test]
    fn rapid_changes_collapse_into_one_trigger() {
        let start = Instant::now();
        let mut debounce = DebounceController::new(millis(500));

        debounce.note_change(start);
        debounce.note_change(start + millis(100));
        debounce.note_change(start + millis(200));

        // Only the window armed by the last change counts.
        assert!(!debounce.poll(start + millis(600)));
        assert!(debounce.poll(start + millis(700)));
        assert!(!debounce.poll(start + millis(1_000)));
    }

    #[test]
    fn unarmed_controller_never_fires() {
        let mut debounce = DebounceController::new(millis(500));
        assert!(!debounce.poll(Instant::now() + millis(10_000)));
    }
}
