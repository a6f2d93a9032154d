/// Ignore input for a while after a guess was processed.
///
/// Compares clock readings instead of burning cycles, so the frame loop
/// keeps presenting while the window is open.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
    window_ms: u64,
    armed_at: Option<u64>,
}

impl Debounce {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            armed_at: None,
        }
    }

    /// Open the window at `now`.
    pub fn arm(&mut self, now: u64) {
        self.armed_at = Some(now);
    }

    pub fn reset(&mut self) {
        self.armed_at = None;
    }

    /// True once the window has passed (or was never opened).
    pub fn is_settled(&self, now: u64) -> bool {
        match self.armed_at {
            None => true,
            Some(at) => now.saturating_sub(at) >= self.window_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_until_armed() {
        let debounce = Debounce::new(200);
        assert!(debounce.is_settled(0));
    }

    #[test]
    fn test_window() {
        let mut debounce = Debounce::new(200);
        debounce.arm(1_000);
        assert!(!debounce.is_settled(1_000));
        assert!(!debounce.is_settled(1_199));
        assert!(debounce.is_settled(1_200));
        debounce.arm(1_250);
        assert!(!debounce.is_settled(1_300));
        debounce.reset();
        assert!(debounce.is_settled(1_300));
    }

    #[test]
    fn test_zero_window_never_blocks() {
        let mut debounce = Debounce::new(0);
        debounce.arm(5);
        assert!(debounce.is_settled(5));
    }
}
