//! Caret blinking for the focused contact field.

/// Tick-driven caret visibility.
///
/// The caret stays solid for `wait_ticks` after typing, then alternates
/// every `half_cycle_ticks`.
#[derive(Debug, Clone)]
pub struct CursorBlinkState {
    last_activity_tick: u64,
    is_visible: bool,
    wait_ticks: u64,
    half_cycle_ticks: u64,
}

impl Default for CursorBlinkState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlinkState {
    /// ~500ms solid, then ~250ms phases at 60fps.
    pub fn new() -> Self {
        Self {
            last_activity_tick: 0,
            is_visible: true,
            wait_ticks: 31,
            half_cycle_ticks: 16,
        }
    }

    /// Typing or moving focus keeps the caret solid.
    pub fn reset(&mut self, now: u64) {
        self.last_activity_tick = now;
        self.is_visible = true;
    }

    /// Returns true if visibility flipped.
    pub fn update(&mut self, now: u64) -> bool {
        let idle = now.saturating_sub(self.last_activity_tick);
        let visible = if idle < self.wait_ticks {
            true
        } else {
            let into_blink = idle - self.wait_ticks;
            into_blink % (self.half_cycle_ticks * 2) < self.half_cycle_ticks
        };
        let changed = visible != self.is_visible;
        self.is_visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_then_blinks() {
        let mut blink = CursorBlinkState::new();
        blink.reset(0);
        assert!(!blink.update(30));
        assert!(blink.is_visible());

        // First hidden phase starts after wait + half cycle
        assert!(!blink.update(31 + 15));
        assert!(blink.update(31 + 16));
        assert!(!blink.is_visible());
        assert!(blink.update(31 + 32));
        assert!(blink.is_visible());
    }

    #[test]
    fn test_reset_restores_visibility() {
        let mut blink = CursorBlinkState::new();
        blink.update(31 + 16);
        assert!(!blink.is_visible());
        blink.reset(100);
        assert!(blink.is_visible());
        assert!(!blink.update(110));
    }
}
