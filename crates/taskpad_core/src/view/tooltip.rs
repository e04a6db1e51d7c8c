//! Debounced tooltip state for the new-todo input.
//!
//! The UI hides the tooltip on every keystroke and re-arms a one second
//! timer. The timer is an explicit deadline here, so event-loop drivers and
//! tests advance it with injected instants instead of sleeping.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the tooltip becoming visible.
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(1000);

/// Debounce state for the save-hint tooltip.
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipTimer {
    visible: bool,
    show_at: Option<Instant>,
}

impl TooltipTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides the tooltip and re-arms the deadline when the input holds
    /// user-entered text.
    ///
    /// An empty value or the bare placeholder never arms the timer.
    pub fn on_input(&mut self, value: &str, placeholder: &str, now: Instant) {
        self.visible = false;
        self.show_at = None;
        if value.is_empty() || value == placeholder {
            return;
        }
        self.show_at = Some(now + TOOLTIP_DELAY);
    }

    /// Hides the tooltip and drops any pending deadline.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.show_at = None;
    }

    /// Advances the debounce clock; returns whether visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.show_at {
            Some(deadline) if now >= deadline => {
                self.visible = true;
                self.show_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_armed(&self) -> bool {
        self.show_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{TooltipTimer, TOOLTIP_DELAY};
    use std::time::{Duration, Instant};

    const PLACEHOLDER: &str = "What needs to be done?";

    #[test]
    fn input_arms_deadline_and_tick_shows_after_delay() {
        let mut tooltip = TooltipTimer::new();
        let start = Instant::now();

        tooltip.on_input("buy milk", PLACEHOLDER, start);
        assert!(tooltip.is_armed());
        assert!(!tooltip.is_visible());

        assert!(!tooltip.tick(start + Duration::from_millis(500)));
        assert!(!tooltip.is_visible());

        assert!(tooltip.tick(start + TOOLTIP_DELAY));
        assert!(tooltip.is_visible());
        assert!(!tooltip.is_armed());
    }

    #[test]
    fn empty_or_placeholder_input_never_arms() {
        let mut tooltip = TooltipTimer::new();
        let start = Instant::now();

        tooltip.on_input("", PLACEHOLDER, start);
        assert!(!tooltip.is_armed());

        tooltip.on_input(PLACEHOLDER, PLACEHOLDER, start);
        assert!(!tooltip.is_armed());
    }

    #[test]
    fn each_keystroke_resets_the_deadline() {
        let mut tooltip = TooltipTimer::new();
        let start = Instant::now();

        tooltip.on_input("b", PLACEHOLDER, start);
        tooltip.on_input("bu", PLACEHOLDER, start + Duration::from_millis(800));

        // The first deadline has passed, the rearmed one has not.
        assert!(!tooltip.tick(start + TOOLTIP_DELAY));
        assert!(tooltip.tick(start + Duration::from_millis(800) + TOOLTIP_DELAY));
    }

    #[test]
    fn cancel_hides_and_disarms() {
        let mut tooltip = TooltipTimer::new();
        let start = Instant::now();

        tooltip.on_input("buy milk", PLACEHOLDER, start);
        tooltip.tick(start + TOOLTIP_DELAY);
        assert!(tooltip.is_visible());

        tooltip.cancel();
        assert!(!tooltip.is_visible());
        assert!(!tooltip.is_armed());
    }
}
