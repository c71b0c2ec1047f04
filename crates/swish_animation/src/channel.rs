//! Property channels
//!
//! A channel is the interpolation unit for one animatable property. It holds
//! the begin and end values and the last computed value, and reports whether
//! an update changed that value. Channels never touch the widget; the owning
//! instance reads `current()` and decides how to write it.

use serde::{Deserialize, Serialize};
use swish_core::Visibility;

use crate::values::Interpolate;

/// Interpolating channel for a continuous value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PropertyChannel<T: Interpolate> {
    enabled: bool,
    begun: bool,
    begin: T,
    end: T,
    current: T,
}

impl<T: Interpolate> PropertyChannel<T> {
    /// Create a disabled channel
    pub fn new(initial: T) -> Self {
        Self {
            enabled: false,
            begun: false,
            begin: initial,
            end: initial,
            current: initial,
        }
    }

    /// Enable the channel and record its end value
    pub fn set_target(&mut self, end: T) {
        self.enabled = true;
        self.end = end;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Capture the live starting value
    pub fn on_begin(&mut self, live: T) {
        self.begin = live;
        self.current = live;
        self.begun = true;
    }

    /// Recompute the current value for an eased alpha
    ///
    /// Returns whether the value changed. A channel that is disabled or has
    /// not captured its begin value never changes.
    pub fn update(&mut self, alpha: f32) -> bool {
        if !self.enabled || !self.begun {
            return false;
        }
        let previous = self.current;
        self.current = self.begin.lerp(&self.end, alpha);
        self.current != previous
    }

    pub fn begin(&self) -> T {
        self.begin
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn current(&self) -> T {
        self.current
    }
}

/// When a visibility channel switches to its end value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilitySwitch {
    /// Keep the begin value until the tween finishes (fade-out then hide)
    #[default]
    AtEnd,
    /// Switch as soon as the tween makes progress (show then fade-in)
    AtStart,
}

/// Snapping channel for the enumerated visibility state
///
/// Visibility has no in-between values. Intermediate alphas leave the value
/// alone so the widget only sees a write when it crosses a boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityChannel {
    enabled: bool,
    begun: bool,
    switch: VisibilitySwitch,
    begin: Visibility,
    end: Visibility,
    current: Visibility,
}

impl VisibilityChannel {
    pub fn set_target(&mut self, end: Visibility, switch: VisibilitySwitch) {
        self.enabled = true;
        self.end = end;
        self.switch = switch;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_begin(&mut self, live: Visibility) {
        self.begin = live;
        self.current = live;
        self.begun = true;
    }

    /// Snap to the begin or end value at the switch boundary
    pub fn update(&mut self, alpha: f32) -> bool {
        if !self.enabled || !self.begun {
            return false;
        }

        let next = match self.switch {
            VisibilitySwitch::AtEnd if alpha >= 1.0 => self.end,
            VisibilitySwitch::AtEnd if alpha <= 0.0 => self.begin,
            VisibilitySwitch::AtEnd => return false,
            VisibilitySwitch::AtStart if alpha > 0.0 => self.end,
            VisibilitySwitch::AtStart => self.begin,
        };

        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn switch(&self) -> VisibilitySwitch {
        self.switch
    }

    pub fn current(&self) -> Visibility {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swish_core::{Color, Vec2};

    #[test]
    fn test_disabled_channel_never_changes() {
        let mut channel = PropertyChannel::new(1.0_f32);
        channel.on_begin(1.0);

        assert!(!channel.update(0.5));
        assert_eq!(channel.current(), 1.0);
    }

    #[test]
    fn test_channel_waits_for_begin() {
        let mut channel = PropertyChannel::new(0.0_f32);
        channel.set_target(10.0);

        assert!(channel.is_enabled());
        assert!(!channel.update(0.5));

        channel.on_begin(2.0);
        assert!(channel.update(0.5));
        assert!((channel.current() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_channel_reports_unchanged_value() {
        let mut channel = PropertyChannel::new(Vec2::ZERO);
        channel.set_target(Vec2::new(10.0, 0.0));
        channel.on_begin(Vec2::ZERO);

        assert!(channel.update(1.0));
        assert!(!channel.update(1.0));
        assert_eq!(channel.current(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_color_channel() {
        let mut channel = PropertyChannel::new(Color::WHITE);
        channel.set_target(Color::BLACK);
        channel.on_begin(Color::WHITE);
        channel.update(0.5);

        assert!(channel
            .current()
            .approx_eq(&Color::rgba(0.5, 0.5, 0.5, 1.0), 1e-6));
        assert_eq!(channel.begin(), Color::WHITE);
        assert_eq!(channel.end(), Color::BLACK);
    }

    #[test]
    fn test_visibility_switches_at_end() {
        let mut channel = VisibilityChannel::default();
        channel.set_target(Visibility::Visible, VisibilitySwitch::AtEnd);
        channel.on_begin(Visibility::Hidden);
        assert_eq!(channel.switch(), VisibilitySwitch::AtEnd);

        assert!(!channel.update(0.0));
        assert!(!channel.update(0.3));
        assert!(!channel.update(0.99));
        assert_eq!(channel.current(), Visibility::Hidden);

        assert!(channel.update(1.0));
        assert_eq!(channel.current(), Visibility::Visible);
        assert!(!channel.update(1.0));
    }

    #[test]
    fn test_visibility_switches_at_start() {
        let mut channel = VisibilityChannel::default();
        channel.set_target(Visibility::Visible, VisibilitySwitch::AtStart);
        channel.on_begin(Visibility::Collapsed);
        assert_eq!(channel.switch(), VisibilitySwitch::AtStart);

        assert!(!channel.update(0.0));
        assert!(channel.update(0.01));
        assert_eq!(channel.current(), Visibility::Visible);
        assert!(!channel.update(0.5));
        assert!(!channel.update(1.0));
    }

    #[test]
    fn test_visibility_same_begin_and_end() {
        let mut channel = VisibilityChannel::default();
        channel.set_target(Visibility::Visible, VisibilitySwitch::AtEnd);
        channel.on_begin(Visibility::Visible);

        assert!(!channel.update(1.0));
    }
}
