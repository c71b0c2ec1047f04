//! Tween instances
//!
//! One tween bound to one widget: a time budget (delay then duration), an
//! easing selection, one channel per animatable property, and the lifecycle
//! callbacks. The scheduler owns every instance and drives it one tick at a
//! time; callbacks are taken out of the instance and invoked by the scheduler
//! so they can reach back into it.

use std::fmt;

use swish_core::{Animatable, Color, Vec2, WeakTarget, WidgetRef};

use crate::channel::{PropertyChannel, VisibilityChannel};
use crate::easing::{ease, Easing};
use crate::scheduler::TweenScheduler;

/// Fired once, on the first tick after the delay has elapsed
pub type StartCallback = Box<dyn FnOnce(&mut TweenScheduler, &WeakTarget)>;

/// Fired on every ramping tick with the eased alpha
pub type UpdateCallback = Box<dyn FnMut(&mut TweenScheduler, &WeakTarget, f32)>;

/// Fired once, after the instance has left the scheduler
pub type CompleteCallback = Box<dyn FnOnce(&mut TweenScheduler, &WeakTarget)>;

/// Lifecycle phase of a tween instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenState {
    /// Waiting out its delay
    Delayed,
    /// Advancing through its duration
    Ramping,
    /// Finished or abandoned; retired on the tick that set it
    Complete,
}

/// Outcome of the bookkeeping half of a tick
pub(crate) enum Step {
    /// Ready to retire
    Finished,
    /// Still in its delay
    Waiting,
    /// Ramping; `fire_start` is set on the first ramping tick only
    Ready { fire_start: bool },
}

/// Runtime state of one tween
pub struct TweenInstance {
    target: WeakTarget,
    duration: f32,
    delay: f32,
    elapsed: f32,
    easing: Easing,
    easing_param: Option<f32>,

    translation: PropertyChannel<Vec2>,
    scale: PropertyChannel<Vec2>,
    rotation: PropertyChannel<f32>,
    color: PropertyChannel<Color>,
    opacity: PropertyChannel<f32>,
    visibility: VisibilityChannel,
    canvas_position: PropertyChannel<Vec2>,

    state: TweenState,
    begun: bool,
    started: bool,

    pub(crate) on_start: Option<StartCallback>,
    pub(crate) on_update: Option<UpdateCallback>,
    pub(crate) on_complete: Option<CompleteCallback>,
}

impl TweenInstance {
    /// Create an instance; negative durations and delays count as zero
    pub(crate) fn new(target: WeakTarget, duration: f32, delay: f32) -> Self {
        let duration = duration.max(0.0);
        let delay = delay.max(0.0);

        Self {
            target,
            duration,
            delay,
            elapsed: 0.0,
            easing: Easing::Linear,
            easing_param: None,
            translation: PropertyChannel::new(Vec2::ZERO),
            scale: PropertyChannel::new(Vec2::ONE),
            rotation: PropertyChannel::new(0.0),
            color: PropertyChannel::new(Color::WHITE),
            opacity: PropertyChannel::new(1.0),
            visibility: VisibilityChannel::default(),
            canvas_position: PropertyChannel::new(Vec2::ZERO),
            state: if delay > 0.0 {
                TweenState::Delayed
            } else {
                TweenState::Ramping
            },
            begun: false,
            started: false,
            on_start: None,
            on_update: None,
            on_complete: None,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub(crate) fn translation_mut(&mut self) -> &mut PropertyChannel<Vec2> {
        &mut self.translation
    }

    pub(crate) fn scale_mut(&mut self) -> &mut PropertyChannel<Vec2> {
        &mut self.scale
    }

    pub(crate) fn rotation_mut(&mut self) -> &mut PropertyChannel<f32> {
        &mut self.rotation
    }

    pub(crate) fn color_mut(&mut self) -> &mut PropertyChannel<Color> {
        &mut self.color
    }

    pub(crate) fn opacity_mut(&mut self) -> &mut PropertyChannel<f32> {
        &mut self.opacity
    }

    pub(crate) fn visibility_mut(&mut self) -> &mut VisibilityChannel {
        &mut self.visibility
    }

    pub(crate) fn canvas_position_mut(&mut self) -> &mut PropertyChannel<Vec2> {
        &mut self.canvas_position
    }

    pub(crate) fn set_easing(&mut self, easing: Easing, param: Option<f32>) {
        self.easing = easing;
        self.easing_param = param;
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Validate the target, run the one-time begin, and consume delay
    pub(crate) fn prepare(&mut self, dt: f32) -> Step {
        if self.state == TweenState::Complete {
            return Step::Finished;
        }

        let Some(widget) = self.target.upgrade() else {
            if self.begun {
                tracing::debug!("Tween target dropped mid-tween, completing");
            } else {
                tracing::warn!("Tween activated against an invalid target");
            }
            self.state = TweenState::Complete;
            return Step::Finished;
        };

        if !self.begun {
            self.begin(&widget);
        }

        // Leftover delay time is dropped rather than carried into the ramp
        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay <= 0.0 {
                self.state = TweenState::Ramping;
            }
            return Step::Waiting;
        }

        self.state = TweenState::Ramping;
        let fire_start = !self.started;
        self.started = true;
        Step::Ready { fire_start }
    }

    /// Advance the clock, apply the eased values, and return the eased alpha
    ///
    /// The tween only completes once its end values have actually been
    /// written; a skipped apply keeps it ramping so the next tick retries.
    pub(crate) fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);

        let alpha = ease(self.easing, self.elapsed, self.duration, self.easing_param);

        match self.target.upgrade() {
            Some(widget) => {
                if self.apply(&widget, alpha) && self.elapsed >= self.duration {
                    self.state = TweenState::Complete;
                }
            }
            None => {
                tracing::debug!("Tween target dropped during callbacks, completing");
                self.state = TweenState::Complete;
            }
        }

        alpha
    }

    /// Capture begin values from the live widget and snap it to alpha 0
    fn begin(&mut self, widget: &WidgetRef) {
        {
            let Ok(w) = widget.try_borrow() else {
                tracing::debug!("Tween target is mutably borrowed, begin deferred");
                return;
            };

            let transform = w.render_transform();
            self.translation.on_begin(transform.translation);
            self.scale.on_begin(transform.scale);
            self.rotation.on_begin(transform.angle);
            self.opacity.on_begin(w.render_opacity());
            self.visibility.on_begin(w.visibility());

            if let Some(color) = w.color() {
                self.color.on_begin(color.tint());
            }
            if let Some(slot) = w.layout_slot() {
                self.canvas_position.on_begin(slot.position());
            }
        }

        self.begun = true;
        self.apply(widget, 0.0);
    }

    /// Push every enabled channel's value into the widget
    ///
    /// Returns false when nothing could be written.
    fn apply(&mut self, widget: &WidgetRef, alpha: f32) -> bool {
        if !self.begun {
            return false;
        }
        let Ok(mut w) = widget.try_borrow_mut() else {
            tracing::debug!("Tween target is borrowed elsewhere, skipping apply");
            return false;
        };

        if self.color.is_enabled() {
            self.color.update(alpha);
            if let Some(color) = w.color_mut() {
                color.set_tint(self.color.current());
            }
        }

        if self.opacity.is_enabled() {
            self.opacity.update(alpha);
            w.set_render_opacity(self.opacity.current());
        }

        if self.visibility.is_enabled() && self.visibility.update(alpha) {
            w.set_visibility(self.visibility.current());
        }

        // Translation, scale and rotation share one transform: read once, write once
        let mut transform = w.render_transform();
        let mut transform_dirty = false;

        if self.translation.is_enabled() {
            self.translation.update(alpha);
            transform.translation = self.translation.current();
            transform_dirty = true;
        }
        if self.scale.is_enabled() {
            self.scale.update(alpha);
            transform.scale = self.scale.current();
            transform_dirty = true;
        }
        if self.rotation.is_enabled() && self.rotation.update(alpha) {
            transform.angle = self.rotation.current();
            transform_dirty = true;
        }

        if self.canvas_position.is_enabled() && self.canvas_position.update(alpha) {
            if let Some(slot) = w.layout_slot_mut() {
                slot.set_position(self.canvas_position.current());
            }
        }

        if transform_dirty {
            w.set_render_transform(transform);
        }
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn target(&self) -> &WeakTarget {
        &self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Remaining delay; zero or below once ramping
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Time spent ramping, never above `duration`
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Linear progress through the duration in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            self.elapsed / self.duration
        } else if self.state == TweenState::Complete {
            1.0
        } else {
            0.0
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn easing_param(&self) -> Option<f32> {
        self.easing_param
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TweenState::Complete
    }

    /// Whether the first ramping tick has happened
    pub fn has_started(&self) -> bool {
        self.started
    }
}

impl fmt::Debug for TweenInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenInstance")
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .field("easing", &self.easing)
            .field("state", &self.state)
            .field("started", &self.started)
            .field("has_on_start", &self.on_start.is_some())
            .field("has_on_update", &self.on_update.is_some())
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Interpolate;
    use std::cell::RefCell;
    use std::rc::Rc;
    use swish_core::{CanvasSlot, Image, Slot, Visibility, Widget};

    fn ready(instance: &mut TweenInstance, dt: f32) -> f32 {
        match instance.prepare(dt) {
            Step::Ready { .. } => instance.advance(dt),
            _ => panic!("instance should be ramping"),
        }
    }

    #[test]
    fn test_negative_budget_is_clamped() {
        let instance = TweenInstance::new(WeakTarget::dangling(), -1.0, -2.0);
        assert_eq!(instance.duration(), 0.0);
        assert_eq!(instance.delay(), 0.0);
        assert_eq!(instance.state(), TweenState::Ramping);
    }

    #[test]
    fn test_dead_target_finishes_without_begin() {
        let mut instance = TweenInstance::new(WeakTarget::dangling(), 1.0, 0.0);
        assert!(matches!(instance.prepare(0.1), Step::Finished));
        assert!(instance.is_complete());
        assert!(!instance.has_started());
    }

    #[test]
    fn test_begin_captures_live_values() {
        let widget = Rc::new(RefCell::new(Widget::new("panel").with_opacity(0.8)));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.0);
        instance.opacity_mut().set_target(0.0);

        let alpha = ready(&mut instance, 0.25);
        assert!((alpha - 0.25).abs() < 1e-6);
        assert!((widget.borrow().render_opacity - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_transform_group_shares_one_snapshot() {
        let widget = Rc::new(RefCell::new(Widget::new("panel")));
        widget.borrow_mut().render_transform.shear = Vec2::new(0.5, 0.0);

        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.0);
        instance.translation_mut().set_target(Vec2::new(100.0, 0.0));
        instance.scale_mut().set_target(Vec2::splat(2.0));
        instance.rotation_mut().set_target(90.0);

        ready(&mut instance, 1.0);

        let transform = widget.borrow().render_transform;
        assert_eq!(transform.translation, Vec2::new(100.0, 0.0));
        assert_eq!(transform.scale, Vec2::splat(2.0));
        assert_eq!(transform.angle, 90.0);
        assert_eq!(transform.shear, Vec2::new(0.5, 0.0));
        assert!(instance.is_complete());
    }

    #[test]
    fn test_color_without_capability_is_ignored() {
        let widget = Rc::new(RefCell::new(Widget::new("plain")));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.0);
        instance.color_mut().set_target(Color::RED);

        ready(&mut instance, 1.0);
        assert!(instance.is_complete());
    }

    #[test]
    fn test_color_with_capability() {
        let image = Rc::new(RefCell::new(Image::new("icon")));
        let mut instance = TweenInstance::new(WeakTarget::new(&image), 1.0, 0.0);
        instance.color_mut().set_target(Color::BLACK);

        ready(&mut instance, 0.5);
        assert!(image
            .borrow()
            .color_and_opacity
            .approx_eq(&Color::rgba(0.5, 0.5, 0.5, 1.0), 1e-6));
    }

    #[test]
    fn test_canvas_position_requires_canvas_slot() {
        let canvas = Rc::new(RefCell::new(
            Widget::new("floating").with_slot(Slot::Canvas(CanvasSlot::new(Vec2::ZERO, Vec2::ONE))),
        ));
        let flow = Rc::new(RefCell::new(Widget::new("stacked").with_slot(Slot::Flow)));

        for target in [WeakTarget::new(&canvas), WeakTarget::new(&flow)] {
            let mut instance = TweenInstance::new(target, 1.0, 0.0);
            instance.canvas_position_mut().set_target(Vec2::new(40.0, 20.0));
            ready(&mut instance, 1.0);
        }

        assert_eq!(
            canvas.borrow().layout_slot().map(|slot| slot.position()),
            Some(Vec2::new(40.0, 20.0))
        );
        assert_eq!(flow.borrow().slot, Some(Slot::Flow));
    }

    #[test]
    fn test_delay_consumes_ticks_before_ramping() {
        let widget = Rc::new(RefCell::new(Widget::new("panel")));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.3);
        instance.visibility_mut().set_target(
            Visibility::Hidden,
            crate::channel::VisibilitySwitch::AtEnd,
        );

        assert_eq!(instance.state(), TweenState::Delayed);
        assert!(matches!(instance.prepare(0.2), Step::Waiting));
        assert_eq!(instance.state(), TweenState::Delayed);
        assert!(matches!(instance.prepare(0.2), Step::Waiting));
        assert_eq!(instance.state(), TweenState::Ramping);
        assert_eq!(instance.elapsed(), 0.0);

        assert!(matches!(
            instance.prepare(0.1),
            Step::Ready { fire_start: true }
        ));
        instance.advance(0.1);
        assert!(matches!(
            instance.prepare(0.1),
            Step::Ready { fire_start: false }
        ));
    }

    #[test]
    fn test_busy_target_skips_apply() {
        let widget = Rc::new(RefCell::new(Widget::new("panel")));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.0);
        instance.opacity_mut().set_target(0.0);

        {
            let _guard = widget.borrow_mut();
            assert!(matches!(instance.prepare(0.5), Step::Ready { .. }));
            instance.advance(0.5);
        }

        assert_eq!(widget.borrow().render_opacity, 1.0);
        assert!(!instance.is_complete());

        // Begin is retried once the widget is free again
        assert!(matches!(instance.prepare(0.25), Step::Ready { .. }));
        instance.advance(0.25);
        assert!((widget.borrow().render_opacity - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_busy_final_tick_defers_completion() {
        let widget = Rc::new(RefCell::new(Widget::new("panel")));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 1.0, 0.0);
        instance.opacity_mut().set_target(0.0);
        ready(&mut instance, 0.5);

        {
            let _reader = widget.borrow();
            ready(&mut instance, 0.5);
        }
        assert!(!instance.is_complete());
        assert_eq!(instance.elapsed(), 1.0);
        assert!((widget.borrow().render_opacity - 0.5).abs() < 1e-6);

        ready(&mut instance, 0.0);
        assert!(instance.is_complete());
        assert_eq!(widget.borrow().render_opacity, 0.0);
    }

    #[test]
    fn test_begin_deferred_past_duration() {
        let widget = Rc::new(RefCell::new(Widget::new("panel")));
        let mut instance = TweenInstance::new(WeakTarget::new(&widget), 0.5, 0.0);
        instance.opacity_mut().set_target(0.0);

        {
            let _writer = widget.borrow_mut();
            ready(&mut instance, 1.0);
        }
        assert!(!instance.is_complete());

        ready(&mut instance, 0.1);
        assert!(instance.is_complete());
        assert_eq!(widget.borrow().render_opacity, 0.0);
    }

    #[test]
    fn test_easing_selection() {
        let mut instance = TweenInstance::new(WeakTarget::dangling(), 1.0, 0.0);
        assert_eq!(instance.easing(), Easing::Linear);
        assert_eq!(instance.easing_param(), None);

        instance.set_easing(Easing::OutBack, Some(2.5));
        assert_eq!(instance.easing(), Easing::OutBack);
        assert_eq!(instance.easing_param(), Some(2.5));
    }
}
