//! Chained tween configuration

use swish_core::{Color, Vec2, Visibility, WeakTarget};

use crate::channel::VisibilitySwitch;
use crate::easing::Easing;
use crate::instance::TweenInstance;
use crate::scheduler::{TweenId, TweenScheduler};

/// Configures a pending tween
///
/// Returned by [`TweenScheduler::create`] and [`TweenScheduler::configure`].
/// Setting a property enables its channel and records the end value; the
/// begin value is read from the live widget when the tween activates. The
/// builder borrows the scheduler, so configuration always finishes before
/// the next tick.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use swish_animation::{Easing, TweenScheduler};
/// use swish_core::{Vec2, Widget};
///
/// let mut scheduler = TweenScheduler::default();
/// scheduler.startup();
///
/// let panel = Rc::new(RefCell::new(Widget::new("panel")));
/// let id = scheduler
///     .create(&panel, 0.4, 0.0, false)
///     .unwrap()
///     .translation(Vec2::new(0.0, -20.0))
///     .opacity(0.0)
///     .easing(Easing::OutCubic)
///     .id();
///
/// assert_eq!(scheduler.pending_count(), 1);
/// assert!(scheduler.state(id).is_some());
/// ```
pub struct TweenBuilder<'a> {
    id: TweenId,
    instance: &'a mut TweenInstance,
}

impl<'a> TweenBuilder<'a> {
    pub(crate) fn new(id: TweenId, instance: &'a mut TweenInstance) -> Self {
        Self { id, instance }
    }

    /// Handle to the tween being configured
    pub fn id(&self) -> TweenId {
        self.id
    }

    pub fn translation(self, end: Vec2) -> Self {
        self.instance.translation_mut().set_target(end);
        self
    }

    pub fn scale(self, end: Vec2) -> Self {
        self.instance.scale_mut().set_target(end);
        self
    }

    /// Angle in degrees
    pub fn rotation(self, end: f32) -> Self {
        self.instance.rotation_mut().set_target(end);
        self
    }

    /// Tint, applied only to widgets with a color capability
    pub fn color(self, end: Color) -> Self {
        self.instance.color_mut().set_target(end);
        self
    }

    pub fn opacity(self, end: f32) -> Self {
        self.instance.opacity_mut().set_target(end);
        self
    }

    pub fn visibility(self, end: Visibility, switch: VisibilitySwitch) -> Self {
        self.instance.visibility_mut().set_target(end, switch);
        self
    }

    /// Position in a canvas slot; ignored for widgets in any other slot
    pub fn canvas_position(self, end: Vec2) -> Self {
        self.instance.canvas_position_mut().set_target(end);
        self
    }

    pub fn easing(self, easing: Easing) -> Self {
        self.instance.set_easing(easing, None);
        self
    }

    /// Easing with an explicit shape parameter (exponent, overshoot or period)
    pub fn easing_with_param(self, easing: Easing, param: f32) -> Self {
        self.instance.set_easing(easing, Some(param));
        self
    }

    pub fn on_start<F>(self, callback: F) -> Self
    where
        F: FnOnce(&mut TweenScheduler, &WeakTarget) + 'static,
    {
        self.instance.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_update<F>(self, callback: F) -> Self
    where
        F: FnMut(&mut TweenScheduler, &WeakTarget, f32) + 'static,
    {
        self.instance.on_update = Some(Box::new(callback));
        self
    }

    /// Fires exactly once when the tween leaves the scheduler, unless it is
    /// cancelled with `clear`
    pub fn on_complete<F>(self, callback: F) -> Self
    where
        F: FnOnce(&mut TweenScheduler, &WeakTarget) + 'static,
    {
        self.instance.on_complete = Some(Box::new(callback));
        self
    }
}
