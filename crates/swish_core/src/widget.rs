//! Animatable capability traits and weak widget references
//!
//! A tween never owns the widget it animates. It holds a [`WeakTarget`] and
//! talks to the widget through the [`Animatable`] trait. Optional
//! sub-capabilities (a tintable color, a positionable layout slot) are exposed
//! through accessor methods that return `None` when the widget kind lacks them,
//! so callers probe for a capability instead of downcasting.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::geometry::{Color, Vec2, Visibility, WidgetTransform};

/// A widget kind that carries a tintable color
pub trait ColorCapability {
    fn tint(&self) -> Color;

    fn set_tint(&mut self, tint: Color);
}

/// The layout slot a widget sits in, when that slot supports explicit positioning
pub trait LayoutSlot {
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);
}

/// Render state every tweenable widget exposes
///
/// # Example
///
/// ```rust
/// use swish_core::{Animatable, Visibility, WidgetTransform};
///
/// struct Dot {
///     transform: WidgetTransform,
///     opacity: f32,
///     visibility: Visibility,
/// }
///
/// impl Animatable for Dot {
///     fn render_transform(&self) -> WidgetTransform { self.transform }
///     fn set_render_transform(&mut self, t: WidgetTransform) { self.transform = t; }
///     fn render_opacity(&self) -> f32 { self.opacity }
///     fn set_render_opacity(&mut self, o: f32) { self.opacity = o; }
///     fn visibility(&self) -> Visibility { self.visibility }
///     fn set_visibility(&mut self, v: Visibility) { self.visibility = v; }
/// }
/// ```
pub trait Animatable: 'static {
    fn render_transform(&self) -> WidgetTransform;

    fn set_render_transform(&mut self, transform: WidgetTransform);

    /// Opacity in `[0, 1]`
    fn render_opacity(&self) -> f32;

    fn set_render_opacity(&mut self, opacity: f32);

    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    /// The widget's color capability, if its kind has one
    fn color(&self) -> Option<&dyn ColorCapability> {
        None
    }

    fn color_mut(&mut self) -> Option<&mut dyn ColorCapability> {
        None
    }

    /// The widget's layout slot, if it sits in one that supports positioning
    fn layout_slot(&self) -> Option<&dyn LayoutSlot> {
        None
    }

    fn layout_slot_mut(&mut self) -> Option<&mut dyn LayoutSlot> {
        None
    }
}

/// Shared, type-erased widget
pub type WidgetRef = Rc<RefCell<dyn Animatable>>;

/// Non-owning reference to a widget
///
/// Equality is identity: two `WeakTarget`s are equal when they point at the
/// same widget allocation, whether or not it is still alive.
#[derive(Clone)]
pub struct WeakTarget {
    inner: Weak<RefCell<dyn Animatable>>,
}

impl WeakTarget {
    /// Create a weak reference to a concrete widget
    pub fn new<W: Animatable>(widget: &Rc<RefCell<W>>) -> Self {
        let erased: WidgetRef = widget.clone();
        Self::from_ref(&erased)
    }

    /// Create a weak reference to an already type-erased widget
    pub fn from_ref(widget: &WidgetRef) -> Self {
        Self {
            inner: Rc::downgrade(widget),
        }
    }

    /// A reference that never points at a live widget
    pub fn dangling() -> Self {
        let inner: Weak<RefCell<crate::widgets::Widget>> = Weak::new();
        Self { inner }
    }

    /// Whether the widget is still alive
    pub fn is_valid(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Get a strong reference if the widget is still alive
    pub fn upgrade(&self) -> Option<WidgetRef> {
        self.inner.upgrade()
    }

    /// Whether this reference points at the given widget
    pub fn refers_to<W: Animatable>(&self, widget: &Rc<RefCell<W>>) -> bool {
        self.addr() == Rc::as_ptr(widget) as *const ()
    }

    fn addr(&self) -> *const () {
        self.inner.as_ptr() as *const ()
    }
}

impl PartialEq for WeakTarget {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for WeakTarget {}

impl fmt::Debug for WeakTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakTarget")
            .field("addr", &self.addr())
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl<W: Animatable> From<&Rc<RefCell<W>>> for WeakTarget {
    fn from(widget: &Rc<RefCell<W>>) -> Self {
        Self::new(widget)
    }
}

impl From<&WeakTarget> for WeakTarget {
    fn from(target: &WeakTarget) -> Self {
        target.clone()
    }
}
