//! Swish Core
//!
//! The host object model that the Swish tween engine animates:
//!
//! - **Geometry**: `Vec2`, `Color` and the per-widget `WidgetTransform`
//! - **Capabilities**: the `Animatable` trait every target implements, plus the
//!   optional `ColorCapability` and `LayoutSlot` sub-capabilities
//! - **Weak Targets**: `WeakTarget`, a non-owning, validity-checkable reference
//!   to a widget
//! - **Widgets**: a handful of retained widget kinds (`Widget`, `Image`,
//!   `Border`, `UserWidget`) implementing the capabilities
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use swish_core::{Animatable, Image, WeakTarget};
//!
//! let image = Rc::new(RefCell::new(Image::new("logo")));
//! let target = WeakTarget::new(&image);
//!
//! assert!(target.is_valid());
//! assert!(image.borrow().color().is_some());
//!
//! drop(image);
//! assert!(!target.is_valid());
//! ```

pub mod geometry;
pub mod widget;
pub mod widgets;

pub use geometry::{Color, Vec2, Visibility, WidgetTransform};
pub use widget::{Animatable, ColorCapability, LayoutSlot, WeakTarget, WidgetRef};
pub use widgets::{Border, CanvasSlot, Image, Slot, UserWidget, Widget};
