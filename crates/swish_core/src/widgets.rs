//! Retained widget kinds
//!
//! Minimal widget state used by hosts (and tests) that don't bring their own
//! widget tree. Each kind implements [`Animatable`]; the color capability is
//! only present on kinds that actually have a tint.

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Vec2, Visibility, WidgetTransform};
use crate::widget::{Animatable, ColorCapability, LayoutSlot};

// ─────────────────────────────────────────────────────────────────────────────
// Layout Slots
// ─────────────────────────────────────────────────────────────────────────────

/// Slot in an absolutely positioned canvas panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSlot {
    pub position: Vec2,
    pub size: Vec2,
    pub z_order: i32,
}

impl CanvasSlot {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            z_order: 0,
        }
    }
}

impl LayoutSlot for CanvasSlot {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

/// The slot a widget occupies in its parent panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    /// Absolutely positioned
    Canvas(CanvasSlot),
    /// Flow layout (stacks, boxes); position is owned by the parent
    Flow,
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Render state shared by every widget kind
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub name: String,
    pub render_transform: WidgetTransform,
    pub render_opacity: f32,
    pub visibility: Visibility,
    pub slot: Option<Slot>,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            render_transform: WidgetTransform::IDENTITY,
            render_opacity: 1.0,
            visibility: Visibility::Visible,
            slot: None,
        }
    }

    /// Place the widget in a slot (builder pattern)
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.render_opacity = opacity;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    fn canvas_slot(&self) -> Option<&CanvasSlot> {
        match &self.slot {
            Some(Slot::Canvas(slot)) => Some(slot),
            _ => None,
        }
    }

    fn canvas_slot_mut(&mut self) -> Option<&mut CanvasSlot> {
        match &mut self.slot {
            Some(Slot::Canvas(slot)) => Some(slot),
            _ => None,
        }
    }
}

/// Forward the shared render state of a widget kind to its `widget` field
macro_rules! forward_render_state {
    () => {
        fn render_transform(&self) -> WidgetTransform {
            self.widget.render_transform()
        }

        fn set_render_transform(&mut self, transform: WidgetTransform) {
            self.widget.set_render_transform(transform);
        }

        fn render_opacity(&self) -> f32 {
            self.widget.render_opacity()
        }

        fn set_render_opacity(&mut self, opacity: f32) {
            self.widget.set_render_opacity(opacity);
        }

        fn visibility(&self) -> Visibility {
            self.widget.visibility()
        }

        fn set_visibility(&mut self, visibility: Visibility) {
            self.widget.set_visibility(visibility);
        }

        fn layout_slot(&self) -> Option<&dyn LayoutSlot> {
            self.widget.layout_slot()
        }

        fn layout_slot_mut(&mut self) -> Option<&mut dyn LayoutSlot> {
            self.widget.layout_slot_mut()
        }
    };
}

impl Animatable for Widget {
    fn render_transform(&self) -> WidgetTransform {
        self.render_transform
    }

    fn set_render_transform(&mut self, transform: WidgetTransform) {
        self.render_transform = transform;
    }

    fn render_opacity(&self) -> f32 {
        self.render_opacity
    }

    fn set_render_opacity(&mut self, opacity: f32) {
        self.render_opacity = opacity;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn layout_slot(&self) -> Option<&dyn LayoutSlot> {
        self.canvas_slot().map(|slot| slot as &dyn LayoutSlot)
    }

    fn layout_slot_mut(&mut self) -> Option<&mut dyn LayoutSlot> {
        self.canvas_slot_mut().map(|slot| slot as &mut dyn LayoutSlot)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tinted Widget Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Image widget; the tint multiplies the brush
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub widget: Widget,
    pub color_and_opacity: Color,
}

impl Image {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            widget: Widget::new(name),
            color_and_opacity: Color::WHITE,
        }
    }
}

impl ColorCapability for Image {
    fn tint(&self) -> Color {
        self.color_and_opacity
    }

    fn set_tint(&mut self, tint: Color) {
        self.color_and_opacity = tint;
    }
}

impl Animatable for Image {
    forward_render_state!();

    fn color(&self) -> Option<&dyn ColorCapability> {
        Some(self)
    }

    fn color_mut(&mut self) -> Option<&mut dyn ColorCapability> {
        Some(self)
    }
}

/// Border widget; the tint applies to its content
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub widget: Widget,
    pub content_color_and_opacity: Color,
}

impl Border {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            widget: Widget::new(name),
            content_color_and_opacity: Color::WHITE,
        }
    }
}

impl ColorCapability for Border {
    fn tint(&self) -> Color {
        self.content_color_and_opacity
    }

    fn set_tint(&mut self, tint: Color) {
        self.content_color_and_opacity = tint;
    }
}

impl Animatable for Border {
    forward_render_state!();

    fn color(&self) -> Option<&dyn ColorCapability> {
        Some(self)
    }

    fn color_mut(&mut self) -> Option<&mut dyn ColorCapability> {
        Some(self)
    }
}

/// Composite user widget; the tint applies to the whole subtree
#[derive(Clone, Debug, PartialEq)]
pub struct UserWidget {
    pub widget: Widget,
    pub color_and_opacity: Color,
}

impl UserWidget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            widget: Widget::new(name),
            color_and_opacity: Color::WHITE,
        }
    }
}

impl ColorCapability for UserWidget {
    fn tint(&self) -> Color {
        self.color_and_opacity
    }

    fn set_tint(&mut self, tint: Color) {
        self.color_and_opacity = tint;
    }
}

impl Animatable for UserWidget {
    forward_render_state!();

    fn color(&self) -> Option<&dyn ColorCapability> {
        Some(self)
    }

    fn color_mut(&mut self) -> Option<&mut dyn ColorCapability> {
        Some(self)
    }
}
