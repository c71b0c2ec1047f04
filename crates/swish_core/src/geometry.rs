//! Geometry and visual state types
//!
//! Plain value types describing a widget's render state. They carry no
//! behavior beyond construction and simple math; interpolation lives in the
//! animation crate.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Vectors
// ─────────────────────────────────────────────────────────────────────────────

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Component-wise linear interpolation
    ///
    /// `t` is not clamped so overshooting curves (back, elastic) can push a
    /// color past its end points; consumers clamp when they upload.
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render Transform
// ─────────────────────────────────────────────────────────────────────────────

/// Per-widget render transform
///
/// Applied after layout, so it never affects the size or position other
/// widgets see. Translation, scale and angle are the animatable parts; shear
/// is carried through untouched by tweens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetTransform {
    pub translation: Vec2,
    pub scale: Vec2,
    pub shear: Vec2,
    /// Rotation in degrees, clockwise
    pub angle: f32,
}

impl WidgetTransform {
    pub const IDENTITY: WidgetTransform = WidgetTransform {
        translation: Vec2::ZERO,
        scale: Vec2::ONE,
        shear: Vec2::ZERO,
        angle: 0.0,
    };

    pub const fn new(translation: Vec2, scale: Vec2, angle: f32) -> Self {
        Self {
            translation,
            scale,
            shear: Vec2::ZERO,
            angle,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for WidgetTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

/// Widget visibility state
///
/// Changing visibility has side effects beyond drawing (layout, hit testing),
/// so writers should avoid setting it when nothing changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Drawn and hit-testable
    #[default]
    Visible,
    /// Not drawn and takes no layout space
    Collapsed,
    /// Not drawn but still takes layout space
    Hidden,
    /// Drawn; neither the widget nor its children receive input
    HitTestInvisible,
    /// Drawn; the widget ignores input but its children do not
    SelfHitTestInvisible,
}

impl Visibility {
    /// Whether the widget is drawn at all
    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            Self::Visible | Self::HitTestInvisible | Self::SelfHitTestInvisible
        )
    }

    /// Whether the widget occupies layout space
    pub fn takes_space(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}
