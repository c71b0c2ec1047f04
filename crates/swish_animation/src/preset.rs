//! Declarative tween presets
//!
//! A [`TweenPreset`] describes a tween without callbacks, so it can be stored
//! in a theme or loaded from a config file and replayed on any widget with
//! [`TweenScheduler::create_from_preset`](crate::TweenScheduler::create_from_preset).

use serde::{Deserialize, Serialize};
use swish_core::{Color, Vec2, Visibility};

use crate::builder::TweenBuilder;
use crate::channel::VisibilitySwitch;
use crate::easing::Easing;

/// Callback-free description of a tween
///
/// Every channel is optional; only the ones that are set get enabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenPreset {
    /// Seconds spent ramping
    pub duration: f32,
    /// Seconds to wait before ramping
    pub delay: f32,
    /// Keep other tweens on the same widget running
    pub additive: bool,
    pub easing: Easing,
    pub easing_param: Option<f32>,

    pub translation: Option<Vec2>,
    pub scale: Option<Vec2>,
    /// Degrees
    pub rotation: Option<f32>,
    pub color: Option<Color>,
    pub opacity: Option<f32>,
    pub visibility: Option<Visibility>,
    pub visibility_switch: VisibilitySwitch,
    pub canvas_position: Option<Vec2>,
}

impl Default for TweenPreset {
    fn default() -> Self {
        Self {
            duration: 0.3,
            delay: 0.0,
            additive: false,
            easing: Easing::Linear,
            easing_param: None,
            translation: None,
            scale: None,
            rotation: None,
            color: None,
            opacity: None,
            visibility: None,
            visibility_switch: VisibilitySwitch::AtEnd,
            canvas_position: None,
        }
    }
}

impl TweenPreset {
    /// Show the widget, then fade it in
    pub fn fade_in(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::OutQuad,
            opacity: Some(1.0),
            visibility: Some(Visibility::Visible),
            visibility_switch: VisibilitySwitch::AtStart,
            ..Default::default()
        }
    }

    /// Fade the widget out, then collapse it
    pub fn fade_out(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::InQuad,
            opacity: Some(0.0),
            visibility: Some(Visibility::Collapsed),
            visibility_switch: VisibilitySwitch::AtEnd,
            ..Default::default()
        }
    }

    /// Scale up to full size with a slight overshoot
    pub fn pop_in(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::OutBack,
            scale: Some(Vec2::ONE),
            opacity: Some(1.0),
            ..Default::default()
        }
    }

    /// Move the render translation to `offset`
    pub fn slide_to(offset: Vec2, duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::OutCubic,
            translation: Some(offset),
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }

    /// Configure a builder with every channel this preset sets
    pub fn apply<'a>(&self, builder: TweenBuilder<'a>) -> TweenBuilder<'a> {
        let mut builder = match self.easing_param {
            Some(param) => builder.easing_with_param(self.easing, param),
            None => builder.easing(self.easing),
        };

        if let Some(end) = self.translation {
            builder = builder.translation(end);
        }
        if let Some(end) = self.scale {
            builder = builder.scale(end);
        }
        if let Some(end) = self.rotation {
            builder = builder.rotation(end);
        }
        if let Some(end) = self.color {
            builder = builder.color(end);
        }
        if let Some(end) = self.opacity {
            builder = builder.opacity(end);
        }
        if let Some(end) = self.visibility {
            builder = builder.visibility(end, self.visibility_switch);
        }
        if let Some(end) = self.canvas_position {
            builder = builder.canvas_position(end);
        }
        builder
    }
}
