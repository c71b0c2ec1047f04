//! Scheduler configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`TweenScheduler`](crate::TweenScheduler).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Storage reserved at startup for the active, pending and scratch lists.
    pub initial_capacity: usize,
    /// Upper bound on a single tick's delta, in seconds. Guards against a
    /// frame hitch jumping every tween to its end.
    pub max_delta: Option<f32>,
    /// Multiplier applied to every tick's delta.
    pub time_scale: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl SchedulerConfig {
    /// Standard configuration: deltas pass through untouched.
    pub fn standard() -> Self {
        Self {
            initial_capacity: 64,
            max_delta: None,
            time_scale: 1.0,
        }
    }

    /// Clamps each tick to 100ms so a stalled frame doesn't skip animations.
    pub fn frame_paced() -> Self {
        Self {
            initial_capacity: 64,
            max_delta: Some(0.1),
            time_scale: 1.0,
        }
    }

    /// Small footprint for unit tests.
    pub fn testing() -> Self {
        Self {
            initial_capacity: 4,
            max_delta: None,
            time_scale: 1.0,
        }
    }

    /// Set the global time scale (builder pattern).
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Set the per-tick delta clamp (builder pattern).
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Scale and clamp a raw tick delta
    ///
    /// Negative and NaN deltas become zero.
    pub(crate) fn scaled_delta(&self, dt: f32) -> f32 {
        if dt.is_nan() || dt < 0.0 {
            tracing::debug!("Ignoring invalid tick delta {}", dt);
            return 0.0;
        }

        let mut scaled = dt * self.time_scale.max(0.0);
        if let Some(max) = self.max_delta {
            if scaled > max {
                tracing::debug!("Clamping tick delta {} to {}", scaled, max);
                scaled = max;
            }
        }
        scaled
    }
}
