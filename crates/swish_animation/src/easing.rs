//! Easing functions
//!
//! Maps raw progress through a curve. [`ease`] takes raw time and duration the
//! way a tween tracks them; [`Easing::apply`] takes normalized progress.
//!
//! Some curves take an optional shape parameter:
//!
//! | Curve              | Parameter         | Default   |
//! |--------------------|-------------------|-----------|
//! | `*Pow`             | exponent          | `2.0`     |
//! | `*Back`            | overshoot         | `1.70158` |
//! | `*Elastic`         | period            | `0.3`     |
//!
//! Every other curve ignores the parameter.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

const DEFAULT_EXPONENT: f32 = 2.0;
const DEFAULT_OVERSHOOT: f32 = 1.70158;
const DEFAULT_PERIOD: f32 = 0.3;

/// Easing curve selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Holds the start value until the very end
    Step,
    SmoothStep,
    SmootherStep,
    InPow,
    OutPow,
    InOutPow,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    /// Damped overshoot that settles on the end value
    Spring,
}

impl Easing {
    /// Apply the curve to normalized progress using its default shape
    pub fn apply(&self, t: f32) -> f32 {
        self.apply_with(t, None)
    }

    /// Apply the curve to normalized progress
    ///
    /// `t` is clamped to `[0, 1]`. Back, elastic and spring curves may return
    /// values outside `[0, 1]` in between the end points.
    pub fn apply_with(&self, t: f32, param: Option<f32>) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::Step => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::SmootherStep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            Easing::InPow => t.powf(exponent(param)),
            Easing::OutPow => 1.0 - (1.0 - t).powf(exponent(param)),
            Easing::InOutPow => in_out(t, |t| t.powf(exponent(param))),
            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => in_out(t, |t| t * t),
            Easing::InCubic => t * t * t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => in_out(t, |t| t * t * t),
            Easing::InQuart => t.powi(4),
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::InOutQuart => in_out(t, |t| t.powi(4)),
            Easing::InQuint => t.powi(5),
            Easing::OutQuint => 1.0 - (1.0 - t).powi(5),
            Easing::InOutQuint => in_out(t, |t| t.powi(5)),
            Easing::InSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::OutSine => (t * PI / 2.0).sin(),
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::InExpo => in_expo(t),
            Easing::OutExpo => 1.0 - in_expo(1.0 - t),
            Easing::InOutExpo => in_out(t, in_expo),
            Easing::InCirc => in_circ(t),
            Easing::OutCirc => 1.0 - in_circ(1.0 - t),
            Easing::InOutCirc => in_out(t, in_circ),
            Easing::InBack => in_back(t, overshoot(param)),
            Easing::OutBack => 1.0 - in_back(1.0 - t, overshoot(param)),
            Easing::InOutBack => in_out(t, |t| in_back(t, overshoot(param) * 1.525)),
            Easing::InElastic => in_elastic(t, period(param)),
            Easing::OutElastic => 1.0 - in_elastic(1.0 - t, period(param)),
            Easing::InOutElastic => in_out(t, |t| in_elastic(t, period(param) * 1.5)),
            Easing::InBounce => 1.0 - out_bounce(1.0 - t),
            Easing::OutBounce => out_bounce(t),
            Easing::InOutBounce => in_out(t, |t| 1.0 - out_bounce(1.0 - t)),
            Easing::Spring => spring(t),
        }
    }

    /// Whether the curve reads a shape parameter
    pub fn takes_param(&self) -> bool {
        matches!(
            self,
            Easing::InPow
                | Easing::OutPow
                | Easing::InOutPow
                | Easing::InBack
                | Easing::OutBack
                | Easing::InOutBack
                | Easing::InElastic
                | Easing::OutElastic
                | Easing::InOutElastic
        )
    }
}

/// Ease raw elapsed time within a duration
///
/// A zero or negative duration is already finished and yields `1.0`.
/// With `param` unset the curve uses its parameterless form.
pub fn ease(kind: Easing, t: f32, duration: f32, param: Option<f32>) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    kind.apply_with(t / duration, param)
}

fn exponent(param: Option<f32>) -> f32 {
    match param {
        Some(e) if e.is_finite() && e > 0.0 => e,
        _ => DEFAULT_EXPONENT,
    }
}

fn overshoot(param: Option<f32>) -> f32 {
    match param {
        Some(s) if s.is_finite() => s,
        _ => DEFAULT_OVERSHOOT,
    }
}

fn period(param: Option<f32>) -> f32 {
    match param {
        Some(p) if p.is_finite() && p > 0.0 => p,
        _ => DEFAULT_PERIOD,
    }
}

/// Mirror an ease-in curve into an ease-in-out curve
fn in_out(t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0) / 2.0
    }
}

fn in_expo(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * t - 10.0)
    }
}

fn in_circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

fn in_back(t: f32, overshoot: f32) -> f32 {
    (overshoot + 1.0) * t * t * t - overshoot * t * t
}

fn in_elastic(t: f32, period: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let phase = period / 4.0;
    -(2.0_f32.powf(10.0 * (t - 1.0)) * ((t - 1.0 - phase) * 2.0 * PI / period).sin())
}

fn out_bounce(t: f32) -> f32 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

fn spring(t: f32) -> f32 {
    let s = ((t * PI * (0.2 + 2.5 * t * t * t)).sin() * (1.0 - t).powf(2.2) + t)
        * (1.0 + 1.2 * (1.0 - t));
    if t >= 1.0 {
        1.0
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 38] = [
        Easing::Linear,
        Easing::Step,
        Easing::SmoothStep,
        Easing::SmootherStep,
        Easing::InPow,
        Easing::OutPow,
        Easing::InOutPow,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
        Easing::Spring,
    ];

    #[test]
    fn test_end_points() {
        for easing in ALL {
            assert!(
                easing.apply(0.0).abs() < 1e-3,
                "{easing:?} should start at 0, got {}",
                easing.apply(0.0)
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-3,
                "{easing:?} should end at 1, got {}",
                easing.apply(1.0)
            );
        }
    }

    #[test]
    fn test_linear() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_in_out_midpoints() {
        for easing in [
            Easing::InOutQuad,
            Easing::InOutCubic,
            Easing::InOutSine,
            Easing::InOutExpo,
            Easing::InOutCirc,
            Easing::SmoothStep,
            Easing::SmootherStep,
        ] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-4, "{easing:?}");
        }
    }

    #[test]
    fn test_in_and_out_shapes() {
        assert!(Easing::InQuad.apply(0.5) < 0.5);
        assert!(Easing::OutQuad.apply(0.5) > 0.5);
        assert!(Easing::InCubic.apply(0.5) < Easing::InQuad.apply(0.5));
    }

    #[test]
    fn test_standard_curves_are_monotonic() {
        for easing in [
            Easing::Linear,
            Easing::SmoothStep,
            Easing::InQuad,
            Easing::OutCubic,
            Easing::InOutQuint,
            Easing::InOutSine,
            Easing::OutExpo,
            Easing::InCirc,
        ] {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let value = easing.apply(i as f32 / 100.0);
                assert!(value + 1e-6 >= prev, "{easing:?} decreased at step {i}");
                prev = value;
            }
        }
    }

    #[test]
    fn test_step_holds_until_end() {
        assert_eq!(Easing::Step.apply(0.99), 0.0);
        assert_eq!(Easing::Step.apply(1.0), 1.0);
    }

    #[test]
    fn test_pow_exponent_param() {
        assert!((Easing::InPow.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::InPow.apply_with(0.5, Some(3.0)) - 0.125).abs() < 1e-6);
        assert!((Easing::OutPow.apply_with(0.5, Some(3.0)) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_back_overshoot_param() {
        // Dips below zero before heading to the end value
        assert!(Easing::InBack.apply(0.2) < 0.0);
        assert!(Easing::OutBack.apply(0.8) > 1.0);

        // No overshoot degenerates into a plain cubic
        assert!((Easing::InBack.apply_with(0.5, Some(0.0)) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_elastic_period_param() {
        let tight = Easing::OutElastic.apply_with(0.3, Some(0.1));
        let loose = Easing::OutElastic.apply_with(0.3, Some(0.6));
        assert!((tight - loose).abs() > 1e-3);

        // Invalid periods fall back to the default shape
        assert_eq!(
            Easing::OutElastic.apply_with(0.3, Some(0.0)),
            Easing::OutElastic.apply(0.3)
        );
    }

    #[test]
    fn test_invalid_exponent_falls_back() {
        for bad in [-2.0, 0.0, f32::NAN, f32::INFINITY] {
            for easing in [Easing::InPow, Easing::OutPow, Easing::InOutPow] {
                for t in [0.0, 0.5, 1.0] {
                    let value = easing.apply_with(t, Some(bad));
                    assert!(value.is_finite(), "{easing:?} with {bad} at {t}");
                    assert_eq!(value, easing.apply(t));
                }
            }
        }
    }

    #[test]
    fn test_invalid_overshoot_and_period_fall_back() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(
                Easing::OutBack.apply_with(0.7, Some(bad)),
                Easing::OutBack.apply(0.7)
            );
            assert_eq!(
                Easing::InOutElastic.apply_with(0.7, Some(bad)),
                Easing::InOutElastic.apply(0.7)
            );
        }
    }

    #[test]
    fn test_params_ignored_by_plain_curves() {
        assert!(!Easing::InQuad.takes_param());
        assert_eq!(
            Easing::InQuad.apply_with(0.3, Some(7.0)),
            Easing::InQuad.apply(0.3)
        );
        assert!(Easing::InOutBack.takes_param());
    }

    #[test]
    fn test_ease_raw_time() {
        assert!((ease(Easing::Linear, 0.5, 2.0, None) - 0.25).abs() < 1e-6);
        assert_eq!(ease(Easing::Linear, 3.0, 2.0, None), 1.0);
    }

    #[test]
    fn test_ease_zero_duration_is_finished() {
        assert_eq!(ease(Easing::InQuad, 0.0, 0.0, None), 1.0);
        assert_eq!(ease(Easing::Linear, 0.0, -1.0, None), 1.0);
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=100 {
            let v = Easing::OutBounce.apply(i as f32 / 100.0);
            assert!((-1e-6..=1.0 + 1e-6).contains(&v));
        }
    }
}
