//! Easing curves for cross-section blending along a segment.
//!
//! Every curve maps `t` in [0, 1] to a blend factor. The standard curves
//! satisfy `ease(0) = 0` and `ease(1) = 1`; the elastic and back
//! families overshoot the unit interval by design.

use std::f32::consts::PI;

/// Easing curve variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Identity blend.
    Linear,
    /// Quadratic ease-in.
    QuadIn,
    /// Quadratic ease-out.
    QuadOut,
    /// Quadratic ease-in-out.
    QuadInOut,
    /// Cubic ease-in.
    CubicIn,
    /// Cubic ease-out.
    CubicOut,
    /// Cubic ease-in-out.
    CubicInOut,
    /// Quartic ease-in.
    QuartIn,
    /// Quartic ease-out.
    QuartOut,
    /// Quartic ease-in-out.
    QuartInOut,
    /// Quintic ease-in.
    QuintIn,
    /// Quintic ease-out.
    QuintOut,
    /// Quintic ease-in-out.
    QuintInOut,
    /// Sinusoidal ease-in.
    SineIn,
    /// Sinusoidal ease-out.
    SineOut,
    /// Sinusoidal ease-in-out.
    SineInOut,
    /// Exponential ease-in.
    ExpoIn,
    /// Exponential ease-out.
    ExpoOut,
    /// Exponential ease-in-out.
    ExpoInOut,
    /// Circular ease-in.
    CircIn,
    /// Circular ease-out. Produces the pointed taper at strand exits and
    /// chain starts.
    CircOut,
    /// Circular ease-in-out.
    CircInOut,
    /// Elastic ease-in.
    ElasticIn {
        /// Oscillation period.
        period: f32,
    },
    /// Elastic ease-out.
    ElasticOut {
        /// Oscillation period.
        period: f32,
    },
    /// Elastic ease-in-out.
    ElasticInOut {
        /// Oscillation period.
        period: f32,
    },
    /// Back ease-in (undershoots before accelerating).
    BackIn {
        /// Overshoot amount.
        overshoot: f32,
    },
    /// Back ease-out (overshoots before settling).
    BackOut {
        /// Overshoot amount.
        overshoot: f32,
    },
    /// Back ease-in-out.
    BackInOut {
        /// Overshoot amount.
        overshoot: f32,
    },
    /// Bounce ease-in.
    BounceIn,
    /// Bounce ease-out.
    BounceOut,
    /// Bounce ease-in-out.
    BounceInOut,
    /// Hard step at t = 1.
    StepIn,
    /// Hard step at t = 0.
    StepOut,
    /// Hard step at t = 0.5.
    StepInOut,
}

impl Easing {
    /// Conventional oscillation period for the elastic family.
    pub const DEFAULT_PERIOD: f32 = 0.5;
    /// Conventional overshoot amount for the back family.
    pub const DEFAULT_OVERSHOOT: f32 = 1.701_58;

    /// Evaluate the curve at time `t`.
    ///
    /// Input is clamped to [0, 1]; output may exceed the unit interval
    /// for the elastic and back families.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => -t * (t - 2.0),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * t - 1.0;
                    -0.5 * (u * (u - 2.0) - 1.0)
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                let mut u = t * 2.0;
                if u < 1.0 {
                    0.5 * u * u * u
                } else {
                    u -= 2.0;
                    0.5 * (u * u * u + 2.0)
                }
            }
            Self::QuartIn => t * t * t * t,
            Self::QuartOut => {
                let u = t - 1.0;
                -(u * u * u * u - 1.0)
            }
            Self::QuartInOut => {
                let mut u = t * 2.0;
                if u < 1.0 {
                    0.5 * u * u * u * u
                } else {
                    u -= 2.0;
                    -0.5 * (u * u * u * u - 2.0)
                }
            }
            Self::QuintIn => t * t * t * t * t,
            Self::QuintOut => {
                let u = t - 1.0;
                u * u * u * u * u + 1.0
            }
            Self::QuintInOut => {
                let mut u = t * 2.0;
                if u < 1.0 {
                    0.5 * u * u * u * u * u
                } else {
                    u -= 2.0;
                    0.5 * (u * u * u * u * u + 2.0)
                }
            }
            Self::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Self::SineOut => (t * PI / 2.0).sin(),
            Self::SineInOut => -0.5 * ((PI * t).cos() - 1.0),
            Self::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    0.5 * 2.0_f32.powf(20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * 2.0_f32.powf(-20.0 * t + 10.0)
                }
            }
            Self::CircIn => -((1.0 - t * t).sqrt() - 1.0),
            Self::CircOut => {
                let u = t - 1.0;
                (1.0 - u * u).sqrt()
            }
            Self::CircInOut => {
                let mut u = 2.0 * t;
                if u < 1.0 {
                    -0.5 * ((1.0 - u * u).sqrt() - 1.0)
                } else {
                    u -= 2.0;
                    0.5 * ((1.0 - u * u).sqrt() + 1.0)
                }
            }
            Self::ElasticIn { period } => elastic_in(t, period),
            Self::ElasticOut { period } => elastic_out(t, period),
            Self::ElasticInOut { period } => elastic_in_out(t, period),
            Self::BackIn { overshoot } => {
                t * t * ((overshoot + 1.0) * t - overshoot)
            }
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
            Self::BackInOut { overshoot } => back_in_out(t, overshoot),
            Self::BounceIn => 1.0 - bounce_out(1.0 - t),
            Self::BounceOut => bounce_out(t),
            Self::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) * 0.5
                } else {
                    bounce_out(2.0 * t - 1.0) * 0.5 + 0.5
                }
            }
            Self::StepIn => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Self::StepOut => {
                if t > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::StepInOut => {
                if t < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

fn elastic_in(t: f32, period: f32) -> f32 {
    let u = t - 1.0;
    -(2.0_f32.powf(10.0 * u) * ((u - period / 4.0) * 2.0 * PI / period).sin())
}

fn elastic_out(t: f32, period: f32) -> f32 {
    2.0_f32.powf(-10.0 * t) * ((t - period / 4.0) * 2.0 * PI / period).sin()
        + 1.0
}

fn elastic_in_out(t: f32, period: f32) -> f32 {
    let mut u = t * 2.0;
    if u < 1.0 {
        u -= 1.0;
        -0.5 * (2.0_f32.powf(10.0 * u)
            * ((u - period / 4.0) * 2.0 * PI / period).sin())
    } else {
        u -= 1.0;
        2.0_f32.powf(-10.0 * u)
            * ((u - period / 4.0) * 2.0 * PI / period).sin()
            * 0.5
            + 1.0
    }
}

fn back_in_out(t: f32, overshoot: f32) -> f32 {
    let s = overshoot * 1.525;
    let mut u = t * 2.0;
    if u < 1.0 {
        0.5 * (u * u * ((s + 1.0) * u - s))
    } else {
        u -= 2.0;
        0.5 * (u * u * ((s + 1.0) * u + s) + 2.0)
    }
}

fn bounce_out(t: f32) -> f32 {
    if t < 4.0 / 11.0 {
        121.0 * t * t / 16.0
    } else if t < 8.0 / 11.0 {
        363.0 / 40.0 * t * t - 99.0 / 10.0 * t + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        4356.0 / 361.0 * t * t - 35442.0 / 1805.0 * t + 16061.0 / 1805.0
    } else {
        54.0 / 5.0 * t * t - 513.0 / 25.0 * t + 268.0 / 25.0
    }
}
