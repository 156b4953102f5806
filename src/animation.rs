//! Timing functions and transition descriptions.
//!
//! The widget does not run animations itself: the opacity fade and the
//! scroll-to-top glide are both delegated to the host. What the widget
//! produces is a [`Transition`] *description* (duration plus easing
//! curve) for the host to apply.

/// Easing curve controlling the rate of change during an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingFunction {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Slow start and end, fast middle.
    EaseInOut,
}

impl TimingFunction {
    /// Evaluate the curve at time `t` in `[0, 1]`, returning the
    /// interpolation factor.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
        }
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// How a property should animate when it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds.
    pub duration_ms: f32,
    /// Timing function controlling the animation curve.
    pub timing: TimingFunction,
}

impl Transition {
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Set the duration of the animation.
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}
