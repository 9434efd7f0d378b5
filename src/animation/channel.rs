//! Per-parameter animator functions
//!
//! A channel maps `(current value, elapsed seconds)` to the next value of one
//! branch parameter. Elapsed time is absolute time since the sketch started,
//! not a frame delta.

use std::fmt;
use std::rc::Rc;

/// One parameter's animator function
#[derive(Clone, Default)]
pub enum Channel {
    /// Leave the value unchanged
    #[default]
    Constant,
    /// Add a fixed amount on every tick; speed follows the tick rate
    Step(f32),
    /// `base + rate * elapsed`, independent of the tick rate
    Linear { base: f32, rate: f32 },
    /// `center + amplitude * sin(frequency * elapsed + phase)`
    Wave {
        center: f32,
        amplitude: f32,
        frequency: f32,
        phase: f32,
    },
    /// Arbitrary function of `(current, elapsed)`
    Custom(Rc<dyn Fn(f32, f32) -> f32>),
}

impl Channel {
    pub fn wave(center: f32, amplitude: f32, frequency: f32) -> Self {
        Channel::Wave {
            center,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub fn custom(f: impl Fn(f32, f32) -> f32 + 'static) -> Self {
        Channel::Custom(Rc::new(f))
    }

    /// Compute the new value from the current one
    pub fn apply(&self, current: f32, elapsed: f32) -> f32 {
        match self {
            Channel::Constant => current,
            Channel::Step(amount) => current + amount,
            Channel::Linear { base, rate } => base + rate * elapsed,
            Channel::Wave {
                center,
                amplitude,
                frequency,
                phase,
            } => center + amplitude * (frequency * elapsed + phase).sin(),
            Channel::Custom(f) => f(current, elapsed),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Channel::Constant)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Constant => write!(f, "Constant"),
            Channel::Step(amount) => f.debug_tuple("Step").field(amount).finish(),
            Channel::Linear { base, rate } => f
                .debug_struct("Linear")
                .field("base", base)
                .field("rate", rate)
                .finish(),
            Channel::Wave {
                center,
                amplitude,
                frequency,
                phase,
            } => f
                .debug_struct("Wave")
                .field("center", center)
                .field("amplitude", amplitude)
                .field("frequency", frequency)
                .field("phase", phase)
                .finish(),
            Channel::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
