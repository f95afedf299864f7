//! Table lookup sine oscillator.
//!
//! The oscillator carries no state: the caller owns the phase and asks for the
//! value of the waveform at that phase. One period spans the phase range
//! `0.0..1.0`, with linear interpolation between the 512 table points.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::resources::sine::{LUT_SINE_512, LUT_SINE_512_SIZE};

#[derive(Debug, Default, Clone, Copy)]
pub struct SineOscillator;

impl SineOscillator {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn sample(&self, phase: f32) -> f32 {
        sine_512(phase)
    }
}

/// Interpolated sine lookup. Phase is in cycles and may be negative.
#[inline]
pub fn sine_512(phase: f32) -> f32 {
    let size = LUT_SINE_512_SIZE as f32;

    // The offset keeps phases down to -1.0 positive before the modulo.
    let mut index = (phase * size + size) % size;
    if index < 0.0 {
        index += size;
    }

    let index_integral = index.floor();
    let index_fractional = index - index_integral;
    let i = (index_integral as usize) & (LUT_SINE_512_SIZE - 1);
    let next = (i + 1) & (LUT_SINE_512_SIZE - 1);

    LUT_SINE_512[i] * (1.0 - index_fractional) + LUT_SINE_512[next] * index_fractional
}
