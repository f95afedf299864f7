//! Oscillators.

pub mod sine_oscillator;
