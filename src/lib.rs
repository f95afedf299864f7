#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod envelope;
pub mod fm;
pub mod oscillator;
pub mod resources;
pub mod unit;

/// Audio sample rate in Hz expected by the host.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Number of interleaved output channels expected by the host.
pub const NUM_OUTPUT_CHANNELS: u8 = 2;
