//! FM Operator.
//!
//! One sine oscillator shaped by its own envelope. The operator keeps the raw
//! patch values and derives its base frequency from them whenever one of the
//! oscillator parameters or the note changes.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{
    NUM_OPERATOR_PARAMS, OP_EG_L4, OP_EG_R1, OP_KEY_VELOCITY_SENSITIVITY, OP_OSC_COARSE,
    OP_OSC_DETUNE, OP_OSC_FINE, OP_OSC_MODE, OP_OUTPUT_LEVEL,
};
use crate::envelope::EnvelopeGenerator;
use crate::oscillator::sine_oscillator::SineOscillator;

pub const FREQUENCY_MODE_RATIO: i32 = 0;
pub const FREQUENCY_MODE_FIXED: i32 = 1;

const DEFAULT_BASE_FREQUENCY: f32 = 440.0;

/// Depth of the phase modulation input, in cycles per unit of modulation.
const PHASE_MODULATION_SCALE: f32 = 0.1;

/// Frequency in Hz of a MIDI note, with A4 = 440 Hz.
#[inline]
pub fn note_to_frequency(note: u8) -> f32 {
    (440.0 / 32.0) * 2.0_f32.powf((note as f32 - 9.0) / 12.0)
}

#[derive(Debug, Clone)]
pub struct Operator {
    sample_rate_recip: f32,

    note: u8,
    velocity: f32,
    base_frequency: f32,
    phase: f32,

    params: [i32; NUM_OPERATOR_PARAMS],

    oscillator: SineOscillator,
    envelope: EnvelopeGenerator,
}

impl Operator {
    pub fn new() -> Self {
        Self {
            sample_rate_recip: 0.0,
            note: 0,
            velocity: 0.0,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            phase: 0.0,
            params: [0; NUM_OPERATOR_PARAMS],
            oscillator: SineOscillator::new(),
            envelope: EnvelopeGenerator::new(),
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate_recip = 1.0 / sample_rate;
        self.envelope.init(sample_rate);
        self.params = [0; NUM_OPERATOR_PARAMS];
        self.note = 0;
        self.velocity = 0.0;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.base_frequency = DEFAULT_BASE_FREQUENCY;
        self.phase = 0.0;
        self.envelope.reset();
    }

    pub fn calculate_frequency(&mut self, note: u8) {
        let detune = self.params[OP_OSC_DETUNE] as f32 - 7.0;
        let coarse = self.params[OP_OSC_COARSE];
        let fine = self.params[OP_OSC_FINE] as f32 * 0.01;

        self.base_frequency = if self.params[OP_OSC_MODE] == FREQUENCY_MODE_RATIO {
            let coarse = if coarse > 0 { coarse as f32 } else { 0.5 };
            (note_to_frequency(note) + detune) * coarse * (1.0 + fine)
        } else {
            (10.0 + detune * 0.01).powf((coarse % 4) as f32 + fine)
        };
    }

    /// Stores a raw parameter. Out of range indices are ignored.
    pub fn set_parameter(&mut self, index: usize, value: i32) {
        let Some(param) = self.params.get_mut(index) else {
            return;
        };
        *param = value;

        match index {
            OP_EG_R1..=OP_EG_L4 => {
                self.envelope
                    .set_parameter(index - OP_EG_R1, value as f32 * 0.01);
            }
            OP_OSC_MODE | OP_OSC_COARSE | OP_OSC_FINE | OP_OSC_DETUNE => {
                self.calculate_frequency(self.note);
            }
            _ => {}
        }
    }

    #[inline]
    pub fn parameter(&self, index: usize) -> i32 {
        self.params.get(index).copied().unwrap_or_default()
    }

    /// Renders one sample.
    ///
    /// `phase_mod` is added to the phase increment, `pitch_mod` in `0.0..=1.0`
    /// bends the frequency by `2^(pitch_mod * 8 - 4)`. `amp_mod` is accepted
    /// for the LFO path but has no effect yet.
    #[inline]
    pub fn process_sample(&mut self, phase_mod: f32, pitch_mod: f32, _amp_mod: f32) -> f32 {
        let w0 =
            self.base_frequency * self.sample_rate_recip * 2.0_f32.powf(pitch_mod * 8.0 - 4.0);

        let mut out = self.oscillator.sample(self.phase);
        out *= self.envelope.process() * self.velocity;
        out *= self.params[OP_OUTPUT_LEVEL] as f32 * 0.01;

        self.phase = (self.phase + w0 + phase_mod * PHASE_MODULATION_SCALE) % 1.0;

        out
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.note = note;
        self.calculate_frequency(note);

        let sensitivity = self.params[OP_KEY_VELOCITY_SENSITIVITY] as f32 / 7.0;
        self.velocity = velocity as f32 / 127.0 * sensitivity + (1.0 - sensitivity);

        self.phase = 0.0;
        self.envelope.gate_on();
    }

    /// Releases the envelope whatever note is passed.
    pub fn note_off(&mut self, _note: u8) {
        self.envelope.gate_off();
    }

    #[inline]
    pub fn note(&self) -> u8 {
        self.note
    }

    #[inline]
    pub fn base_frequency(&self) -> f32 {
        self.base_frequency
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn envelope(&self) -> &EnvelopeGenerator {
        &self.envelope
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::new()
    }
}
