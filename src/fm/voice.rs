//! 6-operator FM voice.
//!
//! Every sample, each operator is phase-modulated by the average of the
//! previous-sample outputs of its modulators (and of the feedback register if
//! the algorithm routes it there). The outputs are committed only after all
//! six operators have been rendered, so no operator ever sees a value from the
//! current sample.

use super::algorithms::{algorithms, clamp_algorithm, Algorithms, FEEDBACK, OUTPUT};
use super::operator::Operator;
use super::patch::{unpack_voice, Patch, PatchError, SysexBank};
use super::{
    ParameterSink, NUM_OPERATORS, NUM_OPERATOR_PARAMS, NUM_VOICE_PARAMS, VOICE_ALGORITHM,
    VOICE_FEEDBACK, VOICE_PITCH_EG_L4, VOICE_PITCH_EG_R1,
};
use crate::envelope::EnvelopeGenerator;

/// Largest raw feedback value.
const MAX_FEEDBACK: f32 = 7.0;

#[derive(Debug, Clone)]
pub struct Voice {
    algorithms: &'static Algorithms,

    operators: [Operator; NUM_OPERATORS],
    pitch_envelope: EnvelopeGenerator,

    params: [i32; NUM_VOICE_PARAMS],

    outputs_z: [f32; NUM_OPERATORS],
    feedback_z: f32,
}

impl Voice {
    pub fn new() -> Self {
        Self {
            algorithms: algorithms(),
            operators: core::array::from_fn(|_| Operator::new()),
            pitch_envelope: EnvelopeGenerator::new(),
            params: [0; NUM_VOICE_PARAMS],
            outputs_z: [0.0; NUM_OPERATORS],
            feedback_z: 0.0,
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        for operator in self.operators.iter_mut() {
            operator.init(sample_rate);
        }

        self.pitch_envelope.init(sample_rate);
        self.params = [0; NUM_VOICE_PARAMS];
        self.outputs_z = [0.0; NUM_OPERATORS];
        self.feedback_z = 0.0;
    }

    /// Clears the running state but keeps the patch.
    pub fn reset(&mut self) {
        for operator in self.operators.iter_mut() {
            operator.reset();
        }

        self.pitch_envelope.reset();
        self.outputs_z = [0.0; NUM_OPERATORS];
        self.feedback_z = 0.0;
    }

    #[inline]
    pub fn process_sample(&mut self) -> f32 {
        let pitch_env = self.pitch_envelope.process();
        let feedback_level = self.params[VOICE_FEEDBACK] as f32 / MAX_FEEDBACK;
        let algorithms = self.algorithms;
        let matrix = algorithms.matrix(clamp_algorithm(self.params[VOICE_ALGORITHM]));

        let mut tmp_out = [0.0; NUM_OPERATORS];

        for (out_ch, (operator, out)) in self
            .operators
            .iter_mut()
            .zip(tmp_out.iter_mut())
            .enumerate()
        {
            let gates = &matrix[out_ch];
            let mut modulation = 0.0;
            let mut num_sources = 0;

            for (in_ch, output_z) in self.outputs_z.iter().enumerate() {
                if in_ch != out_ch && gates[in_ch] {
                    modulation += output_z;
                    num_sources += 1;
                }
            }

            if gates[FEEDBACK] {
                modulation += self.feedback_z * feedback_level;
                num_sources += 1;
            }

            let modulation = average(modulation, num_sources);
            *out = operator.process_sample(modulation, pitch_env, 0.0);
        }

        let mut feedback = 0.0;
        let mut num_feedback = 0;
        let mut out = 0.0;
        let mut num_out = 0;

        for (op, sample) in tmp_out.iter().enumerate() {
            if matrix[FEEDBACK][op] {
                feedback += sample;
                num_feedback += 1;
            }
            if matrix[OUTPUT][op] {
                out += sample;
                num_out += 1;
            }
        }

        self.feedback_z = average(feedback, num_feedback);
        self.outputs_z = tmp_out;

        average(out, num_out)
    }

    /// Writes one entry of the flat parameter space. Operator blocks are
    /// addressed in reverse: indices `0..21` reach the last operator.
    pub fn set_parameter(&mut self, index: usize, value: i32) {
        if index < NUM_OPERATORS * NUM_OPERATOR_PARAMS {
            let op = NUM_OPERATORS - 1 - index / NUM_OPERATOR_PARAMS;
            self.operators[op].set_parameter(index % NUM_OPERATOR_PARAMS, value);
            return;
        }

        let index = index - NUM_OPERATORS * NUM_OPERATOR_PARAMS;
        let Some(param) = self.params.get_mut(index) else {
            return;
        };
        *param = value;

        if (VOICE_PITCH_EG_R1..=VOICE_PITCH_EG_L4).contains(&index) {
            self.pitch_envelope
                .set_parameter(index - VOICE_PITCH_EG_R1, value as f32 * 0.01);
        }
    }

    /// Reads back an entry of the flat parameter space, 0 if out of range.
    pub fn parameter(&self, index: usize) -> i32 {
        if index < NUM_OPERATORS * NUM_OPERATOR_PARAMS {
            let op = NUM_OPERATORS - 1 - index / NUM_OPERATOR_PARAMS;
            return self.operators[op].parameter(index % NUM_OPERATOR_PARAMS);
        }

        self.params
            .get(index - NUM_OPERATORS * NUM_OPERATOR_PARAMS)
            .copied()
            .unwrap_or_default()
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        for operator in self.operators.iter_mut() {
            operator.note_on(note, velocity);
        }
    }

    pub fn note_off(&mut self, note: u8) {
        for operator in self.operators.iter_mut() {
            operator.note_off(note);
        }
    }

    /// Decodes voice `voice_index` of a packed 32-voice bank into this voice.
    /// Nothing is written if the bank is malformed.
    pub fn load_bank(&mut self, buffer: &[u8], voice_index: usize) -> Result<(), PatchError> {
        let bank = SysexBank::find(buffer)?;
        unpack_voice(&bank, voice_index, self)
    }

    pub fn load_patch(&mut self, patch: &Patch) {
        patch.apply(self);
    }

    #[inline]
    pub fn algorithm(&self) -> usize {
        clamp_algorithm(self.params[VOICE_ALGORITHM])
    }

    #[inline]
    pub fn operator(&self, index: usize) -> Option<&Operator> {
        self.operators.get(index)
    }

    #[inline]
    pub fn pitch_envelope(&self) -> &EnvelopeGenerator {
        &self.pitch_envelope
    }

    #[inline]
    pub fn previous_outputs(&self) -> &[f32; NUM_OPERATORS] {
        &self.outputs_z
    }

    #[inline]
    pub fn feedback_register(&self) -> f32 {
        self.feedback_z
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSink for Voice {
    #[inline]
    fn set_parameter(&mut self, index: usize, value: i32) {
        Voice::set_parameter(self, index, value);
    }
}

#[inline]
fn average(sum: f32, count: usize) -> f32 {
    if count > 0 {
        sum / count as f32
    } else {
        0.0
    }
}
