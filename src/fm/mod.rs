//! Modules for the 6-operator FM voice.
//!
//! Parameters are raw integers as found in a DX7 packed voice record, addressed
//! by the index constants below. A voice exposes a flat parameter space: the
//! six operator blocks first, in reverse order (block 0 addresses the last
//! operator), followed by the voice-level block.

pub mod algorithms;
pub mod operator;
pub mod patch;
pub mod voice;

pub const NUM_OPERATORS: usize = 6;
pub const NUM_ALGORITHMS: usize = 32;

// Operator parameters.
pub const OP_EG_R1: usize = 0;
pub const OP_EG_R2: usize = 1;
pub const OP_EG_R3: usize = 2;
pub const OP_EG_R4: usize = 3;
pub const OP_EG_L1: usize = 4;
pub const OP_EG_L2: usize = 5;
pub const OP_EG_L3: usize = 6;
pub const OP_EG_L4: usize = 7;
pub const OP_KBD_LEVEL_SCALING_BREAK_POINT: usize = 8;
pub const OP_KBD_LEVEL_SCALING_LEFT_DEPTH: usize = 9;
pub const OP_KBD_LEVEL_SCALING_RIGHT_DEPTH: usize = 10;
pub const OP_KBD_LEVEL_SCALING_LEFT_CURVE: usize = 11;
pub const OP_KBD_LEVEL_SCALING_RIGHT_CURVE: usize = 12;
pub const OP_OSC_DETUNE: usize = 13;
pub const OP_KBD_RATE_SCALING: usize = 14;
pub const OP_KEY_VELOCITY_SENSITIVITY: usize = 15;
pub const OP_AMP_MOD_SENSITIVITY: usize = 16;
pub const OP_OUTPUT_LEVEL: usize = 17;
pub const OP_OSC_COARSE: usize = 18;
pub const OP_OSC_MODE: usize = 19;
pub const OP_OSC_FINE: usize = 20;
pub const NUM_OPERATOR_PARAMS: usize = 21;

// Voice parameters.
pub const VOICE_PITCH_EG_R1: usize = 0;
pub const VOICE_PITCH_EG_R2: usize = 1;
pub const VOICE_PITCH_EG_R3: usize = 2;
pub const VOICE_PITCH_EG_R4: usize = 3;
pub const VOICE_PITCH_EG_L1: usize = 4;
pub const VOICE_PITCH_EG_L2: usize = 5;
pub const VOICE_PITCH_EG_L3: usize = 6;
pub const VOICE_PITCH_EG_L4: usize = 7;
pub const VOICE_ALGORITHM: usize = 8;
pub const VOICE_FEEDBACK: usize = 9;
pub const VOICE_OSC_SYNC: usize = 10;
pub const VOICE_LFO_SPEED: usize = 11;
pub const VOICE_LFO_DELAY: usize = 12;
pub const VOICE_PITCH_MOD_DEPTH: usize = 13;
pub const VOICE_AMP_MOD_DEPTH: usize = 14;
pub const VOICE_PITCH_MOD_SENSITIVITY: usize = 15;
pub const VOICE_LFO_WAVEFORM: usize = 16;
pub const VOICE_LFO_SYNC: usize = 17;
pub const VOICE_TRANSPOSE: usize = 18;
pub const VOICE_NAME: usize = 19;
pub const NUM_VOICE_PARAMS: usize = 20;

/// Size of the flat parameter space of a voice.
pub const NUM_PARAMS: usize = NUM_OPERATORS * NUM_OPERATOR_PARAMS + NUM_VOICE_PARAMS;

/// Flat index of an operator parameter, `operator` being the position of the
/// operator record in a packed voice (0 for the first record).
#[inline]
pub const fn operator_param_index(operator: usize, param: usize) -> usize {
    (NUM_OPERATORS - 1 - operator) * NUM_OPERATOR_PARAMS + param
}

/// Flat index of a voice-level parameter.
#[inline]
pub const fn voice_param_index(param: usize) -> usize {
    NUM_OPERATORS * NUM_OPERATOR_PARAMS + param
}

/// Receiver of flat parameter writes.
pub trait ParameterSink {
    fn set_parameter(&mut self, index: usize, value: i32);

    /// The name is carried as raw bytes, outside of the numeric parameters.
    fn set_name(&mut self, _name: &[u8; patch::NAME_SIZE]) {}
}
