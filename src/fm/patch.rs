//! DX7 32-voice bank decoding.
//!
//! A bank is a single SysEx message: `F0 43 0n 09 20 00`, 32 packed voice
//! records of 128 bytes, a checksum byte and `F7`, 4104 bytes in total.
//!
//! Packed operator record (17 bytes, first record is OP6):
//!
//! | byte  | content                                  |
//! |-------|------------------------------------------|
//! | 0-3   | EG rates                                 |
//! | 4-7   | EG levels                                |
//! | 8-10  | level scaling break point, left/right depth |
//! | 11    | right curve (bits 2-3), left curve (bits 0-1) |
//! | 12    | detune (bits 3-6), rate scaling (bits 0-2) |
//! | 13    | velocity sens. (bits 2-4), AMS (bits 0-1) |
//! | 14    | output level                             |
//! | 15    | coarse (bits 1-5), mode (bit 0)          |
//! | 16    | fine                                     |
//!
//! The voice trailer (26 bytes) follows the same scheme, with feedback and
//! oscillator sync sharing byte 111 and PMS, LFO waveform and LFO sync sharing
//! byte 116. The 10-byte name is copied as is.

use core::fmt;

use super::{
    operator_param_index, voice_param_index, ParameterSink, NUM_OPERATORS, NUM_PARAMS,
    OP_AMP_MOD_SENSITIVITY, OP_EG_L1, OP_EG_R1, OP_KBD_LEVEL_SCALING_BREAK_POINT,
    OP_KBD_LEVEL_SCALING_LEFT_CURVE, OP_KBD_LEVEL_SCALING_LEFT_DEPTH,
    OP_KBD_LEVEL_SCALING_RIGHT_CURVE, OP_KBD_LEVEL_SCALING_RIGHT_DEPTH, OP_KBD_RATE_SCALING,
    OP_KEY_VELOCITY_SENSITIVITY, OP_OSC_COARSE, OP_OSC_DETUNE, OP_OSC_FINE, OP_OSC_MODE,
    OP_OUTPUT_LEVEL, VOICE_ALGORITHM, VOICE_AMP_MOD_DEPTH, VOICE_FEEDBACK, VOICE_LFO_DELAY,
    VOICE_LFO_SPEED, VOICE_LFO_SYNC, VOICE_LFO_WAVEFORM, VOICE_NAME, VOICE_OSC_SYNC,
    VOICE_PITCH_EG_L1, VOICE_PITCH_EG_R1, VOICE_PITCH_MOD_DEPTH, VOICE_PITCH_MOD_SENSITIVITY,
    VOICE_TRANSPOSE,
};

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;

pub const HEADER_SIZE: usize = 6;
pub const NUM_VOICES: usize = 32;
pub const VOICE_SIZE: usize = 128;
pub const OPERATOR_SIZE: usize = 17;
pub const VOICE_TRAILER_SIZE: usize = 26;
pub const NAME_SIZE: usize = 10;

/// Size of the packed voice data.
pub const BANK_DATA_SIZE: usize = NUM_VOICES * VOICE_SIZE;

/// Framed size of a bank, from `F0` to `F7` inclusive.
pub const BANK_SIZE: usize = HEADER_SIZE + BANK_DATA_SIZE + 2;

const VOICE_TRAILER_OFFSET: usize = NUM_OPERATORS * OPERATOR_SIZE;
const NAME_OFFSET: usize = VOICE_SIZE - NAME_SIZE;

const _: () = assert!(VOICE_TRAILER_OFFSET + VOICE_TRAILER_SIZE == VOICE_SIZE);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchError {
    /// No `F0` byte in the buffer.
    MissingStart,
    /// No `F7` byte after the start of the message.
    MissingEnd,
    /// The framed message is not a 32-voice bank.
    InvalidLength(usize),
    VoiceOutOfRange(usize),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no SysEx start byte"),
            Self::MissingEnd => write!(f, "no SysEx end byte"),
            Self::InvalidLength(length) => {
                write!(f, "SysEx message is {length} bytes, expected {BANK_SIZE}")
            }
            Self::VoiceOutOfRange(index) => {
                write!(f, "voice {index} out of range, bank holds {NUM_VOICES}")
            }
        }
    }
}

/// A validated, framed 32-voice bank borrowed from a larger buffer.
#[derive(Debug, Clone, Copy)]
pub struct SysexBank<'a> {
    message: &'a [u8],
}

impl<'a> SysexBank<'a> {
    /// Locates the first SysEx message in `buffer` and checks its length.
    pub fn find(buffer: &'a [u8]) -> Result<Self, PatchError> {
        let start = buffer
            .iter()
            .position(|&b| b == SYSEX_START)
            .ok_or(PatchError::MissingStart)?;
        let length = buffer[start..]
            .iter()
            .position(|&b| b == SYSEX_END)
            .ok_or(PatchError::MissingEnd)?
            + 1;

        if length != BANK_SIZE {
            return Err(PatchError::InvalidLength(length));
        }

        Ok(Self {
            message: &buffer[start..start + length],
        })
    }

    /// The packed record of one voice.
    pub fn voice(&self, index: usize) -> Result<&'a [u8], PatchError> {
        if index >= NUM_VOICES {
            return Err(PatchError::VoiceOutOfRange(index));
        }

        let offset = HEADER_SIZE + index * VOICE_SIZE;
        Ok(&self.message[offset..offset + VOICE_SIZE])
    }

    pub fn data(&self) -> &'a [u8] {
        &self.message[HEADER_SIZE..HEADER_SIZE + BANK_DATA_SIZE]
    }

    pub fn checksum(&self) -> u8 {
        self.message[HEADER_SIZE + BANK_DATA_SIZE]
    }

    /// True if the checksum byte matches the packed data. Decoding does not
    /// depend on it.
    pub fn checksum_ok(&self) -> bool {
        let sum = self
            .data()
            .iter()
            .fold(0u8, |sum, &b| sum.wrapping_add(b & 0x7F));
        sum.wrapping_neg() & 0x7F == self.checksum()
    }

    pub fn name(&self, index: usize) -> Result<&'a [u8], PatchError> {
        Ok(&self.voice(index)?[NAME_OFFSET..])
    }
}

/// Unpacks voice `voice_index` of `bank` into `sink`.
///
/// The operator records are written to the flat indices of
/// [`operator_param_index`], so that the first record lands on the voice's
/// first operator despite the reversed block order.
pub fn unpack_voice<S: ParameterSink + ?Sized>(
    bank: &SysexBank<'_>,
    voice_index: usize,
    sink: &mut S,
) -> Result<(), PatchError> {
    let data = bank.voice(voice_index)?;

    for (op, op_data) in data[..VOICE_TRAILER_OFFSET]
        .chunks_exact(OPERATOR_SIZE)
        .enumerate()
    {
        unpack_operator(op_data, |param, value| {
            sink.set_parameter(operator_param_index(op, param), value)
        });
    }

    unpack_voice_trailer(&data[VOICE_TRAILER_OFFSET..], |param, value| {
        sink.set_parameter(voice_param_index(param), value)
    });

    let mut name = [0; NAME_SIZE];
    name.copy_from_slice(&data[NAME_OFFSET..]);
    sink.set_name(&name);

    Ok(())
}

fn unpack_operator(data: &[u8], mut set: impl FnMut(usize, i32)) {
    for i in 0..4 {
        set(OP_EG_R1 + i, byte(data[i]));
        set(OP_EG_L1 + i, byte(data[4 + i]));
    }

    set(OP_KBD_LEVEL_SCALING_BREAK_POINT, byte(data[8]));
    set(OP_KBD_LEVEL_SCALING_LEFT_DEPTH, byte(data[9]));
    set(OP_KBD_LEVEL_SCALING_RIGHT_DEPTH, byte(data[10]));

    set(OP_KBD_LEVEL_SCALING_LEFT_CURVE, bits(data[11], 0, 0x03));
    set(OP_KBD_LEVEL_SCALING_RIGHT_CURVE, bits(data[11], 2, 0x03));

    set(OP_OSC_DETUNE, bits(data[12], 3, 0x0F));
    set(OP_KBD_RATE_SCALING, bits(data[12], 0, 0x07));

    set(OP_KEY_VELOCITY_SENSITIVITY, bits(data[13], 2, 0x07));
    set(OP_AMP_MOD_SENSITIVITY, bits(data[13], 0, 0x03));

    set(OP_OUTPUT_LEVEL, byte(data[14]));

    set(OP_OSC_COARSE, bits(data[15], 1, 0x1F));
    set(OP_OSC_MODE, bits(data[15], 0, 0x01));

    set(OP_OSC_FINE, byte(data[16]));
}

fn unpack_voice_trailer(data: &[u8], mut set: impl FnMut(usize, i32)) {
    for i in 0..4 {
        set(VOICE_PITCH_EG_R1 + i, byte(data[i]));
        set(VOICE_PITCH_EG_L1 + i, byte(data[4 + i]));
    }

    set(VOICE_ALGORITHM, byte(data[8]));

    set(VOICE_FEEDBACK, bits(data[9], 0, 0x07));
    set(VOICE_OSC_SYNC, bits(data[9], 3, 0x01));

    set(VOICE_LFO_SPEED, byte(data[10]));
    set(VOICE_LFO_DELAY, byte(data[11]));
    set(VOICE_PITCH_MOD_DEPTH, byte(data[12]));
    set(VOICE_AMP_MOD_DEPTH, byte(data[13]));

    set(VOICE_PITCH_MOD_SENSITIVITY, bits(data[14], 4, 0x07));
    set(VOICE_LFO_WAVEFORM, bits(data[14], 1, 0x07));
    set(VOICE_LFO_SYNC, bits(data[14], 0, 0x01));

    set(VOICE_TRANSPOSE, byte(data[15]));
}

#[inline]
fn byte(value: u8) -> i32 {
    value as i32
}

#[inline]
fn bits(value: u8, shift: u32, mask: u8) -> i32 {
    ((value >> shift) & mask) as i32
}

/// Detached copy of one decoded voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    params: [i32; NUM_PARAMS],
    name: [u8; NAME_SIZE],
}

impl Patch {
    pub fn new() -> Self {
        Self {
            params: [0; NUM_PARAMS],
            name: [b' '; NAME_SIZE],
        }
    }

    pub fn from_bank(bank: &SysexBank<'_>, voice_index: usize) -> Result<Self, PatchError> {
        let mut patch = Self::new();
        unpack_voice(bank, voice_index, &mut patch)?;
        Ok(patch)
    }

    /// Value at a flat parameter index, 0 if out of range.
    pub fn parameter(&self, index: usize) -> i32 {
        self.params.get(index).copied().unwrap_or_default()
    }

    /// Operator parameter, `operator` being the record position in the bank.
    pub fn operator_parameter(&self, operator: usize, param: usize) -> i32 {
        self.parameter(operator_param_index(operator, param))
    }

    pub fn voice_parameter(&self, param: usize) -> i32 {
        self.parameter(voice_param_index(param))
    }

    /// Raw name bytes.
    pub fn name(&self) -> &[u8; NAME_SIZE] {
        &self.name
    }

    /// Writes every numeric parameter into `sink`.
    pub fn apply<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        let name_index = voice_param_index(VOICE_NAME);

        for (index, value) in self.params.iter().enumerate() {
            if index != name_index {
                sink.set_parameter(index, *value);
            }
        }

        sink.set_name(&self.name);
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSink for Patch {
    fn set_parameter(&mut self, index: usize, value: i32) {
        if let Some(param) = self.params.get_mut(index) {
            *param = value;
        }
    }

    fn set_name(&mut self, name: &[u8; NAME_SIZE]) {
        self.name = *name;
    }
}
