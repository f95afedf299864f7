//! Tests for DX7 bank decoding


use cycle_synth_dsp::fm::patch::*;
use cycle_synth_dsp::fm::voice::Voice;
use cycle_synth_dsp::fm::*;
use cycle_synth_dsp::SAMPLE_RATE;

use bank::{frame, init_record, with_voice, Record};

fn decode(record: Record) -> Patch {
    let data = with_voice(0, record);
    let bank = SysexBank::find(&data).unwrap();
    Patch::from_bank(&bank, 0).unwrap()
}

fn voice() -> Voice {
    let mut voice = Voice::new();
    voice.init(SAMPLE_RATE);
    voice
}

#[test]
fn bank_layout() {
    let data = frame(&[]);
    assert_eq!(data.len(), BANK_SIZE);

    let bank = SysexBank::find(&data).unwrap();
    assert_eq!(bank.data().len(), BANK_DATA_SIZE);
    assert_eq!(bank.voice(0).unwrap(), &data[6..134]);
    assert_eq!(bank.voice(31).unwrap(), &data[6 + 31 * 128..6 + 32 * 128]);
    assert_eq!(bank.name(3).unwrap(), b"INIT VOICE");
}

#[test]
fn coarse_and_mode_share_a_byte() {
    let mut record = init_record();

    record[15] = 0b0010_1010;
    let patch = decode(record);
    assert_eq!(patch.operator_parameter(0, OP_OSC_COARSE), 21);
    assert_eq!(patch.operator_parameter(0, OP_OSC_MODE), 0);

    record[15] = 0b0010_1011;
    let patch = decode(record);
    assert_eq!(patch.operator_parameter(0, OP_OSC_COARSE), 21);
    assert_eq!(patch.operator_parameter(0, OP_OSC_MODE), 1);
}

#[test]
fn operator_fields() {
    let mut record = init_record();
    let data = &mut record[2 * 17..3 * 17];

    data[..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    data[8] = 39;
    data[9] = 12;
    data[10] = 34;
    data[11] = 0b1110;
    data[12] = (9 << 3) | 5;
    data[13] = (6 << 2) | 3;
    data[14] = 88;
    data[15] = 3 << 1;
    data[16] = 45;

    let patch = decode(record);
    let field = |param| patch.operator_parameter(2, param);

    for i in 0..4 {
        assert_eq!(field(OP_EG_R1 + i), i as i32 + 1);
        assert_eq!(field(OP_EG_L1 + i), i as i32 + 5);
    }
    assert_eq!(field(OP_KBD_LEVEL_SCALING_BREAK_POINT), 39);
    assert_eq!(field(OP_KBD_LEVEL_SCALING_LEFT_DEPTH), 12);
    assert_eq!(field(OP_KBD_LEVEL_SCALING_RIGHT_DEPTH), 34);
    assert_eq!(field(OP_KBD_LEVEL_SCALING_LEFT_CURVE), 2);
    assert_eq!(field(OP_KBD_LEVEL_SCALING_RIGHT_CURVE), 3);
    assert_eq!(field(OP_OSC_DETUNE), 9);
    assert_eq!(field(OP_KBD_RATE_SCALING), 5);
    assert_eq!(field(OP_KEY_VELOCITY_SENSITIVITY), 6);
    assert_eq!(field(OP_AMP_MOD_SENSITIVITY), 3);
    assert_eq!(field(OP_OUTPUT_LEVEL), 88);
    assert_eq!(field(OP_OSC_COARSE), 3);
    assert_eq!(field(OP_OSC_MODE), 0);
    assert_eq!(field(OP_OSC_FINE), 45);

    // Neighbouring records are untouched.
    assert_eq!(patch.operator_parameter(1, OP_OSC_FINE), 0);
    assert_eq!(patch.operator_parameter(3, OP_EG_R1), 50);
}

#[test]
fn single_byte_fields_are_not_clamped() {
    let mut record = init_record();
    record[14] = 0x7F;
    record[110] = 0x7F;

    let patch = decode(record);
    assert_eq!(patch.operator_parameter(0, OP_OUTPUT_LEVEL), 127);
    assert_eq!(patch.voice_parameter(VOICE_ALGORITHM), 127);
}

#[test]
fn voice_fields() {
    let mut record = init_record();
    record[102..110].copy_from_slice(&[10, 20, 30, 40, 51, 52, 53, 54]);
    record[110] = 17;
    record[111] = 0b1101;
    record[112..116].copy_from_slice(&[35, 1, 12, 3]);
    record[116] = 0x5B;
    record[117] = 24;

    let patch = decode(record);
    let field = |param| patch.voice_parameter(param);

    assert_eq!(field(VOICE_PITCH_EG_R1), 10);
    assert_eq!(field(VOICE_PITCH_EG_R4), 40);
    assert_eq!(field(VOICE_PITCH_EG_L1), 51);
    assert_eq!(field(VOICE_PITCH_EG_L4), 54);
    assert_eq!(field(VOICE_ALGORITHM), 17);
    assert_eq!(field(VOICE_FEEDBACK), 5);
    assert_eq!(field(VOICE_OSC_SYNC), 1);
    assert_eq!(field(VOICE_LFO_SPEED), 35);
    assert_eq!(field(VOICE_LFO_DELAY), 1);
    assert_eq!(field(VOICE_PITCH_MOD_DEPTH), 12);
    assert_eq!(field(VOICE_AMP_MOD_DEPTH), 3);
    assert_eq!(field(VOICE_PITCH_MOD_SENSITIVITY), 5);
    assert_eq!(field(VOICE_LFO_WAVEFORM), 5);
    assert_eq!(field(VOICE_LFO_SYNC), 1);
    assert_eq!(field(VOICE_TRANSPOSE), 24);
}

#[test]
fn name_is_copied_as_is() {
    let mut record = init_record();
    record[118..].copy_from_slice(b"E.PIANO 1 ");

    let patch = decode(record);
    assert_eq!(patch.name(), b"E.PIANO 1 ");
    assert_eq!(patch.voice_parameter(VOICE_NAME), 0);

    assert_eq!(Patch::new().name(), b"          ");
}

#[test]
fn first_record_reaches_first_operator() {
    let mut record = init_record();
    record[14] = 77;
    record[5 * 17 + 14] = 33;

    let mut voice = voice();
    voice.load_bank(&with_voice(0, record), 0).unwrap();

    assert_eq!(voice.operator(0).unwrap().parameter(OP_OUTPUT_LEVEL), 77);
    assert_eq!(voice.operator(5).unwrap().parameter(OP_OUTPUT_LEVEL), 33);
    assert_eq!(voice.parameter(5 * NUM_OPERATOR_PARAMS + OP_OUTPUT_LEVEL), 77);
    assert_eq!(voice.parameter(OP_OUTPUT_LEVEL), 33);
}

#[test]
fn framing_errors() {
    let data = frame(&[]);

    assert_eq!(SysexBank::find(&[]).unwrap_err(), PatchError::MissingStart);
    assert_eq!(
        SysexBank::find(&data[1..]).unwrap_err(),
        PatchError::MissingStart
    );
    assert_eq!(
        SysexBank::find(&data[..data.len() - 1]).unwrap_err(),
        PatchError::MissingEnd
    );

    let mut short = data.clone();
    short.remove(100);
    assert_eq!(
        SysexBank::find(&short).unwrap_err(),
        PatchError::InvalidLength(BANK_SIZE - 1)
    );

    assert_eq!(
        SysexBank::find(&[0xF0, 0x43, 0xF7]).unwrap_err(),
        PatchError::InvalidLength(3)
    );

    let bank = SysexBank::find(&data).unwrap();
    assert_eq!(bank.voice(32).unwrap_err(), PatchError::VoiceOutOfRange(32));
    assert_eq!(
        Patch::from_bank(&bank, 40).unwrap_err(),
        PatchError::VoiceOutOfRange(40)
    );
}

#[test]
fn surrounding_bytes_are_skipped() {
    let mut record = init_record();
    record[16] = 61;

    let mut data = vec![0x00, 0x12, 0x7F];
    data.extend(with_voice(2, record));
    data.extend([0xF0, 0x00]);

    let bank = SysexBank::find(&data).unwrap();
    let patch = Patch::from_bank(&bank, 2).unwrap();
    assert_eq!(patch.operator_parameter(0, OP_OSC_FINE), 61);
}

#[test]
fn failed_load_keeps_parameters() {
    let mut voice = voice();
    voice.set_parameter(voice_param_index(VOICE_ALGORITHM), 12);
    voice.set_parameter(OP_OUTPUT_LEVEL, 64);

    let data = frame(&[]);

    assert_eq!(
        voice.load_bank(&data[..100], 0),
        Err(PatchError::MissingEnd)
    );
    assert_eq!(
        voice.load_bank(&data, 32),
        Err(PatchError::VoiceOutOfRange(32))
    );

    assert_eq!(voice.algorithm(), 12);
    assert_eq!(voice.parameter(OP_OUTPUT_LEVEL), 64);
}

#[test]
fn checksum() {
    let mut data = frame(&[]);
    assert!(SysexBank::find(&data).unwrap().checksum_ok());

    data[200] ^= 0x01;
    let bank = SysexBank::find(&data).unwrap();
    assert!(!bank.checksum_ok());

    // Decoding does not depend on it.
    assert!(Patch::from_bank(&bank, 1).is_ok());
}

#[test]
fn patch_and_voice_decode_alike() {
    let mut record = init_record();
    for (i, byte) in record[..102].iter_mut().enumerate() {
        *byte = (i * 7 % 100) as u8;
    }
    record[110] = 9;
    record[111] = 0b1011;

    let data = with_voice(31, record);
    let bank = SysexBank::find(&data).unwrap();

    let mut loaded = voice();
    loaded.load_bank(&data, 31).unwrap();

    let patch = Patch::from_bank(&bank, 31).unwrap();
    let mut applied = voice();
    applied.load_patch(&patch);

    for index in 0..NUM_PARAMS {
        assert_eq!(loaded.parameter(index), applied.parameter(index), "{index}");
        if index != voice_param_index(VOICE_NAME) {
            assert_eq!(loaded.parameter(index), patch.parameter(index), "{index}");
        }
    }

    assert_eq!(loaded.algorithm(), 9);
    assert_eq!(patch.parameter(NUM_PARAMS), 0);
}

#[test]
fn error_messages() {
    assert_eq!(PatchError::MissingStart.to_string(), "no SysEx start byte");
    assert_eq!(
        PatchError::InvalidLength(3).to_string(),
        "SysEx message is 3 bytes, expected 4104"
    );
    assert_eq!(
        PatchError::VoiceOutOfRange(40).to_string(),
        "voice 40 out of range, bank holds 32"
    );
}
