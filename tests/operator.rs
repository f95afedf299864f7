//! Tests for the FM operator

use cycle_synth_dsp::fm::operator::*;
use cycle_synth_dsp::fm::*;
use cycle_synth_dsp::oscillator::sine_oscillator::sine_512;
use cycle_synth_dsp::SAMPLE_RATE;

fn assert_close(a: f32, b: f32, epsilon: f32) {
    assert!((a - b).abs() < epsilon, "{a} != {b}");
}

fn operator(params: &[(usize, i32)]) -> Operator {
    let mut op = Operator::new();
    op.init(SAMPLE_RATE);
    op.set_parameter(OP_OSC_DETUNE, 7);
    op.set_parameter(OP_OSC_COARSE, 1);

    for &(index, value) in params {
        op.set_parameter(index, value);
    }

    op
}

/// Full level, envelope held at its sustain level as soon as the gate opens.
fn steady_operator(params: &[(usize, i32)]) -> Operator {
    let mut op = operator(&[
        (OP_EG_R1, 100),
        (OP_EG_R2, 100),
        (OP_EG_R3, 100),
        (OP_EG_R4, 100),
        (OP_EG_L3, 100),
        (OP_OUTPUT_LEVEL, 100),
    ]);

    for &(index, value) in params {
        op.set_parameter(index, value);
    }

    op
}

#[test]
fn note_frequencies() {
    assert_close(note_to_frequency(69), 440.0, 1e-3);
    assert_close(note_to_frequency(57), 220.0, 1e-3);
    assert_close(note_to_frequency(60), 261.6256, 1e-3);
}

#[test]
fn ratio_mode() {
    let mut op = operator(&[]);
    op.note_on(69, 127);
    assert_close(op.base_frequency(), 440.0, 1e-3);

    op.set_parameter(OP_OSC_COARSE, 0);
    assert_close(op.base_frequency(), 220.0, 1e-3);

    op.set_parameter(OP_OSC_COARSE, 2);
    op.set_parameter(OP_OSC_FINE, 50);
    assert_close(op.base_frequency(), 880.0 * 1.5, 1e-2);
}

#[test]
fn detune_offsets_note_frequency() {
    let mut op = operator(&[(OP_OSC_DETUNE, 10), (OP_OSC_COARSE, 2)]);
    op.note_on(69, 127);
    assert_close(op.base_frequency(), (440.0 + 3.0) * 2.0, 1e-2);

    op.set_parameter(OP_OSC_DETUNE, 0);
    assert_close(op.base_frequency(), (440.0 - 7.0) * 2.0, 1e-2);
}

#[test]
fn fixed_mode_ignores_note() {
    let mut op = operator(&[(OP_OSC_MODE, FREQUENCY_MODE_FIXED), (OP_OSC_COARSE, 2)]);

    op.note_on(30, 127);
    assert_close(op.base_frequency(), 100.0, 1e-3);
    op.note_on(90, 127);
    assert_close(op.base_frequency(), 100.0, 1e-3);

    op.set_parameter(OP_OSC_COARSE, 5);
    assert_close(op.base_frequency(), 10.0, 1e-4);

    op.set_parameter(OP_OSC_FINE, 50);
    assert_close(op.base_frequency(), 10.0_f32.powf(1.5), 1e-3);

    op.set_parameter(OP_OSC_DETUNE, 17);
    assert_close(op.base_frequency(), 10.1_f32.powf(1.5), 1e-3);
}

#[test]
fn frequency_follows_latched_note() {
    let mut op = operator(&[]);
    op.note_on(57, 127);
    op.note_off(57);

    op.set_parameter(OP_OSC_COARSE, 3);
    assert_eq!(op.note(), 57);
    assert_close(op.base_frequency(), 660.0, 1e-2);
}

#[test]
fn velocity_sensitivity() {
    let mut op = operator(&[(OP_KEY_VELOCITY_SENSITIVITY, 0)]);
    op.note_on(60, 1);
    assert_eq!(op.velocity(), 1.0);

    let mut op = operator(&[(OP_KEY_VELOCITY_SENSITIVITY, 7)]);
    op.note_on(60, 127);
    assert_close(op.velocity(), 1.0, 1e-6);
    op.note_on(60, 0);
    assert_close(op.velocity(), 0.0, 1e-6);
    op.note_on(60, 64);
    assert_close(op.velocity(), 64.0 / 127.0, 1e-6);

    let mut op = operator(&[(OP_KEY_VELOCITY_SENSITIVITY, 3)]);
    op.note_on(60, 0);
    assert_close(op.velocity(), 4.0 / 7.0, 1e-6);
}

#[test]
fn renders_sine_at_base_frequency() {
    let mut op = steady_operator(&[]);
    op.note_on(69, 127);

    let w0 = 440.0 / SAMPLE_RATE;
    let mut phase = 0.0_f32;

    for _ in 0..1000 {
        let out = op.process_sample(0.0, 0.5, 0.0);
        assert_close(out, sine_512(phase), 1e-3);
        phase = (phase + w0) % 1.0;
    }
}

#[test]
fn output_level_and_envelope_scale_output() {
    let mut op = steady_operator(&[(OP_OUTPUT_LEVEL, 50), (OP_EG_L3, 40)]);
    op.note_on(69, 127);
    op.process_sample(0.0, 0.5, 0.0);

    let phase = op.phase();
    let out = op.process_sample(0.0, 0.5, 0.0);
    assert_close(out, sine_512(phase) * 0.5 * 0.4, 1e-5);
}

#[test]
fn silent_without_output_level() {
    let mut op = steady_operator(&[(OP_OUTPUT_LEVEL, 0)]);
    op.note_on(69, 127);

    for _ in 0..100 {
        assert_eq!(op.process_sample(0.3, 0.5, 0.0), 0.0);
    }
}

#[test]
fn pitch_modulation_bends_increment() {
    let mut op = steady_operator(&[]);
    op.note_on(69, 127);

    op.process_sample(0.0, 0.5, 0.0);
    assert_close(op.phase(), 440.0 / SAMPLE_RATE, 1e-6);

    op.note_on(69, 127);
    op.process_sample(0.0, 0.625, 0.0);
    assert_close(op.phase(), 880.0 / SAMPLE_RATE, 1e-6);

    op.note_on(69, 127);
    op.process_sample(0.0, 0.0, 0.0);
    assert_close(op.phase(), 440.0 / 16.0 / SAMPLE_RATE, 1e-6);
}

#[test]
fn phase_modulation_offsets_phase() {
    let mut op = steady_operator(&[]);
    op.note_on(69, 127);
    op.process_sample(0.5, 0.5, 0.0);
    assert_close(op.phase(), 440.0 / SAMPLE_RATE + 0.05, 1e-6);
}

#[test]
fn amp_mod_has_no_effect() {
    let mut a = steady_operator(&[]);
    let mut b = steady_operator(&[]);
    a.note_on(60, 100);
    b.note_on(60, 100);

    for _ in 0..100 {
        assert_eq!(a.process_sample(0.1, 0.5, 0.0), b.process_sample(0.1, 0.5, 1.0));
    }
}

#[test]
fn phase_stays_wrapped() {
    let mut op = steady_operator(&[(OP_OSC_COARSE, 31)]);
    op.note_on(127, 127);

    for _ in 0..10000 {
        op.process_sample(0.9, 1.0, 0.0);
        assert!((0.0..1.0).contains(&op.phase()));
    }
}

#[test]
fn note_on_restarts_phase_and_envelope() {
    let mut op = steady_operator(&[]);
    op.note_on(69, 127);

    for _ in 0..10 {
        op.process_sample(0.0, 0.5, 0.0);
    }
    assert!(op.phase() > 0.0);

    op.note_on(69, 127);
    assert_eq!(op.phase(), 0.0);
    assert_eq!(op.process_sample(0.0, 0.5, 0.0), 0.0);
}

#[test]
fn out_of_range_parameter_is_ignored() {
    let mut op = operator(&[]);
    op.set_parameter(NUM_OPERATOR_PARAMS, 42);
    op.set_parameter(usize::MAX, 42);
    assert_eq!(op.parameter(NUM_OPERATOR_PARAMS), 0);
}

#[test]
fn envelope_rates_are_scaled() {
    let op = operator(&[(OP_EG_R2, 25), (OP_EG_L4, 80)]);
    assert_close(op.envelope().parameter(1), 0.25, 1e-6);
    assert_close(op.envelope().parameter(7), 0.8, 1e-6);
}

#[test]
fn reset_restores_defaults() {
    let mut op = steady_operator(&[]);
    op.note_on(60, 127);
    op.process_sample(0.0, 0.5, 0.0);

    op.reset();
    assert_eq!(op.phase(), 0.0);
    assert_eq!(op.base_frequency(), 440.0);
    assert_eq!(op.parameter(OP_OUTPUT_LEVEL), 100);
}
