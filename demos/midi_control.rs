//! Single FM voice with MIDI control.
//!
//! Pass the path of a DX7 32-voice bank (`.syx`) as the first argument to
//! load it, program change selects a voice of the bank.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use cycle_synth_dsp::fm::{voice_param_index, VOICE_ALGORITHM, VOICE_FEEDBACK};
use cycle_synth_dsp::unit::{CycleSynth, RuntimeDesc};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let bank = std::env::args().nth(1).map(|path| {
        std::fs::read(&path).unwrap_or_else(|err| panic!("Cannot read {path}: {err}"))
    });

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new(bank));
}

#[derive(Debug)]
struct App {
    synth: CycleSynth,
    bank: Option<Vec<u8>>,
    volume: f32,
}

impl App {
    pub fn new(bank: Option<Vec<u8>>) -> Self {
        Self {
            synth: CycleSynth::new(),
            bank,
            volume: 1.0,
        }
    }

    fn load_voice(&mut self, index: usize) {
        if let Some(bank) = &self.bank {
            self.synth.load_bank(bank, index).ok();
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, block_size: usize) {
        let desc = RuntimeDesc {
            sample_rate: SAMPLE_RATE,
            frames_per_buffer: block_size as u16,
            ..Default::default()
        };

        if let Err(err) = self.synth.init(&desc) {
            log::error!("Error code {}", err.code());
        }

        self.load_voice(0);
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let mut frames = vec![0.0; samples_left.len() * 2];

        self.synth.render(&mut frames);

        for (i, frame) in frames.chunks_exact(2).enumerate() {
            samples_left[i] = frame[0] * self.volume;
            samples_right[i] = frame[1] * self.volume;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.synth.note_off(message[1]);
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.synth.note_on(message[1], message[2]);
                log::info!("Note on: {}", message[1]);
            }
            0x90 => {
                self.synth.note_off(message[1]);
                log::info!("Note off: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let value = message[2] as f32 / 127.0;
                match message[1] {
                    21 => {
                        let algorithm = (value * 31.0) as i32;
                        self.synth
                            .set_parameter(voice_param_index(VOICE_ALGORITHM), algorithm);
                        log::info!("Algorithm: {}", algorithm + 1);
                    }
                    22 => {
                        let feedback = (value * 7.0) as i32;
                        self.synth
                            .set_parameter(voice_param_index(VOICE_FEEDBACK), feedback);
                        log::info!("Feedback: {feedback}");
                    }
                    28 => {
                        self.volume = value;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            0xC0 => {
                // Program change
                self.load_voice(message[1] as usize % 32);
            }
            _ => {}
        }
    }
}
