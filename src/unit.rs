//! Host-facing unit.
//!
//! Wraps a single [`Voice`] behind the entry points a sample-accurate host
//! calls: initialisation against the runtime description, an interleaved
//! stereo render callback, parameter and note events and bank loading.
//!
//! Only `render` runs on the audio thread. The host must not call any other
//! method while a render is in progress.

use core::fmt;

use crate::fm::patch::{unpack_voice, PatchError, SysexBank};
use crate::fm::voice::Voice;
use crate::fm::NUM_PARAMS;
use crate::{NUM_OUTPUT_CHANNELS, SAMPLE_RATE};

const DEFAULT_NOTE: u8 = 60;

/// What the host tells the unit about the audio runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    pub sample_rate: u32,
    pub frames_per_buffer: u16,
    pub input_channels: u8,
    pub output_channels: u8,
}

impl Default for RuntimeDesc {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE as u32,
            frames_per_buffer: 64,
            input_channels: 0,
            output_channels: NUM_OUTPUT_CHANNELS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitError {
    /// The runtime sample rate is not supported.
    SampleRate(u32),
    /// The runtime output is not stereo.
    Geometry(u8),
}

impl UnitError {
    /// Numeric code reported to the host.
    pub fn code(&self) -> i8 {
        match self {
            Self::SampleRate(_) => -4,
            Self::Geometry(_) => -8,
        }
    }
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleRate(rate) => {
                write!(f, "unsupported sample rate {rate} Hz, expected {SAMPLE_RATE} Hz")
            }
            Self::Geometry(channels) => write!(
                f,
                "unsupported output geometry of {channels} channels, expected {NUM_OUTPUT_CHANNELS}"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CycleSynth {
    voice: Voice,
    note: u8,
}

impl CycleSynth {
    pub fn new() -> Self {
        Self {
            voice: Voice::new(),
            note: DEFAULT_NOTE,
        }
    }

    pub fn init(&mut self, desc: &RuntimeDesc) -> Result<(), UnitError> {
        if desc.sample_rate != SAMPLE_RATE as u32 {
            log::error!("Init failed: {}", UnitError::SampleRate(desc.sample_rate));
            return Err(UnitError::SampleRate(desc.sample_rate));
        }

        if desc.output_channels != NUM_OUTPUT_CHANNELS {
            log::error!("Init failed: {}", UnitError::Geometry(desc.output_channels));
            return Err(UnitError::Geometry(desc.output_channels));
        }

        self.voice.init(desc.sample_rate as f32);
        self.note = DEFAULT_NOTE;

        log::info!(
            "Unit initialized at {} Hz, {} frames per buffer",
            desc.sample_rate,
            desc.frames_per_buffer
        );

        Ok(())
    }

    pub fn reset(&mut self) {
        self.voice.reset();
    }

    /// Renders interleaved stereo frames, the same sample on both channels.
    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for frame in out.chunks_exact_mut(NUM_OUTPUT_CHANNELS as usize) {
            let sample = self.voice.process_sample();
            frame.fill(sample);
        }
    }

    pub fn set_parameter(&mut self, id: usize, value: i32) {
        if id >= NUM_PARAMS {
            log::debug!("Ignoring parameter {id} = {value}");
            return;
        }

        self.voice.set_parameter(id, value);
    }

    pub fn parameter(&self, id: usize) -> i32 {
        self.voice.parameter(id)
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.note = note;
        self.voice.note_on(note, velocity);
    }

    pub fn note_off(&mut self, note: u8) {
        self.voice.note_off(note);
    }

    /// Triggers the last played note.
    pub fn gate_on(&mut self, velocity: u8) {
        self.voice.note_on(self.note, velocity);
    }

    pub fn gate_off(&mut self) {
        self.voice.note_off(self.note);
    }

    /// Loads voice `voice_index` of a packed bank. On error the current patch
    /// is kept.
    pub fn load_bank(&mut self, buffer: &[u8], voice_index: usize) -> Result<(), PatchError> {
        let result = SysexBank::find(buffer).and_then(|bank| {
            if !bank.checksum_ok() {
                log::warn!("Bank checksum mismatch, loading anyway");
            }

            let name = bank.name(voice_index)?;
            unpack_voice(&bank, voice_index, &mut self.voice)?;

            log::info!(
                "Loaded voice {voice_index} '{}'",
                core::str::from_utf8(name).unwrap_or("?").trim_end()
            );

            Ok(())
        });

        if let Err(err) = result {
            log::warn!("Bank not loaded: {err}");
        }

        result
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }
}

impl Default for CycleSynth {
    fn default() -> Self {
        Self::new()
    }
}
