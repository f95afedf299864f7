//! Four-rate, four-level envelope generator.
//!
//! Each moving segment travels linearly from its start level to its target
//! level. The segment duration is `(1 - rate)^4` seconds, so rates close to 1
//! give very long segments and a rate of 1 (or above) disables the segment.
//!
//! Sustain and Idle are plateaus: while in them the output is pinned to L3 and
//! L4 respectively on every sample, whatever the previous trajectory was.

#[allow(unused_imports)]
use num_traits::float::Float;

pub const EG_R1: usize = 0;
pub const EG_R2: usize = 1;
pub const EG_R3: usize = 2;
pub const EG_R4: usize = 3;
pub const EG_L1: usize = 4;
pub const EG_L2: usize = 5;
pub const EG_L3: usize = 6;
pub const EG_L4: usize = 7;
pub const NUM_EG_PARAMS: usize = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Attack,
    Decay1,
    Decay2,
    Sustain,
    Release,
    #[default]
    Idle,
}

#[derive(Debug, Default, Clone)]
pub struct EnvelopeGenerator {
    sample_rate: f32,
    state: EnvelopeState,
    params: [f32; NUM_EG_PARAMS],
    start: f32,
    end: f32,
    value: f32,
}

impl EnvelopeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.params = [0.0; NUM_EG_PARAMS];
        self.reset();
    }

    /// Returns to Idle without touching the rates and levels.
    pub fn reset(&mut self) {
        self.state = EnvelopeState::Idle;
        self.start = 0.0;
        self.end = 0.0;
        self.value = 0.0;
    }

    /// Sets one rate or level, already scaled to `0.0..=1.0`.
    #[inline]
    pub fn set_parameter(&mut self, index: usize, value: f32) {
        if let Some(param) = self.params.get_mut(index) {
            *param = value;
        }
    }

    #[inline]
    pub fn parameter(&self, index: usize) -> f32 {
        self.params.get(index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn process(&mut self) -> f32 {
        match self.state {
            EnvelopeState::Attack => self.advance(self.params[EG_R1]),
            EnvelopeState::Decay1 => self.advance(self.params[EG_R2]),
            EnvelopeState::Decay2 => self.advance(self.params[EG_R3]),
            EnvelopeState::Sustain => self.value = self.params[EG_L3],
            EnvelopeState::Release => self.advance(self.params[EG_R4]),
            EnvelopeState::Idle => self.value = self.params[EG_L4],
        }

        self.value
    }

    pub fn gate_on(&mut self) {
        let p = self.params;

        if is_active(p[EG_R1]) {
            self.start_segment(EnvelopeState::Attack, 0.0, p[EG_L1]);
            self.value = 0.0;
        } else if is_active(p[EG_R2]) {
            self.start_segment(EnvelopeState::Decay1, p[EG_L1], p[EG_L2]);
            self.value = self.start;
        } else if is_active(p[EG_R3]) {
            self.start_segment(EnvelopeState::Decay2, p[EG_L2], p[EG_L3]);
            self.value = self.start;
        } else {
            self.state = EnvelopeState::Sustain;
            self.value = p[EG_L3];
        }
    }

    pub fn gate_off(&mut self) {
        if self.state == EnvelopeState::Idle {
            return;
        }

        if is_active(self.params[EG_R4]) {
            self.start_segment(EnvelopeState::Release, self.value, self.params[EG_L4]);
        } else {
            self.state = EnvelopeState::Idle;
            self.value = self.params[EG_L4];
        }
    }

    #[inline]
    fn start_segment(&mut self, state: EnvelopeState, start: f32, end: f32) {
        self.state = state;
        self.start = start;
        self.end = end;
    }

    #[inline]
    fn advance(&mut self, rate: f32) {
        let distance = self.end - self.start;
        let duration = (1.0 - rate).powi(4) * self.sample_rate;

        if duration > 0.0 && duration.is_finite() {
            self.value += distance / duration;
        } else {
            self.value = self.end;
        }

        // A NaN also ends the segment.
        if !((self.value - self.start).abs() < distance.abs()) {
            self.value = self.end;
            self.next_state();
        }
    }

    fn next_state(&mut self) {
        let p = self.params;

        match self.state {
            EnvelopeState::Attack if is_active(p[EG_R2]) => {
                self.start_segment(EnvelopeState::Decay1, p[EG_L1], p[EG_L2]);
            }
            EnvelopeState::Attack | EnvelopeState::Decay1 if is_active(p[EG_R3]) => {
                self.start_segment(EnvelopeState::Decay2, p[EG_L2], p[EG_L3]);
            }
            EnvelopeState::Attack | EnvelopeState::Decay1 | EnvelopeState::Decay2 => {
                self.state = EnvelopeState::Sustain;
            }
            EnvelopeState::Release => {
                self.state = EnvelopeState::Idle;
            }
            EnvelopeState::Sustain | EnvelopeState::Idle => {}
        }
    }
}

/// A rate of 1.0 or more never completes, so the segment is skipped.
#[inline]
fn is_active(rate: f32) -> bool {
    rate < 1.0
}
