//! The 32 DX7 operator routings.
//!
//! Each algorithm is compiled into an 8x8 gate matrix. Rows and columns 0-5
//! are operators, with the row being the destination and the column the
//! source of a phase modulation. Row 6 marks the operators whose output is
//! fed into the feedback register and column 6 the operator(s) modulated by
//! it. Row 7 marks the operators mixed into the audible output.
//!
//! Operators are numbered here the way the voice numbers them: internal
//! operator 0 is DX7 OP6 and internal operator 5 is DX7 OP1.

use spin::Once;

use super::{NUM_ALGORITHMS, NUM_OPERATORS};

/// Row/column of the feedback register.
pub const FEEDBACK: usize = NUM_OPERATORS;

/// Row of the audio output.
pub const OUTPUT: usize = NUM_OPERATORS + 1;

pub const MATRIX_SIZE: usize = NUM_OPERATORS + 2;

pub type RoutingMatrix = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

static ALGORITHMS: Once<Algorithms> = Once::new();

/// Shared, read-only table of all algorithms.
pub fn algorithms() -> &'static Algorithms {
    ALGORITHMS.call_once(Algorithms::new)
}

/// Maps any raw algorithm parameter onto a valid table index.
#[inline]
pub fn clamp_algorithm(value: i32) -> usize {
    value.clamp(0, NUM_ALGORITHMS as i32 - 1) as usize
}

#[derive(Debug, Clone)]
pub struct Algorithms {
    matrix: [RoutingMatrix; NUM_ALGORITHMS],
}

impl Algorithms {
    pub fn new() -> Self {
        let mut matrix = [[[false; MATRIX_SIZE]; MATRIX_SIZE]; NUM_ALGORITHMS];

        for (routing, topology) in matrix.iter_mut().zip(TOPOLOGIES.iter()) {
            topology.compile(routing);
        }

        Self { matrix }
    }

    /// Out of range algorithms are clamped to the last one.
    #[inline]
    pub fn matrix(&self, algorithm: usize) -> &RoutingMatrix {
        &self.matrix[algorithm.min(NUM_ALGORITHMS - 1)]
    }

    #[inline]
    pub fn modulates(&self, algorithm: usize, destination: usize, source: usize) -> bool {
        source < NUM_OPERATORS && self.gate(algorithm, destination, source)
    }

    #[inline]
    pub fn receives_feedback(&self, algorithm: usize, op: usize) -> bool {
        self.gate(algorithm, op, FEEDBACK)
    }

    #[inline]
    pub fn feeds_feedback(&self, algorithm: usize, op: usize) -> bool {
        self.gate(algorithm, FEEDBACK, op)
    }

    #[inline]
    pub fn is_carrier(&self, algorithm: usize, op: usize) -> bool {
        self.gate(algorithm, OUTPUT, op)
    }

    /// True if the operator phase-modulates at least one other operator.
    pub fn is_modulator(&self, algorithm: usize, op: usize) -> bool {
        (0..NUM_OPERATORS).any(|destination| {
            destination != op && self.modulates(algorithm, destination, op)
        })
    }

    #[inline]
    fn gate(&self, algorithm: usize, row: usize, column: usize) -> bool {
        row < MATRIX_SIZE && column < MATRIX_SIZE && self.matrix(algorithm)[row][column]
    }
}

impl Default for Algorithms {
    fn default() -> Self {
        Self::new()
    }
}

/// One algorithm as drawn on the DX7 panel, using DX7 operator numbers (1-6).
struct Topology {
    /// `(source, destination)` phase modulation links.
    modulations: &'static [(u8, u8)],
    carriers: &'static [u8],
    /// `(source, destination)` of the feedback loop.
    feedback: (u8, u8),
}

impl Topology {
    fn compile(&self, routing: &mut RoutingMatrix) {
        for &(source, destination) in self.modulations {
            routing[internal(destination)][internal(source)] = true;
        }

        for &carrier in self.carriers {
            routing[OUTPUT][internal(carrier)] = true;
        }

        let (source, destination) = self.feedback;
        routing[FEEDBACK][internal(source)] = true;
        routing[internal(destination)][FEEDBACK] = true;
    }
}

#[inline]
const fn internal(dx_operator: u8) -> usize {
    NUM_OPERATORS - dx_operator as usize
}

#[rustfmt::skip]
const TOPOLOGIES: [Topology; NUM_ALGORITHMS] = [
    // 1
    Topology { modulations: &[(2, 1), (6, 5), (5, 4), (4, 3)], carriers: &[1, 3], feedback: (6, 6) },
    // 2
    Topology { modulations: &[(2, 1), (6, 5), (5, 4), (4, 3)], carriers: &[1, 3], feedback: (2, 2) },
    // 3
    Topology { modulations: &[(3, 2), (2, 1), (6, 5), (5, 4)], carriers: &[1, 4], feedback: (6, 6) },
    // 4
    Topology { modulations: &[(3, 2), (2, 1), (6, 5), (5, 4)], carriers: &[1, 4], feedback: (4, 6) },
    // 5
    Topology { modulations: &[(2, 1), (4, 3), (6, 5)], carriers: &[1, 3, 5], feedback: (6, 6) },
    // 6
    Topology { modulations: &[(2, 1), (4, 3), (6, 5)], carriers: &[1, 3, 5], feedback: (5, 6) },
    // 7
    Topology { modulations: &[(2, 1), (4, 3), (5, 3), (6, 5)], carriers: &[1, 3], feedback: (6, 6) },
    // 8
    Topology { modulations: &[(2, 1), (4, 3), (5, 3), (6, 5)], carriers: &[1, 3], feedback: (4, 4) },
    // 9
    Topology { modulations: &[(2, 1), (4, 3), (5, 3), (6, 5)], carriers: &[1, 3], feedback: (2, 2) },
    // 10
    Topology { modulations: &[(3, 2), (2, 1), (5, 4), (6, 4)], carriers: &[1, 4], feedback: (3, 3) },
    // 11
    Topology { modulations: &[(3, 2), (2, 1), (5, 4), (6, 4)], carriers: &[1, 4], feedback: (6, 6) },
    // 12
    Topology { modulations: &[(2, 1), (4, 3), (5, 3), (6, 3)], carriers: &[1, 3], feedback: (2, 2) },
    // 13
    Topology { modulations: &[(2, 1), (4, 3), (5, 3), (6, 3)], carriers: &[1, 3], feedback: (6, 6) },
    // 14
    Topology { modulations: &[(2, 1), (4, 3), (5, 4), (6, 4)], carriers: &[1, 3], feedback: (6, 6) },
    // 15
    Topology { modulations: &[(2, 1), (4, 3), (5, 4), (6, 4)], carriers: &[1, 3], feedback: (2, 2) },
    // 16
    Topology { modulations: &[(2, 1), (3, 1), (5, 1), (4, 3), (6, 5)], carriers: &[1], feedback: (6, 6) },
    // 17
    Topology { modulations: &[(2, 1), (3, 1), (5, 1), (4, 3), (6, 5)], carriers: &[1], feedback: (2, 2) },
    // 18
    Topology { modulations: &[(2, 1), (3, 1), (4, 1), (5, 4), (6, 5)], carriers: &[1], feedback: (3, 3) },
    // 19
    Topology { modulations: &[(3, 2), (2, 1), (6, 4), (6, 5)], carriers: &[1, 4, 5], feedback: (6, 6) },
    // 20
    Topology { modulations: &[(3, 1), (3, 2), (5, 4), (6, 4)], carriers: &[1, 2, 4], feedback: (3, 3) },
    // 21
    Topology { modulations: &[(3, 1), (3, 2), (6, 4), (6, 5)], carriers: &[1, 2, 4, 5], feedback: (3, 3) },
    // 22
    Topology { modulations: &[(2, 1), (6, 3), (6, 4), (6, 5)], carriers: &[1, 3, 4, 5], feedback: (6, 6) },
    // 23
    Topology { modulations: &[(3, 2), (6, 4), (6, 5)], carriers: &[1, 2, 4, 5], feedback: (6, 6) },
    // 24
    Topology { modulations: &[(6, 3), (6, 4), (6, 5)], carriers: &[1, 2, 3, 4, 5], feedback: (6, 6) },
    // 25
    Topology { modulations: &[(6, 4), (6, 5)], carriers: &[1, 2, 3, 4, 5], feedback: (6, 6) },
    // 26
    Topology { modulations: &[(3, 2), (5, 4), (6, 4)], carriers: &[1, 2, 4], feedback: (6, 6) },
    // 27
    Topology { modulations: &[(3, 2), (5, 4), (6, 4)], carriers: &[1, 2, 4], feedback: (3, 3) },
    // 28
    Topology { modulations: &[(2, 1), (5, 4), (4, 3)], carriers: &[1, 3, 6], feedback: (5, 5) },
    // 29
    Topology { modulations: &[(4, 3), (6, 5)], carriers: &[1, 2, 3, 5], feedback: (6, 6) },
    // 30
    Topology { modulations: &[(5, 4), (4, 3)], carriers: &[1, 2, 3, 6], feedback: (5, 5) },
    // 31
    Topology { modulations: &[(6, 5)], carriers: &[1, 2, 3, 4, 5], feedback: (6, 6) },
    // 32
    Topology { modulations: &[], carriers: &[1, 2, 3, 4, 5, 6], feedback: (6, 6) },
];
