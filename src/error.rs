//! Error types for reversible circuit embedding and synthesis
//!
//! This module provides error types organized by source and operation. Each error
//! source has its own enum with specific variants; operations have wrapper enums
//! that combine only the errors they can produce.

use std::fmt;
use std::io;

// ============================================================================
// Source-Level Error Enums
// ============================================================================

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading or parsing PLA files with invalid format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// PLA file is missing the .i (inputs) directive
    MissingInputDirective,
    /// PLA file is missing the .o (outputs) directive
    MissingOutputDirective,
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: String,
    },
    /// Invalid value in .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: String,
    },
    /// Invalid character in input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// Position in the output string
        position: usize,
    },
    /// Cube dimensions don't match declared dimensions
    CubeDimensionMismatch {
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the cube
        actual_inputs: usize,
        /// Expected number of outputs
        expected_outputs: usize,
        /// Actual number of outputs in the cube
        actual_outputs: usize,
    },
    /// Label count doesn't match dimension count
    LabelCountMismatch {
        /// Type of label ("input" or "output")
        label_type: String,
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
    /// PLA file has no dimension information (no .i/.o and no cubes to infer from)
    MissingDimensions,
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA file missing .i directive and no cubes to infer from")
            }
            PLAError::MissingOutputDirective => {
                write!(f, "PLA file missing .o directive and no cubes to infer from")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::InvalidInputCharacter { character, position } => {
                write!(f, "Invalid input character '{}' at position {}", character, position)
            }
            PLAError::InvalidOutputCharacter { character, position } => {
                write!(f, "Invalid output character '{}' at position {}", character, position)
            }
            PLAError::CubeDimensionMismatch {
                expected_inputs,
                actual_inputs,
                expected_outputs,
                actual_outputs,
            } => write!(
                f,
                "Cube dimensions (inputs: {}, outputs: {}) don't match declared dimensions (inputs: {}, outputs: {})",
                actual_inputs, actual_outputs, expected_inputs, expected_outputs
            ),
            PLAError::LabelCountMismatch { label_type, expected, actual } => write!(
                f,
                "{} label count ({}) doesn't match {} count ({})",
                label_type, actual, label_type, expected
            ),
            PLAError::MissingDimensions => {
                write!(f, "PLA file has no dimension information")
            }
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while embedding an irreversible specification into a
/// reversible characteristic relation (`embed::pla`, `embed::truth_table`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    /// The cover declares zero outputs; there is nothing to embed.
    EmptyOutputSpecification,
    /// A cube's input or output width disagrees with the cover's declared dimensions.
    DimensionMismatch {
        /// What was expected (e.g. "input width")
        what: String,
        /// Expected size
        expected: usize,
        /// Actual size found
        actual: usize,
    },
    /// The cover is not embeddable as given: a fully-specified (FR/FDR) cover
    /// assigned contradictory values (both F and R) to the same input pattern.
    ContradictoryCover {
        /// Index of the output bit in conflict
        output: usize,
    },
    /// The computed wire budget `k = max(n, m + ceil(log2(mu_max)))` overflowed
    /// the variable-index range the BDD manager can allocate.
    WireBudgetOverflow {
        /// The wire count that could not be allocated
        requested: usize,
    },
    /// A constant-value argument outside {0, 1} was supplied for garbage input pinning.
    InvalidConstantValue {
        /// The offending value
        value: u8,
    },
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingError::EmptyOutputSpecification => {
                write!(f, "cover declares zero outputs, nothing to embed")
            }
            EmbeddingError::DimensionMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{} mismatch: expected {}, found {}", what, expected, actual),
            EmbeddingError::ContradictoryCover { output } => write!(
                f,
                "output {} is assigned contradictory F and R values for the same input pattern",
                output
            ),
            EmbeddingError::WireBudgetOverflow { requested } => {
                write!(f, "wire budget of {} lines exceeds the supported variable range", requested)
            }
            EmbeddingError::InvalidConstantValue { value } => {
                write!(f, "invalid constant pinning value {}, expected 0 or 1", value)
            }
        }
    }
}

impl std::error::Error for EmbeddingError {}

impl From<EmbeddingError> for io::Error {
    fn from(err: EmbeddingError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised while synthesizing a `Circuit` from a characteristic relation
/// or cover (`synth::characteristic`, `synth::mmd`, `synth::transposition`,
/// `synth::reed_muller`, `synth::esop`, `synth::swop`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// The characteristic relation handed to the synthesizer is not a
    /// bijection on the declared number of wires (fails the total/functional/
    /// bijective invariants in the data model).
    NotBijective {
        /// Number of wires the relation was checked against
        wires: usize,
    },
    /// `separate_polarities` and `negative_control_lines` were both requested;
    /// the original ESOP translator rejects this combination.
    IncompatibleEsopOptions,
    /// A synthesis routine was asked to operate on zero wires.
    EmptyCircuit,
    /// A requested wire-ordering heuristic mode is not one of the supported values.
    UnknownWireOrderMode {
        /// The mode value that was requested
        mode: u8,
    },
    /// The cycle-peeling resolver could not make progress: a cofactor expected
    /// to be non-empty after `cycle_step` was empty (would indicate a logic bug
    /// in the caller's characteristic relation rather than a user input error).
    InvariantViolation {
        /// Which step detected the violation
        step: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::NotBijective { wires } => {
                write!(f, "characteristic relation is not a bijection over {} wires", wires)
            }
            SynthesisError::IncompatibleEsopOptions => write!(
                f,
                "separate_polarities and negative_control_lines cannot both be enabled"
            ),
            SynthesisError::EmptyCircuit => write!(f, "cannot synthesize a circuit with zero wires"),
            SynthesisError::UnknownWireOrderMode { mode } => {
                write!(f, "unknown wire ordering mode {}", mode)
            }
            SynthesisError::InvariantViolation { step } => {
                write!(f, "internal invariant violated during {}", step)
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

impl From<SynthesisError> for io::Error {
    fn from(err: SynthesisError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

// ============================================================================
// Operation-Level Error Enums
// ============================================================================

/// Errors that can occur when reading PLA format data
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

/// Errors that can occur end-to-end: embed a cover, then synthesize a circuit
/// from the resulting characteristic relation. Returned by the convenience
/// pipeline entry points in `embed` and `synth`.
#[derive(Debug)]
pub enum PipelineError {
    /// Failure during PLA parsing
    Read(PLAReadError),
    /// Failure during embedding
    Embedding(EmbeddingError),
    /// Failure during synthesis
    Synthesis(SynthesisError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Read(e) => write!(f, "{}", e),
            PipelineError::Embedding(e) => write!(f, "{}", e),
            PipelineError::Synthesis(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Read(e) => Some(e),
            PipelineError::Embedding(e) => Some(e),
            PipelineError::Synthesis(e) => Some(e),
        }
    }
}

impl From<PLAReadError> for PipelineError {
    fn from(err: PLAReadError) -> Self {
        PipelineError::Read(err)
    }
}

impl From<EmbeddingError> for PipelineError {
    fn from(err: EmbeddingError) -> Self {
        PipelineError::Embedding(err)
    }
}

impl From<SynthesisError> for PipelineError {
    fn from(err: SynthesisError) -> Self {
        PipelineError::Synthesis(err)
    }
}
