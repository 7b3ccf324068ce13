//! The reversible circuit data model: gates, wire metadata, and the ordered
//! gate sequence every synthesizer in [`crate::synth`] emits.

use std::fmt;

/// Per-wire metadata attached to a synthesized circuit.
///
/// A wire is either one of the original function's inputs/outputs, or an
/// ancilla introduced to make the embedding bijective. Ancillas enter the
/// circuit pinned to a constant and may leave it as garbage (a value the
/// caller has no use for but that is required to keep the map reversible).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireSpec {
    /// Human-readable input-side label, e.g. `"a"`, or `None` for a wire with
    /// no originating input (a fresh ancilla).
    pub input_name: Option<String>,
    /// Human-readable output-side label, e.g. `"out"`, or `None` if this wire
    /// carries no meaningful output (pure garbage).
    pub output_name: Option<String>,
    /// The constant value this wire is initialized to at the start of the
    /// circuit, or `None` if it carries a free (caller-supplied) input value.
    pub constant: Option<bool>,
    /// Whether the final value on this wire is garbage (not part of the
    /// function's specified output) and may be safely discarded or reused.
    pub garbage: bool,
}

impl WireSpec {
    /// A wire that carries one of the original function's free inputs straight
    /// through, with no ancilla role.
    pub fn input_output(name: impl Into<String>) -> Self {
        let name = name.into();
        WireSpec {
            input_name: Some(name.clone()),
            output_name: Some(name),
            constant: None,
            garbage: false,
        }
    }

    /// A fresh ancilla wire, pinned to `constant` at input and expected to
    /// carry garbage at output.
    pub fn ancilla(constant: bool) -> Self {
        WireSpec {
            input_name: None,
            output_name: None,
            constant: Some(constant),
            garbage: true,
        }
    }
}

/// A single control line on a [`Gate`]: a wire index together with the
/// polarity it must hold for the gate to fire (`true` = positive control,
/// `false` = negative/bubbled control).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub wire: usize,
    pub polarity: bool,
}

impl Control {
    pub fn positive(wire: usize) -> Self {
        Control {
            wire,
            polarity: true,
        }
    }

    pub fn negative(wire: usize) -> Self {
        Control {
            wire,
            polarity: false,
        }
    }
}

/// A generalized Toffoli gate (CCC...NOT) or a Fredkin (controlled-SWAP).
///
/// A Toffoli gate flips its `target` wire iff every control in `controls`
/// matches its required polarity. A Fredkin gate swaps `target` and
/// `target2` under the same condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Toffoli {
        controls: Vec<Control>,
        target: usize,
    },
    Fredkin {
        controls: Vec<Control>,
        target: usize,
        target2: usize,
    },
}

impl Gate {
    /// A plain NOT gate (a Toffoli gate with no controls).
    pub fn not(target: usize) -> Self {
        Gate::Toffoli {
            controls: Vec::new(),
            target,
        }
    }

    /// A CNOT gate (a Toffoli gate with a single control).
    pub fn cnot(control: Control, target: usize) -> Self {
        Gate::Toffoli {
            controls: vec![control],
            target,
        }
    }

    /// Number of control lines on this gate (0 for a Fredkin, since its
    /// conditioning controls are tracked the same way as a Toffoli's).
    pub fn num_controls(&self) -> usize {
        match self {
            Gate::Toffoli { controls, .. } => controls.len(),
            Gate::Fredkin { controls, .. } => controls.len(),
        }
    }

    /// Every wire this gate reads or writes, target(s) last.
    pub fn wires(&self) -> Vec<usize> {
        match self {
            Gate::Toffoli { controls, target } => {
                let mut wires: Vec<usize> = controls.iter().map(|c| c.wire).collect();
                wires.push(*target);
                wires
            }
            Gate::Fredkin {
                controls,
                target,
                target2,
            } => {
                let mut wires: Vec<usize> = controls.iter().map(|c| c.wire).collect();
                wires.push(*target);
                wires.push(*target2);
                wires
            }
        }
    }

    /// Apply this gate to a bit assignment, mutating it in place.
    pub fn apply(&self, state: &mut [bool]) {
        match self {
            Gate::Toffoli { controls, target } => {
                if controls
                    .iter()
                    .all(|c| state[c.wire] == c.polarity)
                {
                    state[*target] = !state[*target];
                }
            }
            Gate::Fredkin {
                controls,
                target,
                target2,
            } => {
                if controls
                    .iter()
                    .all(|c| state[c.wire] == c.polarity)
                {
                    state.swap(*target, *target2);
                }
            }
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_controls = |controls: &[Control]| -> String {
            controls
                .iter()
                .map(|c| {
                    if c.polarity {
                        format!("+{}", c.wire)
                    } else {
                        format!("-{}", c.wire)
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        };
        match self {
            Gate::Toffoli { controls, target } => {
                write!(f, "T[{}]->{}", fmt_controls(controls), target)
            }
            Gate::Fredkin {
                controls,
                target,
                target2,
            } => write!(
                f,
                "F[{}]->({},{})",
                fmt_controls(controls),
                target,
                target2
            ),
        }
    }
}

/// An ordered sequence of gates over a fixed set of wires, plus the wire
/// metadata needed to interpret inputs/outputs/garbage/constants.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    wires: Vec<WireSpec>,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit over the given wire specifications.
    pub fn new(wires: Vec<WireSpec>) -> Self {
        Circuit {
            wires,
            gates: Vec::new(),
        }
    }

    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn wires(&self) -> &[WireSpec] {
        &self.wires
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Append a gate to the end of the circuit.
    pub fn push(&mut self, gate: Gate) {
        debug_assert!(
            gate.wires().iter().all(|&w| w < self.wires.len()),
            "gate references a wire index out of range"
        );
        self.gates.push(gate);
    }

    /// Append every gate of `other` (used by cycle-peeling synthesizers that
    /// build up a circuit a control-function cascade at a time).
    pub fn extend(&mut self, other: Circuit) {
        self.gates.extend(other.gates);
    }

    /// Prepend a gate (the cofactor-cycle peeling algorithm builds the left
    /// half of the circuit back-to-front).
    pub fn push_front(&mut self, gate: Gate) {
        self.gates.insert(0, gate);
    }

    /// Total gate cost counting every control line plus one per target, a
    /// common cost metric for reversible circuits (Toffoli gate count
    /// weighted by arity).
    pub fn quantum_cost(&self) -> usize {
        self.gates
            .iter()
            .map(|g| match g {
                Gate::Toffoli { controls, .. } => controls.len() + 1,
                Gate::Fredkin { controls, .. } => controls.len() + 2,
            })
            .sum()
    }

    /// Simulate the circuit on a single input assignment, returning the
    /// resulting wire values. `input` must have `num_wires()` entries, with
    /// ancilla wires already set to their pinned constants.
    pub fn simulate(&self, input: &[bool]) -> Vec<bool> {
        let mut state = input.to_vec();
        for gate in &self.gates {
            gate.apply(&mut state);
        }
        state
    }
}
