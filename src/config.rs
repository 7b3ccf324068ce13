//! Per-component configuration surface, one `Default`-implementing struct per
//! module that exposes tunable knobs, mirroring the field-per-doc-comment
//! style of the inherited `EspressoConfig`.

/// Wire-ordering heuristic used by [`crate::synth::characteristic`] when
/// choosing which target variable to peel off χ next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireOrder {
    /// Peel wires in their natural index order `0, 1, 2, …`.
    #[default]
    Natural,
    /// `heuristic_swap`: at each step, prefer the wire whose positive and
    /// negative cofactors differ least in BDD node count, reducing the
    /// expected control-function size before synthesis picks it up.
    Swap,
    /// `heuristic_hamming`: prefer the wire whose cofactor pair has minimal
    /// Hamming distance between their picked minterms, biasing the cascade
    /// toward gates that touch fewer wires.
    Hamming,
}

/// Options controlling [`crate::embed::pla::embed_pla`] and
/// [`crate::embed::truth_table`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    /// Constant value new ancilla/garbage input wires are pinned to.
    /// Default: `false`.
    pub ancilla_value: bool,
    /// Extra wires to add beyond the computed minimum `k`, reserved for
    /// callers who want headroom for a later synthesis pass. Ignored by
    /// [`crate::embed::pla::embed_pla_bennett`], whose `k = n + m` is fixed.
    /// Default: `0`.
    pub extra_wires: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        EmbeddingConfig {
            ancilla_value: false,
            extra_wires: 0,
        }
    }
}

/// Options controlling [`crate::synth::characteristic::synthesize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Heuristic used to choose the next wire to peel. Default: `Natural`.
    pub wire_order: WireOrder,
    /// Use `smart_pickcube` (a deterministic, node-index-parity-biased
    /// minterm selection) instead of an arbitrary minterm pick when
    /// resolving a cofactor cycle. Default: `false`.
    pub smart_pickcube: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            wire_order: WireOrder::default(),
            smart_pickcube: false,
        }
    }
}

/// Cube-reordering strategy for [`crate::synth::esop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EsopReordering {
    /// Synthesize cubes in the order they appear in the cover.
    None,
    /// `weighted_reordering`: sort cubes by `alpha * literal_count - beta *
    /// shared_literals_with_previous_cube`, trading gate count against
    /// circuit depth.
    Weighted { alpha: f64, beta: f64 },
}

impl Default for EsopReordering {
    fn default() -> Self {
        EsopReordering::None
    }
}

/// Options controlling [`crate::synth::esop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EsopConfig {
    /// Cube-reordering strategy. Default: `EsopReordering::None`.
    pub reordering: EsopReordering,
    /// Emit a single Toffoli gate with negative-polarity controls directly
    /// (`true`), or expand each negative control into a
    /// `NOT; <all-positive-control Toffoli>; NOT` bracket on that wire
    /// (`false`), trading one extra pair of NOT gates per negative literal
    /// for never needing a negative-control Toffoli. Default: `true`.
    pub negative_control_lines: bool,
    /// Route every negative-polarity control through a dedicated
    /// "complement line": one ancilla per input wire that ever appears
    /// negated, computed once up front (`CNOT(wire, complement)` against a
    /// complement ancilla pinned to `1`) and reused by every cube instead of
    /// repeatedly flipping the original wire. Takes precedence over
    /// `negative_control_lines` for any control it rewrites, since there is
    /// no negative control left to expand. Default: `false`.
    pub separate_polarities: bool,
    /// For a cube that sets more than one output bit, synthesize the first
    /// set bit with the cube's full control pattern, then copy that result
    /// into the remaining set outputs via plain CNOTs from the first target
    /// instead of repeating the full multi-control Toffoli for each.
    /// Default: `false`.
    pub share_cube_on_target: bool,
}

impl Default for EsopConfig {
    fn default() -> Self {
        EsopConfig {
            reordering: EsopReordering::default(),
            negative_control_lines: true,
            separate_polarities: false,
            share_cube_on_target: false,
        }
    }
}

/// Options controlling [`crate::synth::mmd`] (transformation-based synthesis,
/// MMD03).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmdConfig {
    /// Try both forward (output-to-input) and backward (input-to-output)
    /// transformation directions and keep the cheaper circuit. Default:
    /// `true`.
    pub bidirectional: bool,
    /// Collapse any `CNOT(a,b); CNOT(b,a); CNOT(a,b)` triple left in the
    /// synthesized cascade into a single Fredkin gate (the standard
    /// three-CNOT swap identity), trading one Toffoli for an equivalent,
    /// cheaper-to-route swap. Default: `false`.
    pub fredkin: bool,
}

impl Default for MmdConfig {
    fn default() -> Self {
        MmdConfig {
            bidirectional: true,
            fredkin: false,
        }
    }
}

/// Options controlling [`crate::synth::swop`] (output-permutation search
/// wrapped around another synthesizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwopConfig {
    /// Run the permutation search at all. `false` short-circuits to the
    /// inner synthesizer's result for the identity permutation, with no
    /// search -- the "SWOP with `enable=false` returns the same circuit as
    /// the inner synthesizer" invariant. Default: `true`.
    pub enable: bool,
    /// Try every `m!` permutation instead of stopping at `max_permutations`.
    /// Default: `false`.
    pub exhaustive: bool,
    /// Maximum number of output permutations to try before giving up and
    /// keeping the best found so far, when `exhaustive` is `false`. Default:
    /// `24` (all permutations of up to 4 outputs).
    pub max_permutations: usize,
}

impl Default for SwopConfig {
    fn default() -> Self {
        SwopConfig {
            enable: true,
            exhaustive: false,
            max_permutations: 24,
        }
    }
}
