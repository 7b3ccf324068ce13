//! SWOP: search over output-bit permutations, keeping the cheapest circuit
//! another synthesizer produces for any of them.
//!
//! Relabeling which truth-table column holds which output bit doesn't change
//! the function computed, but it does change the garbage-code assignment
//! [`crate::embed::truth_table::embed_truth_table`] picks and, downstream,
//! the gate cascade [`crate::synth::characteristic`] emits for it. With
//! `enable = true`, SWOP tries `max_permutations` of the `m!` column
//! orderings (or all of them, if `exhaustive` is `true`) and keeps whichever
//! produced the lowest [`crate::circuit::Circuit::quantum_cost`]; with
//! `enable = false` it skips the search and returns the identity
//! permutation's circuit, i.e. exactly what the inner synthesizer alone
//! would have produced.
//!
//! `cost_function`/`stepfunc` from the distilled spec's configuration
//! surface are not exposed here: the cost metric is fixed to
//! [`crate::circuit::Circuit::quantum_cost`], since a pluggable function
//! field would cost every `SynthesisConfig`-family struct its `Copy`/
//! `PartialEq` derive (see `DESIGN.md`).

use crate::circuit::{Circuit, Gate};
use crate::config::{EmbeddingConfig, SwopConfig, SynthesisConfig};
use crate::embed::truth_table::{embed_truth_table, TruthTable};
use crate::error::SynthesisError;
use crate::synth::characteristic;

/// Every permutation of `0..n`, generated by Heap's algorithm, truncated to
/// `cap` entries (`0` means no cap).
fn permutations(n: usize, cap: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut a: Vec<usize> = (0..n).collect();
    result.push(a.clone());
    if n == 0 {
        return result;
    }
    let mut c = vec![0usize; n];
    let mut i = 0;
    while i < n {
        if cap != 0 && result.len() >= cap {
            break;
        }
        if c[i] < i {
            if i % 2 == 0 {
                a.swap(0, i);
            } else {
                a.swap(c[i], i);
            }
            result.push(a.clone());
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    result
}

fn permute_rows(table: &TruthTable, perm: &[usize]) -> Vec<Vec<bool>> {
    table
        .rows()
        .iter()
        .map(|row| perm.iter().map(|&col| row[col]).collect())
        .collect()
}

/// After synthesizing against `perm`-relabeled outputs, wire `j < perm.len()`
/// holds original output `perm[j]` instead of output `j`. Appends unconditional
/// Fredkin (SWAP) gates to restore the caller's original output order.
fn restore_output_order(mut circuit: Circuit, perm: &[usize]) -> Circuit {
    let mut holder = perm.to_vec();
    for j in 0..holder.len() {
        if holder[j] == j {
            continue;
        }
        let q = holder.iter().position(|&v| v == j).unwrap();
        circuit.push(Gate::Fredkin {
            controls: Vec::new(),
            target: j,
            target2: q,
        });
        holder.swap(j, q);
    }
    circuit
}

/// Searches output-bit permutations of `table` and returns the cheapest
/// circuit found across all of them.
pub fn swop(
    table: &TruthTable,
    embedding_config: &EmbeddingConfig,
    synthesis_config: &SynthesisConfig,
    swop_config: &SwopConfig,
) -> Result<Circuit, SynthesisError> {
    let m = table.num_outputs();
    if m == 0 {
        return Err(SynthesisError::EmptyCircuit);
    }

    if !swop_config.enable {
        let identity: Vec<usize> = (0..m).collect();
        let embedding = embed_truth_table(table, embedding_config)?;
        return characteristic::synthesize(&embedding, synthesis_config)
            .map(|circuit| restore_output_order(circuit, &identity));
    }

    let cap = if swop_config.exhaustive { 0 } else { swop_config.max_permutations };
    let mut best: Option<Circuit> = None;
    for perm in permutations(m, cap) {
        let permuted_rows = permute_rows(table, &perm);
        let Ok(permuted_table) = TruthTable::new(permuted_rows) else {
            continue;
        };
        let Ok(embedding) = embed_truth_table(&permuted_table, embedding_config) else {
            continue;
        };
        let Ok(circuit) = characteristic::synthesize(&embedding, synthesis_config) else {
            continue;
        };
        let circuit = restore_output_order(circuit, &perm);
        if best.as_ref().map_or(true, |b| circuit.quantum_cost() < b.quantum_cost()) {
            best = Some(circuit);
        }
    }

    best.ok_or(SynthesisError::EmptyCircuit)
}
