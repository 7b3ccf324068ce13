//! ESOP (Exclusive-or Sum-Of-Products) synthesis: one Toffoli gate per cube.
//!
//! An ESOP cover realizes each output as the XOR of its cubes. That maps
//! directly onto a Toffoli cascade: start with the `n` input wires plus one
//! fresh ancilla wire per output, pinned to `0`, and for every cube that sets
//! output `j`, append a gate controlled on the cube's input literals and
//! targeting output wire `j`. Running the cascade XORs in exactly the cubes
//! that match the current input, leaving each output wire holding the
//! cover's value for that output.
//!
//! Three translator modes sit on top of that base cascade, each independent
//! of the others:
//! - `negative_control_lines` (default: emit a negative-polarity control
//!   directly) vs. its `NOT; <all-positive Toffoli>; NOT` expansion.
//! - `separate_polarities`: route every negative-polarity control through a
//!   dedicated complement ancilla, computed once per input wire up front,
//!   instead of through either of the above per-cube.
//! - `share_cube_on_target`: for a cube that sets more than one output,
//!   compute its control pattern into one scratch ancilla, XOR that scratch
//!   into every set output via plain CNOTs, then uncompute the scratch back
//!   to `0` (the same gate is its own inverse) so it can be reused by the
//!   next such cube.

use crate::circuit::{Circuit, Control, Gate, WireSpec};
use crate::config::{EsopConfig, EsopReordering};
use crate::cover::{Cover, Cube, CubeType};
use crate::error::SynthesisError;
use std::collections::HashMap;

fn literal_count(cube: &Cube) -> usize {
    cube.inputs().iter().filter(|b| b.is_some()).count()
}

fn shared_literals(a: &Cube, b: &Cube) -> usize {
    a.inputs()
        .iter()
        .zip(b.inputs().iter())
        .filter(|(x, y)| matches!((x, y), (Some(xv), Some(yv)) if xv == yv))
        .count()
}

/// Orders cubes per `reordering`, trading gate count against the
/// control-set overlap between consecutive gates.
fn reorder_cubes<'a>(mut cubes: Vec<&'a Cube>, reordering: EsopReordering) -> Vec<&'a Cube> {
    let EsopReordering::Weighted { alpha, beta } = reordering else {
        return cubes;
    };
    if cubes.is_empty() {
        return cubes;
    }

    let mut ordered = Vec::with_capacity(cubes.len());
    ordered.push(cubes.remove(0));
    while !cubes.is_empty() {
        let last = *ordered.last().unwrap();
        let (best_idx, _) = cubes
            .iter()
            .enumerate()
            .map(|(i, &cube)| {
                let score = alpha * literal_count(cube) as f64
                    - beta * shared_literals(cube, last) as f64;
                (i, score)
            })
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();
        ordered.push(cubes.remove(best_idx));
    }
    ordered
}

/// Distinct input wires that appear with a negative-polarity literal in any
/// of `cubes`, each mapped to the complement-ancilla wire index that will
/// carry its negation, starting at `base`.
fn complement_wires(cubes: &[&Cube], base: usize) -> HashMap<usize, usize> {
    let mut wires: Vec<usize> = cubes
        .iter()
        .flat_map(|cube| {
            cube.inputs()
                .iter()
                .enumerate()
                .filter_map(|(i, lit)| (*lit == Some(false)).then_some(i))
        })
        .collect();
    wires.sort_unstable();
    wires.dedup();
    wires.into_iter().enumerate().map(|(rank, wire)| (wire, base + rank)).collect()
}

/// Appends one gate realizing `raw_controls -> target`, rendering negative
/// controls per `config`. `raw_controls` carries the cube's own literal
/// polarities; `complement_of` maps a wire to its precomputed complement
/// ancilla, when `config.separate_polarities` applies.
fn emit_controlled_gate(
    circuit: &mut Circuit,
    raw_controls: &[Control],
    target: usize,
    complement_of: &HashMap<usize, usize>,
    config: &EsopConfig,
) {
    if config.separate_polarities && raw_controls.iter().any(|c| !c.polarity) {
        let controls: Vec<Control> = raw_controls
            .iter()
            .map(|c| {
                if c.polarity {
                    *c
                } else {
                    Control::positive(complement_of[&c.wire])
                }
            })
            .collect();
        circuit.push(Gate::Toffoli { controls, target });
        return;
    }

    if config.negative_control_lines {
        circuit.push(Gate::Toffoli { controls: raw_controls.to_vec(), target });
        return;
    }

    let negated: Vec<usize> = raw_controls.iter().filter(|c| !c.polarity).map(|c| c.wire).collect();
    for &wire in &negated {
        circuit.push(Gate::not(wire));
    }
    let positive_controls: Vec<Control> = raw_controls.iter().map(|c| Control::positive(c.wire)).collect();
    circuit.push(Gate::Toffoli { controls: positive_controls, target });
    for &wire in &negated {
        circuit.push(Gate::not(wire));
    }
}

/// Synthesizes an ESOP circuit: `n` pass-through input wires, `m` ancilla
/// output wires, optional complement and scratch ancillas, one gate group
/// per (cube, set output bit).
pub fn esop(cover: &Cover, config: &EsopConfig) -> Result<Circuit, SynthesisError> {
    let n = cover.num_inputs();
    let m = cover.num_outputs();
    if n == 0 || m == 0 {
        return Err(SynthesisError::EmptyCircuit);
    }

    let cubes: Vec<&Cube> = cover
        .cubes()
        .filter(|cube| cube.cube_type() == CubeType::F)
        .collect();
    let cubes = reorder_cubes(cubes, config.reordering);

    let complement_of = if config.separate_polarities {
        complement_wires(&cubes, n + m)
    } else {
        HashMap::new()
    };
    let needs_scratch = config.share_cube_on_target
        && cubes.iter().any(|cube| cube.outputs().iter().filter(|&&set| set).count() > 1);

    let mut wires = Vec::with_capacity(n + m + complement_of.len() + needs_scratch as usize);
    for i in 0..n {
        wires.push(WireSpec {
            input_name: Some(format!("x{i}")),
            output_name: None,
            constant: None,
            garbage: false,
        });
    }
    for j in 0..m {
        wires.push(WireSpec {
            input_name: None,
            output_name: Some(format!("y{j}")),
            constant: Some(false),
            garbage: false,
        });
    }
    let mut complement_entries: Vec<(usize, usize)> = complement_of.iter().map(|(&w, &c)| (w, c)).collect();
    complement_entries.sort_by_key(|&(_, c)| c);
    for _ in &complement_entries {
        wires.push(WireSpec {
            input_name: None,
            output_name: None,
            constant: Some(true),
            garbage: true,
        });
    }
    let scratch = n + m + complement_entries.len();
    if needs_scratch {
        wires.push(WireSpec {
            input_name: None,
            output_name: None,
            constant: Some(false),
            garbage: true,
        });
    }

    let mut circuit = Circuit::new(wires);

    // Precompute each complement ancilla once: pinned to 1, CNOT from the
    // original wire flips it to NOT(wire); the original wire is never
    // written again by this circuit, so the complement stays valid.
    for &(wire, complement) in &complement_entries {
        circuit.push(Gate::cnot(Control::positive(wire), complement));
    }

    for cube in cubes {
        let raw_controls: Vec<Control> = cube
            .inputs()
            .iter()
            .enumerate()
            .filter_map(|(i, literal)| literal.map(|value| Control { wire: i, polarity: value }))
            .collect();
        let set_outputs: Vec<usize> = cube
            .outputs()
            .iter()
            .enumerate()
            .filter_map(|(j, &set)| set.then_some(j))
            .collect();

        if config.share_cube_on_target && set_outputs.len() > 1 {
            emit_controlled_gate(&mut circuit, &raw_controls, scratch, &complement_of, config);
            for &j in &set_outputs {
                circuit.push(Gate::cnot(Control::positive(scratch), n + j));
            }
            emit_controlled_gate(&mut circuit, &raw_controls, scratch, &complement_of, config);
        } else {
            for &j in &set_outputs {
                emit_controlled_gate(&mut circuit, &raw_controls, n + j, &complement_of, config);
            }
        }
    }

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::CoverType;

    fn simulate(circuit: &Circuit, inputs: &[bool], m: usize) -> Vec<bool> {
        let n = inputs.len();
        let mut state = inputs.to_vec();
        state.resize(circuit.num_wires(), false);
        circuit.simulate(&state)[n..n + m].to_vec()
    }

    #[test]
    fn test_esop_single_and_cube() {
        let mut cover = Cover::new(CoverType::F);
        cover.add_cube(&[Some(true), Some(true)], &[Some(true)]);
        let circuit = esop(&cover, &EsopConfig::default()).unwrap();
        assert_eq!(circuit.num_wires(), 3);
        assert_eq!(simulate(&circuit, &[true, true], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[true, false], 1), vec![false]);
        assert_eq!(simulate(&circuit, &[false, false], 1), vec![false]);
    }

    #[test]
    fn test_esop_xor_needs_two_cubes() {
        let mut cover = Cover::new(CoverType::F);
        cover.add_cube(&[Some(false), Some(true)], &[Some(true)]);
        cover.add_cube(&[Some(true), Some(false)], &[Some(true)]);
        let circuit = esop(&cover, &EsopConfig::default()).unwrap();
        assert_eq!(simulate(&circuit, &[false, true], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[true, false], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[true, true], 1), vec![false]);
        assert_eq!(simulate(&circuit, &[false, false], 1), vec![false]);
    }

    #[test]
    fn test_esop_multi_output_shares_cube() {
        let mut cover = Cover::new(CoverType::F);
        cover.add_cube(&[Some(true), None], &[Some(true), Some(true)]);
        let circuit = esop(&cover, &EsopConfig::default()).unwrap();
        assert_eq!(simulate(&circuit, &[true, false], 2), vec![true, true]);
        assert_eq!(simulate(&circuit, &[false, true], 2), vec![false, false]);
    }

    #[test]
    fn test_esop_with_weighted_reordering_still_correct() {
        let mut cover = Cover::new(CoverType::F);
        cover.add_cube(&[Some(false), Some(true), None], &[Some(true)]);
        cover.add_cube(&[Some(true), Some(false), None], &[Some(true)]);
        cover.add_cube(&[None, None, Some(true)], &[Some(true)]);
        let config = EsopConfig {
            reordering: EsopReordering::Weighted { alpha: 1.0, beta: 2.0 },
            ..EsopConfig::default()
        };
        let circuit = esop(&cover, &config).unwrap();
        assert_eq!(simulate(&circuit, &[false, true, false], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[true, false, false], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[false, false, true], 1), vec![true]);
        assert_eq!(simulate(&circuit, &[false, false, false], 1), vec![false]);
    }

    #[test]
    fn test_esop_rejects_empty_cover() {
        let cover = Cover::new(CoverType::F);
        let result = esop(&cover, &EsopConfig::default());
        assert!(result.is_err());
    }

    /// S3 variant: with `negative_control_lines=false`, a single negative
    /// literal expands to `NOT; <positive Toffoli>; NOT` instead of a
    /// single negative-control Toffoli.
    #[test]
    fn test_esop_negative_control_lines_false_expands_to_not_wrap() {
        let mut cover = Cover::with_labels(CoverType::F, &["a"], &["out"]);
        cover.add_cube(&[Some(false)], &[Some(true)]);
        let config = EsopConfig { negative_control_lines: false, ..EsopConfig::default() };
        let circuit = esop(&cover, &config).unwrap();

        assert_eq!(circuit.num_gates(), 3);
        assert!(matches!(circuit.gates()[0], Gate::Toffoli { ref controls, target: 0 } if controls.is_empty()));
        assert!(matches!(circuit.gates()[2], Gate::Toffoli { ref controls, target: 0 } if controls.is_empty()));
        match &circuit.gates()[1] {
            Gate::Toffoli { controls, target } => {
                assert_eq!(controls.len(), 1);
                assert!(controls[0].polarity);
                assert_eq!(controls[0].wire, 0);
                assert_eq!(*target, 1);
            }
            other => panic!("expected a positive-control Toffoli, got {other:?}"),
        }

        for a in [false, true] {
            assert_eq!(simulate(&circuit, &[a], 1), vec![!a], "a={a}");
        }
    }

    #[test]
    fn test_esop_separate_polarities_uses_complement_ancilla() {
        let mut cover = Cover::with_labels(CoverType::F, &["a", "b"], &["out"]);
        cover.add_cube(&[Some(false), Some(true)], &[Some(true)]);
        let config = EsopConfig { separate_polarities: true, ..EsopConfig::default() };
        let circuit = esop(&cover, &config).unwrap();

        // 2 inputs + 1 output + 1 complement ancilla for wire 0.
        assert_eq!(circuit.num_wires(), 4);
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(simulate(&circuit, &[a, b], 1), vec![!a && b], "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_esop_share_cube_on_target_still_correct_with_prior_accumulation() {
        let mut cover = Cover::new(CoverType::F);
        // First cube only touches output 0; second cube sets both outputs
        // and must still XOR correctly into output 0's already-accumulated
        // value when shared through the scratch ancilla.
        cover.add_cube(&[Some(true), Some(false)], &[Some(true), None]);
        cover.add_cube(&[Some(false), Some(true)], &[Some(true), Some(true)]);
        let config = EsopConfig { share_cube_on_target: true, ..EsopConfig::default() };
        let circuit = esop(&cover, &config).unwrap();

        for a in [false, true] {
            for b in [false, true] {
                let y0 = (a && !b) || (!a && b);
                let y1 = !a && b;
                assert_eq!(simulate(&circuit, &[a, b], 2), vec![y0, y1], "a={a} b={b}");
            }
        }
    }
}
