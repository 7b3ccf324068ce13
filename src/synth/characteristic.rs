//! Characteristic-relation synthesizer: peels a bijective [`Rcbdd`] apart one
//! wire at a time, emitting a Toffoli-gate cascade that realizes it exactly.
//!
//! For each wire `v`, the current relation's `xv=1,yv=0` and `xv=0,yv=1`
//! cofactors describe every minterm where the circuit built so far still
//! disagrees with the target on wire `v`. A disagreement is resolved by
//! tracing it: pick a mismatched point, and alternately fix it on the
//! `x` side (solve for the unique matching `y`, since a bijection fixed on
//! every input variable has exactly one satisfying output) or the `y` side,
//! flipping wire `v` at each fix, until the trace lands back on a mismatch —
//! closing one cycle of the permutation restricted to wire `v`. Every
//! "fix" cube visited while tracing becomes one control pattern for a
//! Toffoli gate targeting `v`; `x`-side cubes accumulate into a left gate
//! group, `y`-side cubes into a right gate group. Composing those gates into
//! the relation (`compose_gate_left`/`compose_gate_right`) removes the
//! mismatch; repeating until both cofactors are empty makes wire `v` a fixed
//! point (`xv == yv` everywhere) without disturbing any wire already fixed.
//!
//! Left gates accumulate by appending (they were peeled off the front of the
//! eventual circuit); right gates accumulate by prepending (peeled off the
//! back), so the final sequence is left-gates-in-discovery-order followed by
//! right-gates-in-reverse-discovery-order — exactly the gates needed to
//! reproduce the original relation when composed left to right.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use crate::bdd::Bdd;
use crate::circuit::{Circuit, Control, Gate, WireSpec};
use crate::config::{SynthesisConfig, WireOrder};
use crate::error::SynthesisError;
use crate::rcbdd::Rcbdd;

/// Safety backstop on the number of distinct mismatch cycles processed for a
/// single wire. A real cycle count is bounded by `2^(k-1)`; this cap exists
/// only to turn a latent bug in the cycle-following logic into a reported
/// error instead of a hang.
const MAX_CYCLES_PER_WIRE: usize = 1 << 20;

/// Safety backstop on the number of ChangeLeft/ChangeRight alternations
/// while tracing a single cycle.
const MAX_CHAIN_STEPS: usize = 1 << 20;

fn literal(var: &str, value: bool) -> Bdd {
    let v = Bdd::variable(var);
    if value {
        v
    } else {
        v.not()
    }
}

fn wire_index(name: &str) -> usize {
    name[1..].parse().expect("rcbdd variable names are always '<x|y><index>'")
}

fn cube_from_assignment(names: &[String], assignment: &BTreeMap<Arc<str>, bool>) -> Bdd {
    names.iter().fold(Bdd::constant(true), |acc, name| {
        let value = assignment
            .get(name.as_str())
            .copied()
            .expect("assignment covers every named variable");
        acc.and(&literal(name, value))
    })
}

fn cube_controls(cube: &BTreeMap<Arc<str>, bool>) -> Vec<Control> {
    cube.iter()
        .map(|(name, &value)| Control {
            wire: wire_index(name),
            polarity: value,
        })
        .collect()
}

fn pick_seed(
    source: &Bdd,
    other_x: &[String],
    other_y: &[String],
    config: &SynthesisConfig,
) -> Option<BTreeMap<Arc<str>, bool>> {
    if config.smart_pickcube {
        let pairs: Vec<(&str, &str)> = other_x
            .iter()
            .zip(other_y.iter())
            .map(|(x, y)| (x.as_str(), y.as_str()))
            .collect();
        source.pick_one_minterm_paired(&pairs, &[])
    } else {
        let mut vars: Vec<&str> = Vec::with_capacity(other_x.len() + other_y.len());
        vars.extend(other_x.iter().map(String::as_str));
        vars.extend(other_y.iter().map(String::as_str));
        source.pick_one_minterm(&vars)
    }
}

/// Cheap proxies for the spec's `heuristic_swap`/`heuristic_hamming` wire
/// orderings: rather than trial-synthesizing each candidate wire, score it
/// directly from its current cofactor pair. `Natural` always picks the
/// smallest remaining wire index.
fn choose_next_wire(chi: &Bdd, remaining: &[usize], k: usize, config: &SynthesisConfig) -> usize {
    match config.wire_order {
        WireOrder::Natural => 0,
        WireOrder::Swap => remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| {
                let xv = Rcbdd::x_name(v);
                let pos = chi.cofactor(&xv, true).node_count();
                let neg = chi.cofactor(&xv, false).node_count();
                pos.abs_diff(neg)
            })
            .map(|(i, _)| i)
            .unwrap_or(0),
        WireOrder::Hamming => remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| {
                let xv = Rcbdd::x_name(v);
                let mut cand_vars: Vec<String> = (0..k).filter(|&i| i != v).map(Rcbdd::x_name).collect();
                cand_vars.extend((0..k).map(Rcbdd::y_name));
                let names: Vec<&str> = cand_vars.iter().map(String::as_str).collect();
                let pos = chi.cofactor(&xv, true).pick_one_minterm(&names);
                let neg = chi.cofactor(&xv, false).pick_one_minterm(&names);
                match (pos, neg) {
                    (Some(p), Some(n)) => cand_vars
                        .iter()
                        .filter(|name| p.get(name.as_str()) != n.get(name.as_str()))
                        .count(),
                    _ => usize::MAX,
                }
            })
            .map(|(i, _)| i)
            .unwrap_or(0),
    }
}

/// Peel a bijective characteristic relation into a Toffoli-gate circuit.
///
/// Wires carry no input/output/ancilla labeling in the returned [`Circuit`]
/// (an [`Rcbdd`] alone doesn't know which of its wires started life as a
/// real input versus an embedding ancilla); callers that need labeled wires
/// should decorate the result using the dimensions they embedded with.
pub fn synthesize(embedding: &Rcbdd, config: &SynthesisConfig) -> Result<Circuit, SynthesisError> {
    let k = embedding.k();
    if k == 0 {
        return Err(SynthesisError::EmptyCircuit);
    }
    if !embedding.is_bijective() {
        return Err(SynthesisError::NotBijective { wires: k });
    }

    let mut rcbdd = embedding.clone();
    let mut left: Vec<Gate> = Vec::new();
    let mut right: VecDeque<Gate> = VecDeque::new();

    let all_x: Vec<String> = (0..k).map(Rcbdd::x_name).collect();
    let all_y: Vec<String> = (0..k).map(Rcbdd::y_name).collect();
    let all_x_refs: Vec<&str> = all_x.iter().map(String::as_str).collect();
    let all_y_refs: Vec<&str> = all_y.iter().map(String::as_str).collect();

    let mut remaining: Vec<usize> = (0..k).collect();
    while !remaining.is_empty() {
        let pos = choose_next_wire(rcbdd.relation(), &remaining, k, config);
        let v = remaining.remove(pos);

        let xv = Rcbdd::x_name(v);
        let yv = Rcbdd::y_name(v);
        let other_x: Vec<String> = (0..k).filter(|&i| i != v).map(Rcbdd::x_name).collect();
        let other_y: Vec<String> = (0..k).filter(|&i| i != v).map(Rcbdd::y_name).collect();

        let mut cycles = 0usize;
        loop {
            let p = rcbdd.relation().cofactor(&xv, true).cofactor(&yv, false);
            let n = rcbdd.relation().cofactor(&xv, false).cofactor(&yv, true);
            if p.is_false() && n.is_false() {
                break;
            }
            cycles += 1;
            if cycles > MAX_CYCLES_PER_WIRE {
                return Err(SynthesisError::InvariantViolation {
                    step: format!("wire {v} cycle peeling did not converge after {MAX_CYCLES_PER_WIRE} cycles"),
                });
            }

            let start_from_p = !p.is_false();
            let seed_source = if start_from_p { &p } else { &n };
            let seed = pick_seed(seed_source, &other_x, &other_y, config).ok_or_else(|| {
                SynthesisError::InvariantViolation {
                    step: format!("wire {v}: cofactor reported non-empty but yielded no minterm"),
                }
            })?;

            let mut lf_chain = Bdd::constant(false);
            let mut rf_chain = Bdd::constant(false);

            let mut cur = seed;
            let mut cur_xv = start_from_p;
            let mut cur_yv = !start_from_p;
            let mut next_is_left = start_from_p;
            let mut steps = 0usize;

            loop {
                steps += 1;
                if steps > MAX_CHAIN_STEPS {
                    return Err(SynthesisError::InvariantViolation {
                        step: format!("wire {v}: cycle trace did not close after {MAX_CHAIN_STEPS} steps"),
                    });
                }

                if next_is_left {
                    let part = cube_from_assignment(&other_x, &cur);
                    lf_chain = lf_chain.or(&part);

                    let new_xv = !cur_xv;
                    let mut restricted = rcbdd.relation().cofactor(&xv, new_xv);
                    for name in &other_x {
                        let value = cur.get(name.as_str()).copied().expect("seed assigns every other-x var");
                        restricted = restricted.cofactor(name, value);
                    }
                    let y_assignment = restricted.pick_one_minterm(&all_y_refs).ok_or_else(|| {
                        SynthesisError::InvariantViolation {
                            step: format!("wire {v}: ChangeLeft found no matching output"),
                        }
                    })?;
                    let new_yv = y_assignment.get(yv.as_str()).copied().expect("pick covers yv");
                    cur = y_assignment;
                    cur_xv = new_xv;
                    cur_yv = new_yv;
                } else {
                    let part = cube_from_assignment(&other_y, &cur);
                    rf_chain = rf_chain.or(&part);

                    let new_yv = !cur_yv;
                    let mut restricted = rcbdd.relation().cofactor(&yv, new_yv);
                    for name in &other_y {
                        let value = cur.get(name.as_str()).copied().expect("seed assigns every other-y var");
                        restricted = restricted.cofactor(name, value);
                    }
                    let x_assignment = restricted.pick_one_minterm(&all_x_refs).ok_or_else(|| {
                        SynthesisError::InvariantViolation {
                            step: format!("wire {v}: ChangeRight found no matching input"),
                        }
                    })?;
                    let new_xv = x_assignment.get(xv.as_str()).copied().expect("pick covers xv");
                    cur = x_assignment;
                    cur_xv = new_xv;
                    cur_yv = new_yv;
                }

                if cur_xv != cur_yv {
                    break;
                }
                next_is_left = !next_is_left;
            }

            for cube in lf_chain.to_cubes() {
                let gate = Gate::Toffoli {
                    controls: cube_controls(&cube),
                    target: v,
                };
                rcbdd.compose_gate_left(&gate);
                left.push(gate);
            }
            for cube in rf_chain.to_cubes() {
                let gate = Gate::Toffoli {
                    controls: cube_controls(&cube),
                    target: v,
                };
                rcbdd.compose_gate_right(&gate);
                right.push_front(gate);
            }
        }
    }

    if !rcbdd.is_identity() {
        return Err(SynthesisError::InvariantViolation {
            step: "relation was not the identity after every wire was peeled".to_string(),
        });
    }

    let mut circuit = Circuit::new(
        (0..k)
            .map(|_| WireSpec {
                input_name: None,
                output_name: None,
                constant: None,
                garbage: false,
            })
            .collect(),
    );
    for gate in left {
        circuit.push(gate);
    }
    for gate in right {
        circuit.push(gate);
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::{Cover, CoverType};
    use crate::embed::pla::embed_pla;
    use crate::config::EmbeddingConfig;

    fn assert_matches_permutation(circuit: &Circuit, k: usize, perm: &[u64]) {
        for (x, &y) in perm.iter().enumerate() {
            let input: Vec<bool> = (0..k).rev().map(|i| (x as u64 >> i) & 1 == 1).collect();
            let output = circuit.simulate(&input);
            let got: u64 = output.iter().fold(0u64, |acc, &b| (acc << 1) | (b as u64));
            assert_eq!(got, y, "mismatch for input {x:#b}");
        }
    }

    #[test]
    fn test_synthesize_identity_is_empty() {
        let rcbdd = Rcbdd::new_identity(2);
        let circuit = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap();
        assert_eq!(circuit.num_gates(), 0);
        assert_matches_permutation(&circuit, 2, &[0, 1, 2, 3]);
    }

    #[test]
    fn test_synthesize_not_gate() {
        let mut rcbdd = Rcbdd::new_identity(1);
        rcbdd.compose_gate_right(&Gate::not(0));
        let circuit = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap();
        assert_matches_permutation(&circuit, 1, &[1, 0]);
    }

    #[test]
    fn test_synthesize_cnot() {
        let mut rcbdd = Rcbdd::new_identity(2);
        rcbdd.compose_gate_right(&Gate::cnot(Control::positive(0), 1));
        let circuit = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap();
        assert_matches_permutation(&circuit, 2, &[0, 1, 3, 2]);
    }

    #[test]
    fn test_synthesize_swap_permutation() {
        let rcbdd = Rcbdd::from_permutation(2, &[0, 2, 1, 3]);
        let circuit = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap();
        assert_matches_permutation(&circuit, 2, &[0, 2, 1, 3]);
    }

    #[test]
    fn test_synthesize_and_gate_embedding_round_trips() {
        let mut cover = Cover::with_labels(CoverType::F, &["a", "b"], &["out"]);
        cover.add_cube(&[Some(true), Some(true)], &[Some(true)]);
        let embedding = embed_pla(&cover, &EmbeddingConfig::default()).unwrap();
        let k = embedding.k();

        let circuit = synthesize(&embedding, &SynthesisConfig::default()).unwrap();
        assert_eq!(circuit.num_wires(), k);

        // Re-derive the expected permutation by sampling the embedding's own
        // relation, then check the synthesized circuit reproduces it exactly.
        for x in 0..(1u64 << k) {
            let input: Vec<bool> = (0..k).rev().map(|i| (x >> i) & 1 == 1).collect();
            let mut chi = embedding.relation().clone();
            for (i, &bit) in input.iter().enumerate() {
                chi = chi.cofactor(&Rcbdd::x_name(i), bit);
            }
            let y_names: Vec<String> = (0..k).map(Rcbdd::y_name).collect();
            let y_refs: Vec<&str> = y_names.iter().map(String::as_str).collect();
            let expected = chi.pick_one_minterm(&y_refs).unwrap();
            let expected_bits: Vec<bool> = (0..k).map(|i| *expected.get(y_names[i].as_str()).unwrap()).collect();

            let got = circuit.simulate(&input);
            assert_eq!(got, expected_bits, "mismatch for input {input:?}");
        }
    }

    #[test]
    fn test_synthesize_rejects_non_bijective() {
        // A relation where x0=0 maps to both y0=0 and y0=1 is not a function.
        let chi = Bdd::variable("x0").not().or(&Bdd::variable("y0"));
        let rcbdd = Rcbdd::from_relation(1, chi);
        let err = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap_err();
        assert!(matches!(err, SynthesisError::NotBijective { wires: 1 }));
    }

    #[test]
    fn test_synthesize_with_smart_pickcube_still_correct() {
        let rcbdd = Rcbdd::from_permutation(2, &[1, 0, 3, 2]);
        let config = SynthesisConfig {
            smart_pickcube: true,
            ..SynthesisConfig::default()
        };
        let circuit = synthesize(&rcbdd, &config).unwrap();
        assert_matches_permutation(&circuit, 2, &[1, 0, 3, 2]);
    }

    #[test]
    fn test_synthesize_with_swap_wire_order() {
        let rcbdd = Rcbdd::from_permutation(2, &[3, 2, 1, 0]);
        let config = SynthesisConfig {
            wire_order: WireOrder::Swap,
            ..SynthesisConfig::default()
        };
        let circuit = synthesize(&rcbdd, &config).unwrap();
        assert_matches_permutation(&circuit, 2, &[3, 2, 1, 0]);
    }

    #[test]
    fn test_synthesize_with_hamming_wire_order() {
        let rcbdd = Rcbdd::from_permutation(3, &[0, 1, 2, 4, 3, 5, 6, 7]);
        let config = SynthesisConfig {
            wire_order: WireOrder::Hamming,
            ..SynthesisConfig::default()
        };
        let circuit = synthesize(&rcbdd, &config).unwrap();
        assert_matches_permutation(&circuit, 3, &[0, 1, 2, 4, 3, 5, 6, 7]);
    }

    #[test]
    fn test_synthesize_rejects_zero_wires() {
        let rcbdd = Rcbdd::from_relation(0, Bdd::constant(true));
        let err = synthesize(&rcbdd, &SynthesisConfig::default()).unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyCircuit));
    }
}
