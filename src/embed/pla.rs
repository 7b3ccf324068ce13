//! PLA embedding: `embed_pla` and its Bennett-style variant.
//!
//! `embed_pla` builds the characteristic relation χ for an `n`-input,
//! `m`-output cover by enumerating the `2ⁿ` input minterms directly (the
//! cover's ON-set cubes are expanded rather than reasoned about
//! symbolically), grouping them by the output pattern they force, and
//! allocating enough extra "garbage" output wires to give every member of
//! the largest such group ("the μ-map") its own distinct tie-breaking code.
//! Minterms with no matching ON-set cube default to the all-zero output
//! pattern, matching the implicit off-set convention of an F-only PLA cover.
//!
//! `embed_pla_bennett` is a separate, much simpler construction fixing
//! `k = n + m` and writing each output directly as `yᵢ = xᵢ ⊕ fᵢ(x)` against
//! a dedicated ancilla wire rather than sharing garbage space across
//! colliding output patterns; see its doc comment for the exact formula.

use std::collections::{HashMap, HashSet};

use super::{ceil_log2, complete_ancilla_passthrough, index_to_cube, literal};
use crate::bdd::Bdd;
use crate::cover::{Cover, CubeType};
use crate::error::EmbeddingError;
use crate::rcbdd::Rcbdd;

/// Maximum number of real inputs this direct, enumeration-based construction
/// will handle; larger covers need a symbolic embedding this crate does not
/// implement.
const MAX_DIRECT_INPUTS: usize = 20;

fn expand_dont_cares(pattern: &[Option<bool>]) -> Vec<Vec<bool>> {
    let mut results = vec![Vec::with_capacity(pattern.len())];
    for &bit in pattern {
        match bit {
            Some(b) => {
                for r in results.iter_mut() {
                    r.push(b);
                }
            }
            None => {
                let mut extended = Vec::with_capacity(results.len() * 2);
                for r in &results {
                    let mut r0 = r.clone();
                    r0.push(false);
                    extended.push(r0);
                    let mut r1 = r.clone();
                    r1.push(true);
                    extended.push(r1);
                }
                results = extended;
            }
        }
    }
    results
}

fn bits_to_index(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | (b as u64))
}

/// Compute the μ-map and expanded minterm→output assignment for the cover's
/// ON-set, returning an error if two F cubes disagree on a shared minterm.
fn build_minterm_map(cover: &Cover, n: usize, m: usize) -> Result<HashMap<u64, Vec<bool>>, EmbeddingError> {
    let mut minterm_output: HashMap<u64, Vec<bool>> = HashMap::new();
    for cube in cover.cubes().filter(|c| c.cube_type() == CubeType::F) {
        let out = cube.outputs().to_vec();
        for minterm in expand_dont_cares(cube.inputs()) {
            let key = bits_to_index(&minterm);
            match minterm_output.get(&key) {
                Some(existing) if existing != &out => {
                    return Err(EmbeddingError::ContradictoryCover { output: key as usize });
                }
                _ => {
                    minterm_output.insert(key, out.clone());
                }
            }
        }
    }
    let _ = (n, m);
    Ok(minterm_output)
}

fn embed_direct(cover: &Cover, config: &EmbeddingConfig) -> Result<Rcbdd, EmbeddingError> {
    let n = cover.num_inputs();
    let m = cover.num_outputs();
    if m == 0 {
        return Err(EmbeddingError::EmptyOutputSpecification);
    }
    if n > MAX_DIRECT_INPUTS {
        return Err(EmbeddingError::DimensionMismatch {
            what: "inputs (embed_pla enumerates 2^n minterms directly)".to_string(),
            expected: MAX_DIRECT_INPUTS,
            actual: n,
        });
    }

    let minterm_output = build_minterm_map(cover, n, m)?;
    let total = 1u64 << n;
    let zero_pattern = vec![false; m];

    let mut groups: HashMap<Vec<bool>, Vec<u64>> = HashMap::new();
    for idx in 0..total {
        let pattern = minterm_output.get(&idx).cloned().unwrap_or_else(|| zero_pattern.clone());
        groups.entry(pattern).or_default().push(idx);
    }

    let mu_star = groups.values().map(|g| g.len() as u64).max().unwrap_or(1).max(1);
    let extra_bits = ceil_log2(mu_star);
    let k = n.max(m + extra_bits) + config.extra_wires;
    if k > 63 {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }
    let ancilla_in = k - n;
    let garbage_out = k - m;

    let mut tie_code: HashMap<u64, u64> = HashMap::new();
    for members in groups.values() {
        for (code, &idx) in members.iter().enumerate() {
            tie_code.insert(idx, code as u64);
        }
    }

    // y-pattern (as a k-bit index) each specified minterm is assigned to.
    let y_index_of = |idx: u64| -> u64 {
        let pattern = minterm_output.get(&idx).cloned().unwrap_or_else(|| zero_pattern.clone());
        let code = tie_code[&idx];
        let mut bits = Vec::with_capacity(k);
        bits.extend(pattern.iter().take(m).copied());
        for i in 0..garbage_out {
            let bit = i < extra_bits && (code >> (extra_bits - 1 - i)) & 1 == 1;
            bits.push(bit);
        }
        bits_to_index(&bits)
    };

    let mut chi = Bdd::constant(false);
    let mut used_y: HashSet<u64> = HashSet::new();
    for idx in 0..total {
        let y_idx = y_index_of(idx);
        used_y.insert(y_idx);

        let mut x_cube = Bdd::constant(true);
        for i in 0..ancilla_in {
            x_cube = x_cube.and(&literal(&Rcbdd::x_name(i), config.ancilla_value));
        }
        for i in 0..n {
            let bit = (idx >> (n - 1 - i)) & 1 == 1;
            x_cube = x_cube.and(&literal(&Rcbdd::x_name(ancilla_in + i), bit));
        }

        let y_cube = index_to_cube(y_idx, k, |i, v| literal(&Rcbdd::y_name(i), v));
        chi = chi.or(&x_cube.and(&y_cube));
    }

    // Any x pattern whose ancilla prefix differs from the pinned constant was
    // never part of the specified domain above; patch it in bijectively.
    let chi = complete_ancilla_passthrough(chi, n, k, ancilla_in, config.ancilla_value, &used_y)?;

    let rcbdd = Rcbdd::from_relation(k, chi);
    if !rcbdd.is_bijective() {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }
    Ok(rcbdd)
}

pub use crate::config::EmbeddingConfig;

/// Embed a PLA cover into a characteristic relation using the μ-map
/// construction: `k = max(n, m + ⌈log₂ μ*⌉)`, with garbage tie-break codes
/// assigned in enumeration order within each output-pattern group.
pub fn embed_pla(cover: &Cover, config: &EmbeddingConfig) -> Result<Rcbdd, EmbeddingError> {
    embed_direct(cover, config)
}

/// Embed a PLA cover using the Bennett-style construction: a fixed
/// `k = n + m`, with `yᵢ = xᵢ ⊕ fᵢ(x)` for the first `m` (ancilla) wires and
/// plain passthrough `yᵢ = xᵢ` for the remaining `n` (input) wires. Simpler
/// and more wasteful than [`embed_pla`] (no attempt is made to share garbage
/// space across colliding output patterns), but needed as a baseline.
///
/// `config.extra_wires` is ignored here: `k = n + m` is fixed by
/// construction, unlike [`embed_pla`]'s μ-map-derived width.
pub fn embed_pla_bennett(cover: &Cover, config: &EmbeddingConfig) -> Result<Rcbdd, EmbeddingError> {
    let n = cover.num_inputs();
    let m = cover.num_outputs();
    if m == 0 {
        return Err(EmbeddingError::EmptyOutputSpecification);
    }
    if n > MAX_DIRECT_INPUTS {
        return Err(EmbeddingError::DimensionMismatch {
            what: "inputs (embed_pla_bennett enumerates 2^n minterms directly)".to_string(),
            expected: MAX_DIRECT_INPUTS,
            actual: n,
        });
    }
    let k = n + m;
    if k > 63 {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }

    let minterm_output = build_minterm_map(cover, n, m)?;
    let zero_pattern = vec![false; m];
    let ancilla_in = m;

    let mut chi = Bdd::constant(false);
    let mut used_y: HashSet<u64> = HashSet::new();
    for idx in 0..(1u64 << n) {
        let pattern = minterm_output.get(&idx).cloned().unwrap_or_else(|| zero_pattern.clone());

        let mut x_cube = Bdd::constant(true);
        for i in 0..ancilla_in {
            x_cube = x_cube.and(&literal(&Rcbdd::x_name(i), config.ancilla_value));
        }
        for i in 0..n {
            let bit = (idx >> (n - 1 - i)) & 1 == 1;
            x_cube = x_cube.and(&literal(&Rcbdd::x_name(ancilla_in + i), bit));
        }

        let mut y_bits = Vec::with_capacity(k);
        for &f_i in pattern.iter().take(m) {
            y_bits.push(config.ancilla_value ^ f_i);
        }
        for i in 0..n {
            let bit = (idx >> (n - 1 - i)) & 1 == 1;
            y_bits.push(bit);
        }
        let y_idx = bits_to_index(&y_bits);
        used_y.insert(y_idx);

        let y_cube = index_to_cube(y_idx, k, |i, v| literal(&Rcbdd::y_name(i), v));
        chi = chi.or(&x_cube.and(&y_cube));
    }

    let chi = complete_ancilla_passthrough(chi, n, k, ancilla_in, config.ancilla_value, &used_y)?;

    let rcbdd = Rcbdd::from_relation(k, chi);
    if !rcbdd.is_bijective() {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }
    Ok(rcbdd)
}
