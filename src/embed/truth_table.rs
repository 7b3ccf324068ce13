//! Truth-table embedding for fully enumerated small specs.
//!
//! Unlike [`crate::embed::pla`], which breaks garbage-pattern ties in plain
//! enumeration order, this embedder picks each input's garbage code by
//! minimizing the Hamming distance to the input's own address. Outputs that
//! end up close (bitwise) to their input tend to need fewer controls once
//! [`crate::synth::characteristic`] peels the relation into gates.

use std::collections::{HashMap, HashSet};

use super::{ceil_log2, complete_ancilla_passthrough, index_to_cube, literal};
use crate::bdd::Bdd;
use crate::error::EmbeddingError;
use crate::rcbdd::Rcbdd;

/// Maximum number of input rows (`2^n`) this direct construction will handle.
const MAX_DIRECT_ROWS: usize = 1 << 20;

fn bits_to_index(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | (b as u64))
}

fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// A fully specified truth table: `rows[i]` is the `m`-bit output for input
/// `i`, for `i` in `0..2^n`. `rows.len()` must be a power of two.
#[derive(Debug, Clone)]
pub struct TruthTable {
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Wrap a dense set of rows. `rows.len()` must be a power of two and
    /// every row must have the same width.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, EmbeddingError> {
        if rows.is_empty() || !rows.len().is_power_of_two() {
            return Err(EmbeddingError::DimensionMismatch {
                what: "truth table row count (must be a power of two)".to_string(),
                expected: rows.len().next_power_of_two(),
                actual: rows.len(),
            });
        }
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(EmbeddingError::DimensionMismatch {
                what: "truth table row width".to_string(),
                expected: width,
                actual: rows.iter().map(|r| r.len()).max().unwrap_or(0),
            });
        }
        Ok(TruthTable { rows })
    }

    /// Number of input variables, `log2(rows.len())`.
    pub fn num_inputs(&self) -> usize {
        ceil_log2(self.rows.len() as u64)
    }

    /// Number of output variables, the width of every row.
    pub fn num_outputs(&self) -> usize {
        self.rows[0].len()
    }

    /// The underlying dense rows, `rows()[i]` giving input `i`'s output bits.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

/// Embed a fully specified truth table into a bijective characteristic
/// relation, assigning garbage codes by Hamming-distance-minimizing greedy
/// choice within each output-pattern group.
pub fn embed_truth_table(table: &TruthTable, config: &crate::config::EmbeddingConfig) -> Result<Rcbdd, EmbeddingError> {
    let n = table.num_inputs();
    let m = table.num_outputs();
    if m == 0 {
        return Err(EmbeddingError::EmptyOutputSpecification);
    }
    if table.rows.len() > MAX_DIRECT_ROWS {
        return Err(EmbeddingError::DimensionMismatch {
            what: "truth table rows (embed_truth_table enumerates every row directly)".to_string(),
            expected: MAX_DIRECT_ROWS,
            actual: table.rows.len(),
        });
    }

    let total = table.rows.len() as u64;

    let mut groups: HashMap<Vec<bool>, Vec<u64>> = HashMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        groups.entry(row.clone()).or_default().push(idx as u64);
    }

    let mu_star = groups.values().map(|g| g.len() as u64).max().unwrap_or(1).max(1);
    let extra_bits = ceil_log2(mu_star);
    let k = n.max(m + extra_bits) + config.extra_wires;
    if k > 63 {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }
    let ancilla_in = k - n;
    let garbage_out = k - m;

    // Greedily assign each group member the available garbage code closest
    // (by Hamming distance) to its own input index, processed top to bottom.
    let mut garbage_code: HashMap<u64, u64> = HashMap::new();
    for members in groups.values() {
        let mut pool: Vec<u64> = (0..(1u64 << garbage_out)).collect();
        for &idx in members {
            let (best_pos, _) = pool
                .iter()
                .enumerate()
                .min_by_key(|&(_, &code)| (hamming_distance(idx, code), code))
                .expect("garbage pool has at least as many codes as group members");
            let code = pool.remove(best_pos);
            garbage_code.insert(idx, code);
        }
    }

    let mut chi = Bdd::constant(false);
    let mut used_y: HashSet<u64> = HashSet::new();
    for idx in 0..total {
        let row = &table.rows[idx as usize];
        let code = garbage_code[&idx];

        let mut y_bits = row.clone();
        for i in 0..garbage_out {
            let bit = i < extra_bits && (code >> (extra_bits - 1 - i)) & 1 == 1;
            y_bits.push(bit);
        }
        let y_idx = bits_to_index(&y_bits);
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

    let chi = complete_ancilla_passthrough(chi, n, k, ancilla_in, config.ancilla_value, &used_y)?;

    let rcbdd = Rcbdd::from_relation(k, chi);
    if !rcbdd.is_bijective() {
        return Err(EmbeddingError::WireBudgetOverflow { requested: k });
    }
    Ok(rcbdd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbeddingConfig;

    #[test]
    fn test_rejects_non_power_of_two_rows() {
        let err = TruthTable::new(vec![vec![true], vec![false], vec![true]]).unwrap_err();
        assert!(matches!(err, EmbeddingError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = TruthTable::new(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, EmbeddingError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_embed_identity_truth_table() {
        let table = TruthTable::new(vec![vec![false], vec![true]]).unwrap();
        assert_eq!(table.num_inputs(), 1);
        assert_eq!(table.num_outputs(), 1);

        let rcbdd = embed_truth_table(&table, &EmbeddingConfig::default()).unwrap();
        assert_eq!(rcbdd.k(), 1);
        assert!(rcbdd.is_bijective());
    }

    #[test]
    fn test_embed_and_truth_table_needs_ancilla() {
        // f(a,b) = a AND b, laid out as 00->0, 01->0, 10->0, 11->1.
        let table = TruthTable::new(vec![
            vec![false],
            vec![false],
            vec![false],
            vec![true],
        ])
        .unwrap();

        let rcbdd = embed_truth_table(&table, &EmbeddingConfig::default()).unwrap();
        assert_eq!(rcbdd.k(), 3);
        assert!(rcbdd.is_bijective());
    }

    #[test]
    fn test_embed_rejects_empty_outputs() {
        let table = TruthTable::new(vec![vec![], vec![]]).unwrap();
        let err = embed_truth_table(&table, &EmbeddingConfig::default()).unwrap_err();
        assert!(matches!(err, EmbeddingError::EmptyOutputSpecification));
    }

    #[test]
    fn test_hamming_assignment_prefers_matching_garbage_bit() {
        // Two inputs (01, 10) share output pattern [false]; with one garbage
        // bit the greedy assignment should match each input's own low bit
        // rather than flip it, since that's strictly closer in Hamming
        // distance and the pool has exactly the two codes needed.
        let table = TruthTable::new(vec![
            vec![true],  // 00 -> unique pattern
            vec![false], // 01
            vec![false], // 10
            vec![true],  // 11 -> shares pattern with 00
        ])
        .unwrap();

        let rcbdd = embed_truth_table(&table, &EmbeddingConfig::default()).unwrap();
        assert!(rcbdd.is_bijective());
    }
}
