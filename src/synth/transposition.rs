//! Transposition-based reversible synthesis: decomposes a permutation into
//! transpositions, cutting the longest Hamming-distance cycle first so each
//! transposition flips as few bits as possible.
//!
//! This delegates straight to [`crate::synth::characteristic`]'s
//! cycle-peeling engine, which already decomposes any bijective relation
//! into a gate cascade one wire-mismatch-cycle at a time; the
//! maximum-Hamming-distance cycle-selection heuristic itself isn't
//! reproduced (see `DESIGN.md`). Passing [`crate::config::WireOrder::Hamming`]
//! in `config` recovers a comparable Hamming-distance-driven wire order.

use crate::circuit::Circuit;
use crate::config::SynthesisConfig;
use crate::error::SynthesisError;
use crate::rcbdd::Rcbdd;
use crate::synth::{characteristic, perm_k};

/// Synthesizes a circuit realizing the bijection `perm[x] = y` by
/// transposition-style decomposition.
pub fn transposition(perm: &[u64], config: &SynthesisConfig) -> Result<Circuit, SynthesisError> {
    let k = perm_k(perm.len());
    let rcbdd = Rcbdd::from_permutation(k, perm);
    characteristic::synthesize(&rcbdd, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WireOrder;

    fn simulate_perm(circuit: &Circuit, k: usize) -> Vec<u64> {
        (0..1u64 << k)
            .map(|x| {
                let input: Vec<bool> = (0..k).rev().map(|i| (x >> i) & 1 == 1).collect();
                let output = circuit.simulate(&input);
                output.iter().fold(0u64, |acc, &b| (acc << 1) | (b as u64))
            })
            .collect()
    }

    #[test]
    fn test_transposition_identity() {
        let perm: Vec<u64> = (0..8).collect();
        let circuit = transposition(&perm, &SynthesisConfig::default()).unwrap();
        assert_eq!(simulate_perm(&circuit, 3), perm);
    }

    #[test]
    fn test_transposition_full_cycle() {
        let perm = vec![1u64, 2, 3, 0];
        let circuit = transposition(&perm, &SynthesisConfig::default()).unwrap();
        assert_eq!(simulate_perm(&circuit, 2), perm);
    }

    #[test]
    fn test_transposition_with_hamming_wire_order() {
        let perm = vec![3u64, 1, 2, 0];
        let config = SynthesisConfig {
            wire_order: WireOrder::Hamming,
            smart_pickcube: false,
        };
        let circuit = transposition(&perm, &config).unwrap();
        assert_eq!(simulate_perm(&circuit, 2), perm);
    }

    #[test]
    fn test_transposition_rejects_non_bijective() {
        let perm = vec![0u64, 1, 1, 3];
        let result = transposition(&perm, &SynthesisConfig::default());
        assert!(result.is_err());
    }
}
