//! # Reversible Logic Synthesis
//!
//! This crate synthesizes **reversible logic circuits** (cascades of Toffoli and
//! Fredkin gates) from irreversible Boolean specifications: PLA covers and truth
//! tables.
//!
//! ## Pipeline
//!
//! ```text
//! Cover  ──embed::pla──┐
//!                      ├─► Rcbdd (characteristic relation χ) ──synth::characteristic──► Circuit
//! TruthTable ──embed::truth_table──┘
//!
//! TruthTable ──synth::{mmd, transposition, reed_muller}──► Circuit
//! ESOP Cover ──synth::esop──► Circuit
//! ```
//!
//! An irreversible function `f: {0,1}ⁿ → {0,1}ᵐ` is not generally a bijection
//! (it may be many-to-one, and may leave some output combinations unspecified).
//! [`embed::pla::embed_pla`] *embeds* such an `f` into a bijective relation χ on
//! `k = max(n, m + ⌈log₂ μ*⌉)` wires, where `μ*` is the worst-case fan-in
//! multiplicity of any output pattern. [`synth::characteristic`] then peels χ
//! apart one variable at a time, emitting a [`circuit::Circuit`] of reversible
//! gates that realizes it exactly.
//!
//! ## Modules
//!
//! - [`bdd`] — hash-consed binary decision diagram engine (ITE, cofactor,
//!   compose, minterm counting); the foundation every other module builds on.
//! - [`rcbdd`] — characteristic relations χ(x,y) over paired `x`/`y`/`z`
//!   variable families, with the compose/move operations synthesis needs.
//! - [`embed`] — turns a [`Cover`] or truth table into a χ on the minimum
//!   number of wires.
//! - [`synth`] — turns a χ, or a truth table/cover directly, into a
//!   [`circuit::Circuit`].
//! - [`circuit`] — the `Gate`/`Circuit` data model shared by every synthesizer.
//! - [`config`] — per-component option structs (wire-order heuristics, ESOP
//!   reordering, MMD and SWOP knobs).
//! - [`error`] — the manual `Display`/`Error` enums used throughout.
//! - [`cover`], [`pla`] — the inherited cube/cover data structures and PLA
//!   file reader/writer.
//! - [`stats`] — optional synthesis statistics (runtime, BDD node counts).
//!
//! ## Example
//!
//! ```
//! use espresso_logic::cover::{Cover, CoverType};
//! use espresso_logic::embed::pla::embed_pla;
//! use espresso_logic::synth::characteristic::synthesize;
//! use espresso_logic::config::{EmbeddingConfig, SynthesisConfig};
//!
//! // A 2-input, 1-output AND gate, specified as an ON-set cover.
//! let mut cover = Cover::with_labels(CoverType::F, &["a", "b"], &["out"]);
//! cover.add_cube(&[Some(true), Some(true)], &[Some(true)]);
//!
//! let embedding = embed_pla(&cover, &EmbeddingConfig::default()).unwrap();
//! let circuit = synthesize(&embedding, &SynthesisConfig::default()).unwrap();
//! assert!(circuit.num_wires() >= 2);
//! ```

pub mod bdd;
pub mod circuit;
pub mod config;
pub mod cover;
pub mod embed;
pub mod error;
pub mod pla;
pub mod rcbdd;
pub mod stats;
pub mod synth;

pub use bdd::Bdd;
pub use circuit::{Circuit, Gate, WireSpec};
pub use cover::{Cover, CoverType, Cube, CubeType};
pub use error::{EmbeddingError, PipelineError, SynthesisError};
pub use pla::{PLAReader, PLAWriter};
pub use rcbdd::Rcbdd;
