//! Cover types for sum-of-products Boolean function representation
//!
//! This module provides the [`Cover`] type for working with covers - sum-of-products
//! (truth table) representations of a Boolean function, the input format consumed by
//! the PLA embedder ([`crate::embed::pla`]).
//!
//! # What is a Cover?
//!
//! A **cover** represents a Boolean function as a set of **cubes** (product terms). Each cube
//! specifies input conditions and corresponding output values.
//!
//! ## Key Concepts
//!
//! - **Cube**: A product term - one row in a truth table
//! - **Input pattern**: Binary values (0, 1) or don't-cares (-) for input variables
//! - **Output pattern**: Binary values showing which outputs are active
//! - **Cover type**: Specifies which sets are included (F, FD, FR, or FDR)
//!
//! ## Cover Types
//!
//! - **F Type** (ON-set only) - Specifies where outputs are 1
//! - **FD Type** (ON-set + Don't-cares) - Leaves the embedder free to assign those rows
//! - **FR Type** (ON-set + OFF-set) - Specifies both 1s and 0s explicitly
//! - **FDR Type** (Complete) - ON-set + Don't-cares + OFF-set
//!
//! # Dynamic Dimensions
//!
//! `Cover` has **dynamic dimensions** that grow automatically as cubes are added:
//! start with an empty cover (0 inputs, 0 outputs), add cubes of any size, and existing
//! cubes are padded with don't-cares as dimensions grow.
//!
//! # Examples
//!
//! ```
//! use espresso_logic::{Cover, CoverType};
//!
//! // XOR function
//! let mut cover = Cover::new(CoverType::F);
//! cover.add_cube(&[Some(false), Some(true)], &[Some(true)]);   // 01 -> 1
//! cover.add_cube(&[Some(true), Some(false)], &[Some(true)]);   // 10 -> 1
//!
//! assert_eq!(cover.num_cubes(), 2);
//! ```
//!
//! ```
//! use espresso_logic::{Cover, CoverType};
//!
//! let cover = Cover::with_labels(
//!     CoverType::F,
//!     &["a", "b", "c"],
//!     &["sum", "carry"],
//! );
//!
//! assert_eq!(cover.input_labels()[0].as_ref(), "a");
//! assert_eq!(cover.output_labels()[0].as_ref(), "sum");
//! ```
//!
//! # See Also
//!
//! - [`CoverType`] - Different types of covers (F, FD, FR, FDR)
//! - [`Cube`] - Individual product terms in a cover
//! - [`pla`] - PLA file I/O for reading/writing covers in Espresso's PLA format

// Module declarations
mod cubes;
mod labels;
pub mod pla;

// Public re-exports - core types
pub use cubes::{Cube, CubeData, CubeType};

// Import internal types for Cover implementation
use labels::LabelManager;
use std::sync::Arc;

/// Represents the type of cover (F, FD, FR, or FDR)
///
/// This type determines which sets are included in the cover:
/// - F: ON-set only
/// - FD: ON-set + Don't-care set
/// - FR: ON-set + OFF-set
/// - FDR: ON-set + Don't-care set + OFF-set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverType {
    /// On-set only (F)
    F = 1,
    /// On-set and don't-care set (FD)
    FD = 3,
    /// On-set and off-set (FR)
    FR = 5,
    /// On-set, don't-care set, and off-set (FDR)
    FDR = 7,
}

impl CoverType {
    /// Check if this type includes F (ON-set)
    pub fn has_f(&self) -> bool {
        matches!(
            self,
            CoverType::F | CoverType::FD | CoverType::FR | CoverType::FDR
        )
    }

    /// Check if this type includes D (don't-care set)
    pub fn has_d(&self) -> bool {
        matches!(self, CoverType::FD | CoverType::FDR)
    }

    /// Check if this type includes R (OFF-set)
    pub fn has_r(&self) -> bool {
        matches!(self, CoverType::FR | CoverType::FDR)
    }
}

/// A cover representing a Boolean function as sum-of-products (truth table)
///
/// `Cover` is the primary type for working with truth tables and PLA files. It represents
/// Boolean functions as a collection of **cubes** (product terms), where each cube specifies
/// input patterns and corresponding output values.
#[derive(Clone)]
pub struct Cover {
    /// Number of input variables
    num_inputs: usize,
    /// Number of output variables
    num_outputs: usize,
    /// Input label manager (prefix: 'x')
    input_labels: LabelManager<'x'>,
    /// Output label manager (prefix: 'y')
    output_labels: LabelManager<'y'>,
    /// Cubes with their type (F/D/R) and data
    cubes: Vec<Cube>,
    /// Cover type (F, FD, FR, or FDR)
    cover_type: CoverType,
}

impl Cover {
    /// Create a new empty cover with the specified type
    pub fn new(cover_type: CoverType) -> Self {
        Cover {
            num_inputs: 0,
            num_outputs: 0,
            input_labels: LabelManager::new(),
            output_labels: LabelManager::new(),
            cubes: Vec::new(),
            cover_type,
        }
    }

    /// Create a new cover with pre-defined labels
    ///
    /// This is useful when you know the variable names in advance.
    /// The dimensions are set based on the label counts.
    pub fn with_labels<S: AsRef<str>>(
        cover_type: CoverType,
        input_labels: &[S],
        output_labels: &[S],
    ) -> Self {
        let input_label_vec: Vec<Arc<str>> =
            input_labels.iter().map(|s| Arc::from(s.as_ref())).collect();
        let output_label_vec: Vec<Arc<str>> = output_labels
            .iter()
            .map(|s| Arc::from(s.as_ref()))
            .collect();

        Cover {
            num_inputs: input_label_vec.len(),
            num_outputs: output_label_vec.len(),
            input_labels: LabelManager::from_labels(input_label_vec),
            output_labels: LabelManager::from_labels(output_label_vec),
            cubes: Vec::new(),
            cover_type,
        }
    }

    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of outputs
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Get the number of cubes (for F/FD types, only counts F cubes; for FR/FDR, counts all)
    pub fn num_cubes(&self) -> usize {
        if self.cover_type.has_r() {
            self.cubes.len()
        } else {
            self.cubes
                .iter()
                .filter(|cube| cube.cube_type() == CubeType::F)
                .count()
        }
    }

    /// Get the cover type (F, FD, FR, or FDR)
    pub fn cover_type(&self) -> CoverType {
        self.cover_type
    }

    /// Get input variable labels
    pub fn input_labels(&self) -> &[Arc<str>] {
        self.input_labels.as_slice()
    }

    /// Get output variable labels
    pub fn output_labels(&self) -> &[Arc<str>] {
        self.output_labels.as_slice()
    }

    /// Iterate over cubes as `Cube` references
    ///
    /// For F-type covers, only F cubes are yielded; for FD/FR/FDR, all cubes are yielded.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        let cover_type = self.cover_type;
        self.cubes
            .iter()
            .filter(move |cube| cover_type != CoverType::F || cube.cube_type() == CubeType::F)
    }

    /// Iterate over cubes as (inputs, outputs) pairs
    pub fn cubes_iter(&self) -> impl Iterator<Item = CubeData> + '_ {
        let cover_type = self.cover_type;
        self.cubes
            .iter()
            .filter(move |cube| cover_type != CoverType::F || cube.cube_type() == CubeType::F)
            .map(|cube| {
                let inputs = cube.inputs().to_vec();
                let outputs: Vec<Option<bool>> = cube.outputs().iter().map(|&b| Some(b)).collect();
                (inputs, outputs)
            })
    }

    /// Add a cube to the cover
    ///
    /// The cover dimensions grow automatically if the cube is larger.
    /// Outputs use PLA-style notation:
    /// - `Some(true)` or `'1'` → bit set in F cube (ON-set)
    /// - `Some(false)` or `'0'` → bit set in R cube (OFF-set, only if cover type includes R)
    /// - `None` or `'-'` → bit set in D cube (Don't-care, only if cover type includes D)
    pub fn add_cube(&mut self, inputs: &[Option<bool>], outputs: &[Option<bool>]) {
        self.grow_to_fit(inputs.len(), outputs.len());

        let mut padded_inputs = inputs.to_vec();
        padded_inputs.resize(self.num_inputs, None);

        let mut padded_outputs = outputs.to_vec();
        padded_outputs.resize(self.num_outputs, None);

        // Parse outputs following Espresso C convention: split a single line into
        // separate F, D, R cubes based on each output bit's membership.
        let mut f_outputs = Vec::with_capacity(self.num_outputs);
        let mut d_outputs = Vec::with_capacity(self.num_outputs);
        let mut r_outputs = Vec::with_capacity(self.num_outputs);
        let mut has_f = false;
        let mut has_d = false;
        let mut has_r = false;

        for &out in padded_outputs.iter() {
            match out {
                Some(true) if self.cover_type.has_f() => {
                    f_outputs.push(true);
                    d_outputs.push(false);
                    r_outputs.push(false);
                    has_f = true;
                }
                Some(false) if self.cover_type.has_r() => {
                    f_outputs.push(false);
                    d_outputs.push(false);
                    r_outputs.push(true);
                    has_r = true;
                }
                None if self.cover_type.has_d() => {
                    f_outputs.push(false);
                    d_outputs.push(true);
                    r_outputs.push(false);
                    has_d = true;
                }
                _ => {
                    f_outputs.push(false);
                    d_outputs.push(false);
                    r_outputs.push(false);
                }
            }
        }

        if has_f {
            self.cubes
                .push(Cube::new(&padded_inputs, &f_outputs, CubeType::F));
        }
        if has_d {
            self.cubes
                .push(Cube::new(&padded_inputs, &d_outputs, CubeType::D));
        }
        if has_r {
            self.cubes
                .push(Cube::new(&padded_inputs, &r_outputs, CubeType::R));
        }
    }

    /// Grow the cover to fit at least the specified dimensions
    ///
    /// This extends all existing cubes. If the cover already has labels, new labels
    /// are auto-generated to maintain consistency; an unlabeled cover remains unlabeled.
    fn grow_to_fit(&mut self, min_inputs: usize, min_outputs: usize) {
        if min_inputs > self.num_inputs {
            self.num_inputs = min_inputs;

            for cube in &mut self.cubes {
                let mut new_inputs = cube.inputs.to_vec();
                new_inputs.resize(self.num_inputs, None);
                cube.inputs = new_inputs.into();
            }

            if !self.input_labels.is_empty() {
                self.input_labels.backfill_to(self.num_inputs);
            }
        }

        if min_outputs > self.num_outputs {
            self.num_outputs = min_outputs;

            for cube in &mut self.cubes {
                let mut new_outputs = cube.outputs.to_vec();
                new_outputs.resize(self.num_outputs, false);
                cube.outputs = new_outputs.into();
            }

            if !self.output_labels.is_empty() {
                self.output_labels.backfill_to(self.num_outputs);
            }
        }
    }
}

impl Default for Cover {
    fn default() -> Self {
        Self::new(CoverType::F)
    }
}

impl std::fmt::Debug for Cover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cover")
            .field("num_inputs", &self.num_inputs)
            .field("num_outputs", &self.num_outputs)
            .field("cover_type", &self.cover_type)
            .field("num_cubes", &self.num_cubes())
            .field("input_labels", &self.input_labels)
            .field("output_labels", &self.output_labels)
            .finish()
    }
}

// PLA I/O: turn a Cover into the trait objects consumed by the PLAWriter/PLAReader
// blanket impls in `crate::pla`.
impl crate::pla::PLASerialisable for Cover {
    type CubesIter<'a> = std::slice::Iter<'a, Cube>;

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    fn internal_cubes_iter(&self) -> Self::CubesIter<'_> {
        self.cubes.iter()
    }

    fn get_input_labels(&self) -> Option<&[Arc<str>]> {
        if self.input_labels.is_empty() {
            None
        } else {
            Some(self.input_labels.as_slice())
        }
    }

    fn get_output_labels(&self) -> Option<&[Arc<str>]> {
        if self.output_labels.is_empty() {
            None
        } else {
            Some(self.output_labels.as_slice())
        }
    }

    fn create_from_pla_parts(
        num_inputs: usize,
        num_outputs: usize,
        input_labels: Vec<Arc<str>>,
        output_labels: Vec<Arc<str>>,
        cubes: Vec<Cube>,
        cover_type: CoverType,
    ) -> Self {
        Cover {
            num_inputs,
            num_outputs,
            input_labels: LabelManager::from_labels(input_labels),
            output_labels: LabelManager::from_labels(output_labels),
            cubes,
            cover_type,
        }
    }
}
