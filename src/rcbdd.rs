//! Reversible characteristic relations: a BDD over paired `x`/`y` (and
//! scratch `z`) variable families representing a (partially synthesized)
//! bijection on `k` wires.
//!
//! A characteristic relation χ(x,y) holds iff input assignment `x` maps to
//! output assignment `y`. [`crate::synth::characteristic`] repeatedly
//! replaces χ by `gL · χ · gR` for single-gate relations `gL`/`gR` until χ is
//! the identity, accumulating the peeled gates into a [`crate::circuit::Circuit`].
//! Composing two relations that share a `y`/`x` boundary needs to existentially
//! quantify that boundary out, which only behaves correctly if the two sides
//! are first moved apart onto distinct variables — that's what the `z{i}`
//! scratch family is for: a wire's `y` value is parked on `z` while a new `y`
//! is substituted in, so the old and new values never alias in the same
//! `compose` call.

use crate::bdd::Bdd;
use crate::circuit::{Circuit, Control, Gate};

/// A characteristic relation χ(x,y) on `k` wires.
#[derive(Debug, Clone)]
pub struct Rcbdd {
    k: usize,
    chi: Bdd,
}

fn xor(a: &Bdd, b: &Bdd) -> Bdd {
    a.and(&b.not()).or(&a.not().and(b))
}

fn xnor(a: &Bdd, b: &Bdd) -> Bdd {
    a.and(b).or(&a.not().and(&b.not()))
}

fn literal(var: &str, value: bool) -> Bdd {
    let v = Bdd::variable(var);
    if value {
        v
    } else {
        v.not()
    }
}

impl Rcbdd {
    /// Variable name for input wire `i`.
    pub fn x_name(i: usize) -> String {
        format!("x{i}")
    }

    /// Variable name for output wire `i`.
    pub fn y_name(i: usize) -> String {
        format!("y{i}")
    }

    /// Variable name for the scratch wire `i` used to compose relations.
    pub fn z_name(i: usize) -> String {
        format!("z{i}")
    }

    /// Number of wires this relation is defined over.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The underlying BDD over `{x0..xk, y0..yk}`.
    pub fn relation(&self) -> &Bdd {
        &self.chi
    }

    /// Wrap an existing BDD as a characteristic relation on `k` wires. The
    /// caller is responsible for the BDD being defined only in terms of
    /// `x0..x(k-1)` and `y0..y(k-1)` variables created via [`Bdd::variable`].
    pub fn from_relation(k: usize, chi: Bdd) -> Self {
        Rcbdd { k, chi }
    }

    /// The identity relation on `k` wires: `χ(x,y) = ∀i. xᵢ = yᵢ`.
    pub fn new_identity(k: usize) -> Self {
        let mut chi = Bdd::constant(true);
        for i in 0..k {
            let x = Bdd::variable(&Self::x_name(i));
            let y = Bdd::variable(&Self::y_name(i));
            chi = chi.and(&xnor(&x, &y));
        }
        Rcbdd { k, chi }
    }

    /// Whether this relation is exactly the identity on its `k` wires.
    pub fn is_identity(&self) -> bool {
        self.chi == Rcbdd::new_identity(self.k).chi
    }

    /// Build the characteristic relation of an already-bijective permutation:
    /// `perm[x] = y` means input pattern `x` maps to output pattern `y`.
    /// `perm.len()` must be `2^k`. Used to seed [`crate::synth::characteristic`]
    /// from a concrete truth table (`synth::mmd`, `synth::transposition`,
    /// `synth::reed_muller`), rather than from a PLA cover.
    pub fn from_permutation(k: usize, perm: &[u64]) -> Self {
        debug_assert_eq!(perm.len(), 1usize << k, "permutation must have 2^k entries");
        let mut chi = Bdd::constant(false);
        for (x, &y) in perm.iter().enumerate() {
            let mut cube = Bdd::constant(true);
            for i in 0..k {
                let xbit = (x as u64 >> (k - 1 - i)) & 1 == 1;
                let ybit = (y >> (k - 1 - i)) & 1 == 1;
                cube = cube.and(&literal(&Self::x_name(i), xbit));
                cube = cube.and(&literal(&Self::y_name(i), ybit));
            }
            chi = chi.or(&cube);
        }
        Rcbdd { k, chi }
    }

    /// Whether χ is a total function, i.e. every input has a unique output:
    /// `count_minterm` over `2k` variables equals `2^k`.
    pub fn is_bijective(&self) -> bool {
        self.chi.count_minterm(2 * self.k) == 2f64.powi(self.k as i32)
    }

    /// The BDD relation a single gate induces on its own, with every
    /// untouched wire passed straight through. Used as the base case when a
    /// caller wants to reason about one gate's relation directly (e.g. when
    /// verifying a synthesized cascade gate by gate).
    pub fn from_gate(k: usize, gate: &Gate) -> Self {
        let identity = Self::new_identity(k);
        let mut rcbdd = identity;
        rcbdd.compose_gate_right(gate);
        rcbdd
    }

    /// Build the relation induced by an entire circuit, applied left to
    /// right: `χ = g_1 · g_2 · … · g_n`.
    pub fn from_circuit(k: usize, circuit: &Circuit) -> Self {
        let mut rcbdd = Self::new_identity(k);
        for gate in circuit.gates() {
            rcbdd.compose_gate_right(gate);
        }
        rcbdd
    }

    /// The BDD expression a gate's target wire evaluates to, as a function of
    /// the `x{i}` (or `y{i}`, if `on_y` is set) input variables: `x_t XOR
    /// (AND of controls)` for a Toffoli gate.
    fn toffoli_target_expr(controls: &[Control], on_y: bool, target: usize) -> Bdd {
        let name = |i: usize| if on_y { Self::y_name(i) } else { Self::x_name(i) };
        let ctrl = controls.iter().fold(Bdd::constant(true), |acc, c| {
            let lit = Bdd::variable(&name(c.wire));
            let lit = if c.polarity { lit } else { lit.not() };
            acc.and(&lit)
        });
        xor(&Bdd::variable(&name(target)), &ctrl)
    }

    /// Replace χ by `χ' = χ ∘ gate`, i.e. apply `gate` on the output side:
    /// `χ'(x,y) = χ(x, gate⁻¹(y))`. Since every gate here is an involution
    /// (Toffoli/Fredkin gates are their own inverse), this substitutes each
    /// affected `y` variable with the gate's action on the current `y`s.
    pub fn compose_gate_right(&mut self, gate: &Gate) {
        match gate {
            Gate::Toffoli { controls, target } => {
                let new_expr = Self::toffoli_target_expr(controls, true, *target);
                self.chi = self.chi.compose(&Self::y_name(*target), &new_expr);
            }
            Gate::Fredkin {
                controls,
                target,
                target2,
            } => {
                self.swap_vars_conditionally(controls, true, *target, *target2);
            }
        }
    }

    /// Replace χ by `χ' = gate ∘ χ`, i.e. apply `gate` on the input side:
    /// `χ'(x,y) = χ(gate(x), y)`.
    pub fn compose_gate_left(&mut self, gate: &Gate) {
        match gate {
            Gate::Toffoli { controls, target } => {
                let new_expr = Self::toffoli_target_expr(controls, false, *target);
                self.chi = self.chi.compose(&Self::x_name(*target), &new_expr);
            }
            Gate::Fredkin {
                controls,
                target,
                target2,
            } => {
                self.swap_vars_conditionally(controls, false, *target, *target2);
            }
        }
    }

    /// Conditionally swap two variables (the Fredkin gate's action), routed
    /// through a scratch `z` variable so the simultaneous substitution is
    /// safe: naively composing `target := target2` and then `target2 :=
    /// target` would compose against the already-updated `target`.
    fn swap_vars_conditionally(&mut self, controls: &[Control], on_y: bool, target: usize, target2: usize) {
        let name = |i: usize| if on_y { Self::y_name(i) } else { Self::x_name(i) };
        let ctrl = controls.iter().fold(Bdd::constant(true), |acc, c| {
            let lit = Bdd::variable(&name(c.wire));
            let lit = if c.polarity { lit } else { lit.not() };
            acc.and(&lit)
        });

        let t1 = Bdd::variable(&name(target));
        let t2 = Bdd::variable(&name(target2));
        // swapped(target)  = ctrl ? t2 : t1
        // swapped(target2) = ctrl ? t1 : t2
        let swapped_t1 = ctrl.and(&t2).or(&ctrl.not().and(&t1));
        let swapped_t2 = ctrl.and(&t1).or(&ctrl.not().and(&t2));

        let z = Self::z_name(target);
        self.chi = self.chi.compose(&name(target), &Bdd::variable(&z));
        self.chi = self.chi.compose(&name(target2), &swapped_t2);
        self.chi = self.chi.compose(&z, &swapped_t1);
    }

    /// Existentially retire a wire's `y` variable by moving its value to `z`
    /// first: used by [`crate::synth::characteristic`] when a wire has just
    /// been fixed to the identity and its `y` variable needs to drop out of
    /// later cofactor computations without colliding with a fresh substitution.
    pub fn move_y_to_z(&mut self, i: usize) {
        self.chi = self.chi.compose(&Self::y_name(i), &Bdd::variable(&Self::z_name(i)));
    }

    /// Inverse of [`Rcbdd::move_y_to_z`]: move wire `i`'s scratch value back
    /// onto `y`.
    pub fn move_z_to_y(&mut self, i: usize) {
        self.chi = self.chi.compose(&Self::z_name(i), &Bdd::variable(&Self::y_name(i)));
    }

    /// Swap the `x` and `y` roles of wire `i` throughout χ, routed through
    /// `z{i}` so the simultaneous rename is safe. Used when an algorithm
    /// needs to read χ "backwards" (from output to input) for one wire
    /// without constructing an entirely new relation.
    pub fn swap_x_y(&mut self, i: usize) {
        let x = Self::x_name(i);
        let y = Self::y_name(i);
        let z = Self::z_name(i);
        self.chi = self.chi.compose(&x, &Bdd::variable(&z));
        self.chi = self.chi.compose(&y, &Bdd::variable(&x));
        self.chi = self.chi.compose(&z, &Bdd::variable(&y));
    }
}
