//! Binary Decision Diagram (BDD) implementation for efficient boolean function representation
//!
//! This module provides a canonical representation of boolean functions using reduced ordered
//! binary decision diagrams (ROBDDs), and the decision-diagram facade (cofactor, existential
//! abstraction, compose, minterm counting/picking) that the reversible characteristic-relation
//! layer (`crate::rcbdd`) is built on top of:
//!
//! - **Canonical representation**: Equivalent functions have identical BDD representations
//! - **Efficient operations**: AND, OR, NOT, cofactor and compose are all ITE-based
//! - **Compact representation**: Many practical functions have small BDDs
//! - **Global sharing**: All BDDs in the program share the same manager for maximum efficiency
//!
//! # Implementation Details
//!
//! The BDD uses:
//! - **Global singleton manager**: One shared manager across all BDDs via `OnceLock`
//! - **Hash consing**: Unique table for canonical node representation (works globally)
//! - **Operation caching**: ITE results are memoized and shared across all operations
//! - **Variable ordering**: Alphabetical ordering (deterministic and consistent)
//! - **Thread-safe**: Mutex-protected manager enables concurrent BDD operations

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, OnceLock, RwLock, Weak};

/// Node identifier in the BDD
pub type NodeId = usize;

/// Variable identifier (index in variable ordering)
pub type VarId = usize;

/// Terminal node for FALSE
pub const FALSE_NODE: NodeId = 0;

/// Terminal node for TRUE
pub const TRUE_NODE: NodeId = 1;

/// Global weak reference to BDD manager
///
/// Using a weak reference allows the manager to be dropped when no BDDs are using it,
/// preventing memory leaks. A new manager will be created when needed.
///
/// The weak reference enables:
/// - Better cache hit rates when BDDs are actively in use (shared across all BDDs)
/// - More efficient memory usage (shared node table)
/// - Hash consing works globally (same expressions = same nodes everywhere)
/// - Automatic cleanup when no BDDs are in use
static GLOBAL_BDD_MANAGER: Mutex<Weak<RwLock<BddManager>>> = Mutex::new(Weak::new());

/// Binary decision diagram node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BddNode {
    /// Terminal node (true or false)
    Terminal(bool),
    /// Decision node
    Decision {
        var: VarId,
        low: NodeId,  // false edge
        high: NodeId, // true edge
    },
}

/// Shared BDD manager that maintains the unique table and caches
///
/// The manager uses interior mutability to allow sharing BDDs across multiple references
/// while still being able to modify internal caches.
///
/// # Critical Invariant: NodeId Stability
///
/// **NodeIds are stable** - once a node is created at a given index, it remains at that
/// index forever. The `nodes` Vec only grows (via `push`), never shrinks or reorders.
/// This guarantees that:
/// - A NodeId is valid for the lifetime of the manager
/// - Multiple threads can safely traverse using NodeIds after releasing read locks
/// - Recursive traversal can release locks between calls without invalidating NodeIds
#[derive(Debug)]
struct BddManager {
    /// All nodes in the BDD (terminals at indices 0 and 1)
    /// INVARIANT: Nodes are never removed or reordered - only appended
    nodes: Vec<BddNode>,
    /// Unique table: (var, low, high) -> NodeId for hash consing
    unique_table: HashMap<(VarId, NodeId, NodeId), NodeId>,
    /// Variable ordering: variable name -> variable id
    var_to_id: BTreeMap<Arc<str>, VarId>,
    /// Reverse mapping: variable id -> variable name
    id_to_var: Vec<Arc<str>>,
    /// Cache for ITE operations: (f, g, h) -> result
    ite_cache: HashMap<(NodeId, NodeId, NodeId), NodeId>,
}

impl BddManager {
    /// Get or create the singleton BDD manager
    ///
    /// All BDDs in the program share a single manager for maximum efficiency
    /// through shared node tables and caches. The manager is automatically
    /// cleaned up when no BDDs reference it anymore.
    fn get_or_create() -> Arc<RwLock<Self>> {
        let mut guard = GLOBAL_BDD_MANAGER.lock().unwrap();
        if let Some(manager) = guard.upgrade() {
            manager
        } else {
            // Initialize manager inline with terminal nodes
            let manager = Arc::new(RwLock::new(BddManager {
                nodes: vec![
                    BddNode::Terminal(false), // FALSE_NODE = 0
                    BddNode::Terminal(true),  // TRUE_NODE = 1
                ],
                unique_table: HashMap::new(),
                var_to_id: BTreeMap::new(),
                id_to_var: Vec::new(),
                ite_cache: HashMap::new(),
            }));
            *guard = Arc::downgrade(&manager);
            manager
        }
    }

    /// Get or create a variable ID for a variable name
    fn get_or_create_var(&mut self, name: &str) -> VarId {
        let key: Arc<str> = Arc::from(name);
        if let Some(&id) = self.var_to_id.get(&key) {
            id
        } else {
            let id = self.id_to_var.len();
            self.var_to_id.insert(Arc::clone(&key), id);
            self.id_to_var.push(key);
            id
        }
    }

    /// Get variable name from ID
    fn var_name(&self, id: VarId) -> Option<&Arc<str>> {
        self.id_to_var.get(id)
    }

    /// Get or create a decision node (with hash consing)
    ///
    /// # Invariant
    /// This method only creates Decision nodes, never Terminal nodes.
    /// Terminal nodes are always at positions 0 and 1.
    fn make_node(&mut self, var: VarId, low: NodeId, high: NodeId) -> NodeId {
        // Reduction rule: if low == high, return that node (redundant test elimination)
        if low == high {
            return low;
        }

        // Check unique table
        let key = (var, low, high);
        if let Some(&existing) = self.unique_table.get(&key) {
            return existing;
        }

        // Create new decision node (never terminals - those are at 0 and 1)
        let node_id = self.nodes.len();
        self.nodes.push(BddNode::Decision { var, low, high });
        self.unique_table.insert(key, node_id);
        node_id
    }

    /// Get node by ID
    fn get_node(&self, id: NodeId) -> Option<&BddNode> {
        self.nodes.get(id)
    }

    /// Look up an existing variable's id without creating one
    fn var_id(&self, name: &str) -> Option<VarId> {
        self.var_to_id.get(name).copied()
    }

    /// Restrict (cofactor): substitute a constant value for a single variable.
    fn restrict(&mut self, node: NodeId, var: VarId, value: bool) -> NodeId {
        match self.get_node(node).cloned().unwrap() {
            BddNode::Terminal(_) => node,
            BddNode::Decision { var: v, low, high } => {
                if v == var {
                    if value {
                        high
                    } else {
                        low
                    }
                } else if v > var {
                    // var does not occur below this point in the ordering
                    node
                } else {
                    let new_low = self.restrict(low, var, value);
                    let new_high = self.restrict(high, var, value);
                    self.make_node(v, new_low, new_high)
                }
            }
        }
    }

    /// Single-variable BDD compose: substitute `replacement` for `var` in `node`.
    ///
    /// Implemented via the Shannon identity
    /// `compose(f, var, g) = ite(g, f|var=1, f|var=0)`.
    fn compose_var(&mut self, node: NodeId, var: VarId, replacement: NodeId) -> NodeId {
        let f_high = self.restrict(node, var, true);
        let f_low = self.restrict(node, var, false);
        self.ite(replacement, f_high, f_low)
    }

    /// If-Then-Else operation (Shannon expansion)
    ///
    /// Computes: if f then g else h
    /// This is the fundamental BDD operation from which all others are derived.
    fn ite(&mut self, f: NodeId, g: NodeId, h: NodeId) -> NodeId {
        // Terminal cases
        if f == TRUE_NODE {
            return g;
        }
        if f == FALSE_NODE {
            return h;
        }
        if g == TRUE_NODE && h == FALSE_NODE {
            return f;
        }
        if g == h {
            return g;
        }

        // Check cache
        let cache_key = (f, g, h);
        if let Some(&result) = self.ite_cache.get(&cache_key) {
            return result;
        }

        // Find the topmost variable among f, g, h
        let f_node = self.get_node(f).expect(
            "Invalid node ID in ITE operation - this indicates a bug in the BDD implementation",
        );
        let g_node = self.get_node(g).expect(
            "Invalid node ID in ITE operation - this indicates a bug in the BDD implementation",
        );
        let h_node = self.get_node(h).expect(
            "Invalid node ID in ITE operation - this indicates a bug in the BDD implementation",
        );

        let (top_var, f_var, g_var, h_var) = match (f_node, g_node, h_node) {
            (BddNode::Terminal(_), BddNode::Terminal(_), BddNode::Terminal(_)) => {
                unreachable!("All terminals should be handled above")
            }
            _ => {
                let f_var = Self::node_var(f_node);
                let g_var = Self::node_var(g_node);
                let h_var = Self::node_var(h_node);
                let top_var = f_var.min(g_var).min(h_var);
                (top_var, f_var, g_var, h_var)
            }
        };

        // Shannon expansion on the topmost variable
        let (f_low, f_high) = Self::cofactors(f_node, f_var, top_var, f);
        let (g_low, g_high) = Self::cofactors(g_node, g_var, top_var, g);
        let (h_low, h_high) = Self::cofactors(h_node, h_var, top_var, h);

        let low = self.ite(f_low, g_low, h_low);
        let high = self.ite(f_high, g_high, h_high);

        let result = self.make_node(top_var, low, high);
        self.ite_cache.insert(cache_key, result);
        result
    }

    /// Get the variable of a node (usize::MAX for terminals)
    fn node_var(node: &BddNode) -> VarId {
        match node {
            BddNode::Terminal(_) => usize::MAX,
            BddNode::Decision { var, .. } => *var,
        }
    }

    /// Get cofactors (low and high children) for Shannon expansion
    fn cofactors(
        node: &BddNode,
        node_var: VarId,
        split_var: VarId,
        node_id: NodeId,
    ) -> (NodeId, NodeId) {
        if node_var == split_var {
            match node {
                BddNode::Decision { low, high, .. } => (*low, *high),
                BddNode::Terminal(_) => unreachable!(),
            }
        } else {
            // Variable doesn't appear in this branch
            (node_id, node_id)
        }
    }
}

/// Binary Decision Diagram
///
/// Represents a boolean function in canonical form. BDDs support efficient
/// boolean operations (cofactor, existential abstraction, compose) and double
/// as the representation for reversible characteristic relations in
/// [`crate::rcbdd`], where a relation over `{x, y}` is just a `Bdd` whose
/// variables happen to come in `x`/`y`/`z` families.
#[derive(Debug, Clone)]
pub struct Bdd {
    manager: Arc<RwLock<BddManager>>,
    root: NodeId,
}

impl Bdd {
    /// Create a BDD representing a constant
    pub fn constant(value: bool) -> Self {
        let manager = BddManager::get_or_create();
        Bdd {
            manager,
            root: if value { TRUE_NODE } else { FALSE_NODE },
        }
    }

    /// Create a BDD representing a variable, creating it in the manager if needed.
    ///
    /// Variables are assigned BDD-internal ids in first-creation order, so callers
    /// that care about variable ordering (e.g. the paired `x{i}`/`y{i}`/`z{i}` scheme
    /// used by [`crate::rcbdd::Rcbdd`]) must create variables in the order they want
    /// them to appear top-to-bottom in the diagram.
    pub fn variable(name: &str) -> Self {
        let manager = BddManager::get_or_create();
        let mut mgr = manager.write().unwrap();
        let var_id = mgr.get_or_create_var(name);
        let node = mgr.make_node(var_id, FALSE_NODE, TRUE_NODE);
        drop(mgr); // Explicitly release the lock
        Bdd {
            manager,
            root: node,
        }
    }

    /// Restrict a single variable to a constant value (the BDD cofactor).
    ///
    /// Panics if `var` was never registered with the manager backing this BDD;
    /// use only with variable names already created via [`Bdd::variable`].
    pub fn cofactor(&self, var: &str, value: bool) -> Bdd {
        let manager = Arc::clone(&self.manager);
        let mut mgr = manager.write().unwrap();
        let var_id = mgr
            .var_id(var)
            .unwrap_or_else(|| panic!("unknown BDD variable '{}'", var));
        let root = mgr.restrict(self.root, var_id, value);
        drop(mgr);
        Bdd { manager, root }
    }

    /// Existentially abstract a single variable: `exists v. f = f|v=0 OR f|v=1`.
    pub fn exist(&self, var: &str) -> Bdd {
        self.cofactor(var, false).or(&self.cofactor(var, true))
    }

    /// Existentially abstract a set of variables (applied one at a time; the
    /// order does not affect the result since existential abstraction commutes).
    pub fn exist_vars(&self, vars: &[&str]) -> Bdd {
        vars.iter().fold(self.clone(), |acc, v| acc.exist(v))
    }

    /// Compose: substitute `replacement` for `var` everywhere in this BDD,
    /// via the Shannon identity `compose(f, var, g) = ite(g, f|var=1, f|var=0)`.
    pub fn compose(&self, var: &str, replacement: &Bdd) -> Bdd {
        assert!(
            Arc::ptr_eq(&self.manager, &replacement.manager),
            "cannot compose BDDs from different managers"
        );
        let manager = Arc::clone(&self.manager);
        let mut mgr = manager.write().unwrap();
        let var_id = mgr
            .var_id(var)
            .unwrap_or_else(|| panic!("unknown BDD variable '{}'", var));
        let root = mgr.compose_var(self.root, var_id, replacement.root);
        drop(mgr);
        Bdd { manager, root }
    }

    /// Count the number of satisfying assignments over `num_vars` variables.
    ///
    /// Variables that do not appear on a given path are treated as don't-cares
    /// and contribute a factor of 2 each, mirroring `Cudd_CountMinterm`.
    pub fn count_minterm(&self, num_vars: usize) -> f64 {
        let mgr = self.manager.read().unwrap();
        let mut cache = HashMap::new();
        Self::count_minterm_rec(&mgr, self.root, num_vars, &mut cache)
    }

    fn count_minterm_rec(
        mgr: &BddManager,
        node: NodeId,
        num_vars: usize,
        cache: &mut HashMap<NodeId, f64>,
    ) -> f64 {
        if let Some(&cached) = cache.get(&node) {
            return cached;
        }
        let result = match mgr.get_node(node).unwrap() {
            BddNode::Terminal(false) => 0.0,
            BddNode::Terminal(true) => 2f64.powi(num_vars as i32),
            BddNode::Decision { var, low, high } => {
                let low_count = Self::count_minterm_rec(mgr, *low, num_vars, cache);
                let high_count = Self::count_minterm_rec(mgr, *high, num_vars, cache);
                let low_depth = Self::node_depth(mgr, *low, *var, num_vars);
                let high_depth = Self::node_depth(mgr, *high, *var, num_vars);
                low_count * 2f64.powi(low_depth) + high_count * 2f64.powi(high_depth)
            }
        };
        cache.insert(node, result);
        result
    }

    /// Number of skipped variable levels below `parent_var` before `node`'s own
    /// variable (or the terminal), used to weight don't-care spans in minterm counting.
    fn node_depth(mgr: &BddManager, node: NodeId, parent_var: VarId, num_vars: usize) -> i32 {
        match mgr.get_node(node).unwrap() {
            BddNode::Terminal(_) => (num_vars as i32) - (parent_var as i32) - 1,
            BddNode::Decision { var, .. } => (*var as i32) - (parent_var as i32) - 1,
        }
    }

    /// Pick one satisfying assignment over `vars`, resolving any variable the
    /// BDD does not depend on (a don't-care) arbitrarily to `false`.
    ///
    /// Returns `None` if the function is unsatisfiable.
    pub fn pick_one_minterm(&self, vars: &[&str]) -> Option<BTreeMap<Arc<str>, bool>> {
        if self.is_false() {
            return None;
        }
        let mgr = self.manager.read().unwrap();
        let mut assignment = BTreeMap::new();
        let mut node = self.root;
        loop {
            match mgr.get_node(node).unwrap() {
                BddNode::Terminal(true) => break,
                BddNode::Terminal(false) => unreachable!("walked into FALSE from a satisfiable node"),
                BddNode::Decision { var, low, high } => {
                    let name = mgr.var_name(*var).unwrap().clone();
                    // Prefer the high branch unless it is dead (unsatisfiable).
                    if Self::is_satisfiable(&mgr, *high) {
                        assignment.insert(name, true);
                        node = *high;
                    } else {
                        assignment.insert(name, false);
                        node = *low;
                    }
                }
            }
        }
        for &v in vars {
            let name: Arc<str> = Arc::from(v);
            assignment.entry(name).or_insert(false);
        }
        Some(assignment)
    }

    /// Like [`Bdd::pick_one_minterm`], but whenever a variable named as the
    /// second element of a `pairs` entry is reached as a genuine don't-care
    /// (both branches satisfiable), its value is forced to match the
    /// already-chosen value of the paired first variable instead of
    /// defaulting to `high`/`false` — `smart_pickcube`'s bias towards
    /// fixed-point cubes, adapted from the original's node-index parity
    /// check (`3i` vs `3i+1`) to named variable pairs.
    pub fn pick_one_minterm_paired(
        &self,
        pairs: &[(&str, &str)],
        rest: &[&str],
    ) -> Option<BTreeMap<Arc<str>, bool>> {
        if self.is_false() {
            return None;
        }
        let mgr = self.manager.read().unwrap();
        let paired_by_y: HashMap<VarId, VarId> = pairs
            .iter()
            .filter_map(|&(x, y)| Some((mgr.var_id(y)?, mgr.var_id(x)?)))
            .collect();
        let mut assignment = BTreeMap::new();
        let mut node = self.root;
        loop {
            match mgr.get_node(node).unwrap() {
                BddNode::Terminal(true) => break,
                BddNode::Terminal(false) => unreachable!("walked into FALSE from a satisfiable node"),
                BddNode::Decision { var, low, high } => {
                    let name = mgr.var_name(*var).unwrap().clone();
                    let high_ok = Self::is_satisfiable(&mgr, *high);
                    let low_ok = Self::is_satisfiable(&mgr, *low);
                    let paired_value = if high_ok && low_ok {
                        paired_by_y
                            .get(var)
                            .and_then(|xvar| mgr.var_name(*xvar))
                            .and_then(|xname| assignment.get(xname.as_ref()).copied())
                    } else {
                        None
                    };
                    let value = paired_value.unwrap_or(high_ok);
                    assignment.insert(name, value);
                    node = if value { *high } else { *low };
                }
            }
        }
        for &(x, y) in pairs {
            assignment.entry(Arc::from(x)).or_insert(false);
            assignment.entry(Arc::from(y)).or_insert(false);
        }
        for &v in rest {
            assignment.entry(Arc::from(v)).or_insert(false);
        }
        Some(assignment)
    }

    fn is_satisfiable(mgr: &BddManager, node: NodeId) -> bool {
        !matches!(mgr.get_node(node), Some(BddNode::Terminal(false)))
    }

    /// Check if this BDD is a terminal (constant)
    pub fn is_terminal(&self) -> bool {
        self.root == TRUE_NODE || self.root == FALSE_NODE
    }

    /// Check if this BDD represents TRUE
    pub fn is_true(&self) -> bool {
        self.root == TRUE_NODE
    }

    /// Check if this BDD represents FALSE
    pub fn is_false(&self) -> bool {
        self.root == FALSE_NODE
    }

    /// Get the number of nodes in this BDD
    pub fn node_count(&self) -> usize {
        self.count_reachable_nodes(self.root, &mut HashMap::new())
    }

    /// Count reachable nodes from a given root
    fn count_reachable_nodes(&self, node: NodeId, visited: &mut HashMap<NodeId, ()>) -> usize {
        if visited.contains_key(&node) {
            return 0;
        }
        visited.insert(node, ());

        // Acquire lock, extract needed data, then release before recursing.
        // This is safe because NodeIds are stable (nodes are never removed/reordered).
        let (is_terminal, low, high) = {
            let inner = self.manager.read().unwrap();
            match inner.get_node(node) {
                Some(BddNode::Terminal(_)) => (true, 0, 0),
                Some(BddNode::Decision { low, high, .. }) => (false, *low, *high),
                None => {
                    panic!("Invalid node ID {} encountered during node counting - this indicates a bug in the BDD implementation", node);
                }
            }
        }; // Lock released here

        if is_terminal {
            1
        } else {
            1 + self.count_reachable_nodes(low, visited) + self.count_reachable_nodes(high, visited)
        }
    }

    /// Get the variable count (number of distinct variables)
    pub fn var_count(&self) -> usize {
        let mut vars = std::collections::HashSet::new();
        self.collect_vars(self.root, &mut vars);
        vars.len()
    }

    /// Collect all variables reachable from a node
    fn collect_vars(&self, node: NodeId, vars: &mut std::collections::HashSet<VarId>) {
        // Acquire lock, extract needed data, then release before recursing.
        // This is safe because NodeIds are stable (nodes are never removed/reordered).
        let node_info = {
            let inner = self.manager.read().unwrap();
            match inner.get_node(node) {
                Some(BddNode::Terminal(_)) => None,
                Some(BddNode::Decision { var, low, high }) => Some((*var, *low, *high)),
                None => {
                    panic!("Invalid node ID {} encountered during variable collection - this indicates a bug in the BDD implementation", node);
                }
            }
        }; // Lock released here

        if let Some((var, low, high)) = node_info {
            if vars.insert(var) {
                self.collect_vars(low, vars);
                self.collect_vars(high, vars);
            }
        }
    }

    /// Extract cubes (product terms) from the BDD
    ///
    /// Returns a vector of cubes, where each cube is a map from variable name to
    /// its literal value (true for positive literal, false for negative literal).
    ///
    /// Each cube represents one path from the root to the TRUE terminal.
    ///
    /// **Internal use only.** Used by cube/minterm enumeration in the embedding
    /// and synthesis layers; not part of the public cube-conversion surface.
    pub(crate) fn to_cubes(&self) -> Vec<BTreeMap<Arc<str>, bool>> {
        let mut results = Vec::new();
        let mut current_path = BTreeMap::new();
        self.extract_cubes(self.root, &mut current_path, &mut results);
        results
    }

    /// Extract cubes recursively by traversing the BDD
    fn extract_cubes(
        &self,
        node: NodeId,
        current_path: &mut BTreeMap<Arc<str>, bool>,
        results: &mut Vec<BTreeMap<Arc<str>, bool>>,
    ) {
        // Acquire lock, extract needed data, then release before recursing.
        // This is safe because NodeIds are stable (nodes are never removed/reordered).
        let node_info = {
            let inner = self.manager.read().unwrap();
            match inner.get_node(node) {
                Some(BddNode::Terminal(true)) => Some((true, None)),
                Some(BddNode::Terminal(false)) => Some((false, None)),
                Some(BddNode::Decision { var, low, high }) => {
                    let var_name = inner.var_name(*var)
                        .expect("Invalid variable ID encountered during cube extraction - this indicates a bug in the BDD implementation");
                    Some((false, Some((Arc::clone(var_name), *low, *high))))
                }
                None => {
                    panic!("Invalid node ID {} encountered during cube extraction - this indicates a bug in the BDD implementation", node);
                }
            }
        }; // Lock released here

        match node_info {
            Some((true, None)) => {
                // Reached TRUE terminal - add current path as a cube
                results.push(current_path.clone());
            }
            Some((false, None)) => {
                // Reached FALSE terminal - this path doesn't contribute
            }
            Some((false, Some((var_name, low, high)))) => {
                // Traverse low edge (var = false)
                current_path.insert(Arc::clone(&var_name), false);
                self.extract_cubes(low, current_path, results);
                current_path.remove(&var_name);

                // Traverse high edge (var = true)
                current_path.insert(Arc::clone(&var_name), true);
                self.extract_cubes(high, current_path, results);
                current_path.remove(&var_name);
            }
            _ => unreachable!(),
        }
    }

    /// Logical AND operation
    ///
    /// Computes the conjunction of two BDDs using the ITE operation:
    /// `and(f, g) = ite(f, g, false)`
    pub fn and(&self, other: &Bdd) -> Bdd {
        // Use ITE: and(f, g) = ite(f, g, false)
        // Clone manager from self to avoid mutex access
        let manager = Arc::clone(&self.manager);
        let result = manager
            .write()
            .unwrap()
            .ite(self.root, other.root, FALSE_NODE);
        Bdd {
            manager,
            root: result,
        }
    }

    /// Logical OR operation
    ///
    /// Computes the disjunction of two BDDs using the ITE operation:
    /// `or(f, g) = ite(f, true, g)`
    pub fn or(&self, other: &Bdd) -> Bdd {
        // Use ITE: or(f, g) = ite(f, true, g)
        // Clone manager from self to avoid mutex access
        let manager = Arc::clone(&self.manager);
        let result = manager
            .write()
            .unwrap()
            .ite(self.root, TRUE_NODE, other.root);
        Bdd {
            manager,
            root: result,
        }
    }

    /// Logical NOT operation
    ///
    /// Computes the negation of a BDD using the ITE operation:
    /// `not(f) = ite(f, false, true)`
    pub fn not(&self) -> Bdd {
        // Use ITE: not(f) = ite(f, false, true)
        // Clone manager from self to avoid mutex access
        let manager = Arc::clone(&self.manager);
        let result = manager
            .write()
            .unwrap()
            .ite(self.root, FALSE_NODE, TRUE_NODE);
        Bdd {
            manager,
            root: result,
        }
    }
}

impl PartialEq for Bdd {
    fn eq(&self, other: &Self) -> bool {
        // BDDs are equal if they share the same manager and have the same root node
        // The singleton manager ensures consistent representation across all BDDs
        Arc::ptr_eq(&self.manager, &other.manager) && self.root == other.root
    }
}

impl Eq for Bdd {}

#[cfg(test)]
mod tests;
