//! Optional synthesis statistics, attached to a synthesis result but never
//! consulted for correctness.

use std::time::{Duration, Instant};

/// Runtime and size statistics collected while synthesizing a circuit.
///
/// Never affects the synthesized [`crate::circuit::Circuit`] itself; purely
/// informational, the way the host crate's `EspressoConfig` `summary` flag
/// only changes what gets printed, never the minimization result.
#[derive(Debug, Clone)]
pub struct SynthesisStats {
    started: Instant,
    /// Total elapsed wall-clock time, set once synthesis finishes.
    pub runtime: Duration,
    /// Number of times the BDD manager's `ite` cache was consulted during
    /// synthesis (a proxy for work done; not every access is a miss).
    pub access: u64,
    /// BDD node count of the characteristic relation after each peeled
    /// variable, in synthesis order. Useful for spotting a blow-up in a
    /// specific wire-order heuristic.
    pub node_count_trace: Vec<usize>,
}

impl SynthesisStats {
    /// Start a fresh stats collector, timer running.
    pub fn start() -> Self {
        SynthesisStats {
            started: Instant::now(),
            runtime: Duration::default(),
            access: 0,
            node_count_trace: Vec::new(),
        }
    }

    /// Record one BDD manager access.
    pub fn record_access(&mut self) {
        self.access += 1;
    }

    /// Record the characteristic relation's node count after peeling a wire.
    pub fn record_node_count(&mut self, count: usize) {
        self.node_count_trace.push(count);
    }

    /// Stop the timer, freezing `runtime` at the elapsed duration since
    /// [`SynthesisStats::start`].
    pub fn finish(&mut self) {
        self.runtime = self.started.elapsed();
    }

    /// Peak node count seen across the whole trace, or `0` if nothing was
    /// recorded.
    pub fn peak_node_count(&self) -> usize {
        self.node_count_trace.iter().copied().max().unwrap_or(0)
    }
}

impl Default for SynthesisStats {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_stats_start_and_finish() {
        let mut stats = SynthesisStats::start();
        sleep(Duration::from_millis(1));
        stats.finish();
        assert!(stats.runtime.as_nanos() > 0);
    }

    #[test]
    fn test_record_access() {
        let mut stats = SynthesisStats::start();
        stats.record_access();
        stats.record_access();
        assert_eq!(stats.access, 2);
    }

    #[test]
    fn test_peak_node_count() {
        let mut stats = SynthesisStats::start();
        assert_eq!(stats.peak_node_count(), 0);
        stats.record_node_count(10);
        stats.record_node_count(42);
        stats.record_node_count(7);
        assert_eq!(stats.peak_node_count(), 42);
    }
}
