//! Running counters for instrumentation.  Nothing in the simulation reads
//! them back.

use lift_dispatch::Boarding;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Persons created by the arrival process.
    pub spawned: u64,
    /// Persons that boarded a car.
    pub boarded: u64,
    /// Persons that alighted at their destination.
    pub delivered: u64,
    /// Directed hall calls no car could take when first placed.
    pub unanswered_calls: u64,
    /// Sum of real waiting times (spawn to boarding) of everyone boarded.
    pub total_wait_ms: u64,
}

impl SimStats {
    pub fn record_boarding(&mut self, boarding: Boarding) {
        self.boarded += boarding.count as u64;
        self.total_wait_ms += boarding.waited_ms;
    }

    /// Mean real seconds between appearing on a floor and boarding.
    pub fn average_wait_secs(&self) -> Option<f64> {
        (self.boarded > 0).then(|| self.total_wait_ms as f64 / 1000.0 / self.boarded as f64)
    }

    /// Persons currently riding a car.
    pub fn riding(&self) -> u64 {
        self.boarded.saturating_sub(self.delivered)
    }
}
