//! Simulated Signal Source
//!
//! Stand-in for on-chain security data and candle-based indicators that this
//! screener does not have. Six of the seven scam checklist items and the RSI
//! reading come from here. Outcomes are random placeholders, not real checks.
//! Swap the implementation for a real data provider without touching the
//! scoring or exit-signal logic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Scam checklist item identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    ContractVerified,
    LiquidityLocked,
    Honeypot,
    TaxLow,
    OwnershipRenounced,
    TopHolders,
    MintDisabled,
}

impl CheckId {
    /// Probability that the simulated check passes
    pub fn simulated_pass_rate(&self) -> f64 {
        match self {
            CheckId::ContractVerified => 0.70,
            CheckId::LiquidityLocked => 0.0, // data driven, never simulated
            CheckId::Honeypot => 0.80,
            CheckId::TaxLow => 0.75,
            CheckId::OwnershipRenounced => 0.60,
            CheckId::TopHolders => 0.65,
            CheckId::MintDisabled => 0.75,
        }
    }
}

/// Lower bound of the placeholder RSI range
pub const SIMULATED_RSI_MIN: f64 = 30.0;
/// Upper bound (exclusive) of the placeholder RSI range
pub const SIMULATED_RSI_MAX: f64 = 80.0;

/// Source of simulated checklist outcomes and indicator readings
pub trait SimulatedSignalSource {
    /// Outcome of a checklist item for which no real data exists
    fn check_passes(&mut self, check: CheckId) -> bool;

    /// Placeholder RSI reading in [30, 80)
    fn rsi(&mut self) -> f64;
}

impl<S: SimulatedSignalSource + ?Sized> SimulatedSignalSource for &mut S {
    fn check_passes(&mut self, check: CheckId) -> bool {
        (**self).check_passes(check)
    }

    fn rsi(&mut self) -> f64 {
        (**self).rsi()
    }
}

impl<S: SimulatedSignalSource + ?Sized> SimulatedSignalSource for Box<S> {
    fn check_passes(&mut self, check: CheckId) -> bool {
        (**self).check_passes(check)
    }

    fn rsi(&mut self) -> f64 {
        (**self).rsi()
    }
}

/// Independent random draws per call
#[derive(Debug, Clone)]
pub struct RandomSignalSource<R: Rng = StdRng> {
    rng: R,
}

impl RandomSignalSource<StdRng> {
    /// Entropy-seeded source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible source for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomSignalSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSignalSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SimulatedSignalSource for RandomSignalSource<R> {
    fn check_passes(&mut self, check: CheckId) -> bool {
        self.rng.gen::<f64>() < check.simulated_pass_rate()
    }

    fn rsi(&mut self) -> f64 {
        self.rng.gen_range(SIMULATED_RSI_MIN..SIMULATED_RSI_MAX)
    }
}

/// Fixed outcomes: every check passes unless listed as failing
#[derive(Debug, Clone)]
pub struct ScriptedSignalSource {
    failing: HashSet<CheckId>,
    rsi: f64,
}

impl ScriptedSignalSource {
    /// All checks pass, neutral RSI
    pub fn all_pass() -> Self {
        Self {
            failing: HashSet::new(),
            rsi: 50.0,
        }
    }

    /// All simulated checks fail, neutral RSI
    pub fn all_fail() -> Self {
        Self {
            failing: [
                CheckId::ContractVerified,
                CheckId::Honeypot,
                CheckId::TaxLow,
                CheckId::OwnershipRenounced,
                CheckId::TopHolders,
                CheckId::MintDisabled,
            ]
            .into_iter()
            .collect(),
            rsi: 50.0,
        }
    }

    pub fn failing(mut self, check: CheckId) -> Self {
        self.failing.insert(check);
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = rsi;
        self
    }
}

impl SimulatedSignalSource for ScriptedSignalSource {
    fn check_passes(&mut self, check: CheckId) -> bool {
        !self.failing.contains(&check)
    }

    fn rsi(&mut self) -> f64 {
        self.rsi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_rsi_in_range() {
        let mut source = RandomSignalSource::seeded(7);
        for _ in 0..1000 {
            let rsi = source.rsi();
            assert!((SIMULATED_RSI_MIN..SIMULATED_RSI_MAX).contains(&rsi));
        }
    }

    #[test]
    fn test_with_rng_matches_seeded() {
        let mut a = RandomSignalSource::with_rng(StdRng::seed_from_u64(9));
        let mut b = RandomSignalSource::seeded(9);
        assert_eq!(a.rsi(), b.rsi());
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RandomSignalSource::seeded(42);
        let mut b = RandomSignalSource::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.check_passes(CheckId::Honeypot), b.check_passes(CheckId::Honeypot));
            assert_eq!(a.rsi(), b.rsi());
        }
    }

    #[test]
    fn test_random_pass_rate_roughly_matches() {
        let mut source = RandomSignalSource::seeded(1);
        let passes = (0..10_000)
            .filter(|_| source.check_passes(CheckId::Honeypot))
            .count();
        // 80% nominal
        assert!(passes > 7_500 && passes < 8_500, "got {passes}");
    }

    #[test]
    fn test_liquidity_lock_never_simulated_pass() {
        let mut source = RandomSignalSource::seeded(3);
        assert!((0..100).all(|_| !source.check_passes(CheckId::LiquidityLocked)));
    }

    #[test]
    fn test_scripted_source() {
        let mut source = ScriptedSignalSource::all_pass()
            .failing(CheckId::Honeypot)
            .with_rsi(75.0);

        assert!(!source.check_passes(CheckId::Honeypot));
        assert!(source.check_passes(CheckId::TaxLow));
        assert_eq!(source.rsi(), 75.0);

        let mut failing = ScriptedSignalSource::all_fail();
        assert!(!failing.check_passes(CheckId::MintDisabled));
    }
}
