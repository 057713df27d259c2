//! Configuration settings for the cutting-plane loop.

use subtour_core::{MinCutStrategy, DEFAULT_TOL};

/// Cutting-plane loop settings.
#[derive(Debug, Clone)]
pub struct CuttingPlaneSettings {
    // === Numerics ===
    /// Tolerance for all comparisons against 0, 1 and 2.
    ///
    /// Solution values below it are treated as absent edges, and a cut is
    /// accepted as tour structure once its weight reaches `2 - tol`.
    pub tol: f64,

    // === Separation ===
    /// Min-cut oracle used on connected support graphs.
    pub strategy: MinCutStrategy,

    /// Reject a constraint whose partition is already in the model.
    pub dedup_cuts: bool,

    // === Termination ===
    /// Maximum number of separation rounds.
    pub max_rounds: u64,

    /// Time limit in milliseconds (None = unlimited).
    pub time_limit_ms: Option<u64>,

    // === Output ===
    /// Log per-round progress.
    pub verbose: bool,

    /// Log frequency (print every N rounds).
    pub log_freq: u64,
}

impl Default for CuttingPlaneSettings {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            strategy: MinCutStrategy::StoerWagner,
            dedup_cuts: true,
            max_rounds: 10_000,
            time_limit_ms: None,
            verbose: false,
            log_freq: 1,
        }
    }
}

impl CuttingPlaneSettings {
    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s.log_freq = 1;
        s
    }

    /// Set time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_ms = Some((seconds * 1000.0) as u64);
        self
    }

    /// Set maximum separation rounds.
    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the min-cut strategy.
    pub fn with_strategy(mut self, strategy: MinCutStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the numerical tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }
}
