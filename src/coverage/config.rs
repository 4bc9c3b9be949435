//! Coverage search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wall-clock time the search keeps starting new attempts for.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(2);

/// Configuration for [`CoverageSearch`](super::CoverageSearch).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_coverage::coverage::CoverageConfig;
///
/// let config = CoverageConfig::default()
///     .with_time_budget(Duration::from_millis(50))
///     .with_seed(7)
///     .with_max_attempts(100);
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.max_attempts, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// No new attempt starts once this much time has elapsed. The first
    /// attempt always runs.
    pub time_budget: Duration,
    /// Seed for the edge shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Optional cap on the number of attempts.
    pub max_attempts: Option<usize>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
            max_attempts: None,
        }
    }
}

impl CoverageConfig {
    /// Sets the time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Stops after `attempts` attempts even if time remains.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CoverageConfig::default();
        assert_eq!(config.time_budget, Duration::from_secs(2));
        assert_eq!(config.seed, None);
        assert_eq!(config.max_attempts, None);
    }

    #[test]
    fn test_builder() {
        let config = CoverageConfig::default()
            .with_time_budget(Duration::ZERO)
            .with_seed(1);
        assert_eq!(config.time_budget, Duration::ZERO);
        assert_eq!(config.seed, Some(1));
    }
}
