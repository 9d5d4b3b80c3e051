//! 2-opt search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for [`two_opt_with_config`].
///
/// # Examples
///
/// ```
/// use u_tour::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default()
///     .with_tolerance(1e-9)
///     .with_max_iterations(500);
/// assert_eq!(config.tolerance, 1e-9);
/// assert_eq!(config.max_iterations, Some(500));
/// ```
///
/// [`two_opt_with_config`]: super::two_opt_with_config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptConfig {
    /// An exchange is applied only if it saves strictly more than this.
    pub tolerance: f64,
    /// Maximum number of exchanges to apply (None for no limit).
    ///
    /// A capped run may stop before reaching a local optimum.
    pub max_iterations: Option<usize>,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: None,
        }
    }
}

impl TwoOptConfig {
    /// Sets the minimum savings for an exchange to count as improving.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Caps the number of applied exchanges.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }
}
