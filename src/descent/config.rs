//! k-flip descent configuration.

/// Configuration parameters for [`KFlipDescent`](super::KFlipDescent).
///
/// # Examples
///
/// ```
/// use u_boolvec::descent::DescentConfig;
///
/// let config = DescentConfig::default()
///     .with_k(2)
///     .with_best_improvement(false)
///     .with_max_passes(100);
/// assert_eq!(config.k, 2);
/// assert_eq!(config.max_passes, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescentConfig {
    /// Number of positions flipped per move.
    pub k: usize,
    /// Scan the whole neighborhood per pass (`true`) or stop at the first
    /// improving neighbor (`false`).
    pub best_improvement: bool,
    /// Maximum number of local-search passes. `None` runs until a local
    /// optimum is reached.
    pub max_passes: Option<usize>,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            k: 1,
            best_improvement: true,
            max_passes: None,
        }
    }
}

impl DescentConfig {
    /// Sets the flip count.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Selects best- or first-improvement passes.
    pub fn with_best_improvement(mut self, best_improvement: bool) -> Self {
        self.best_improvement = best_improvement;
        self
    }

    /// Caps the number of passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.k == 0 {
            return Err("k must be at least 1".into());
        }
        if self.max_passes == Some(0) {
            return Err("max_passes must be positive or None".into());
        }
        Ok(())
    }
}
