//! Configuration for trend-index computation and classification.

use std::collections::BTreeMap;

/// Configuration options for the trend-index pipeline.
///
/// Holds the credible level used for interval summaries, the two asymmetric
/// classification thresholds, the small-group filtering threshold, and the
/// natural display orders for factors that have an ecologically meaningful
/// ordering.
#[derive(Debug, Clone)]
pub struct Config {
    /// Probability mass of the credible interval. Default: 0.95.
    pub credible_level: f64,

    /// Lower classification threshold on the proportional scale, below which
    /// a change stops being ecologically negligible. Must be negative.
    /// Default: -0.20 (a 20% decline).
    pub decline_threshold: f64,

    /// Upper classification threshold on the proportional scale. Must be
    /// positive. Default: 0.25 (a 25% increase).
    ///
    /// The asymmetry mirrors the proportional scale itself: a -20% decline
    /// and a +25% increase are multiplicative inverses.
    pub increase_threshold: f64,

    /// Minimum supporting species count for a category or category pair.
    /// Groups with `count <= min_group_size` are dropped from final output
    /// by both filtering stages. Default: 14.
    pub min_group_size: u64,

    /// Natural display orders keyed by factor name (e.g. nutrient-poor to
    /// nutrient-rich). Factors listed here keep this fixed order in
    /// summaries regardless of effect size; unlisted factors are sorted by
    /// descending posterior median.
    pub natural_orders: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credible_level: 0.95,
            decline_threshold: -0.20,
            increase_threshold: 0.25,
            min_group_size: 14,
            natural_orders: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credible level.
    pub fn credible_level(mut self, level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "credible_level must be in (0, 1)"
        );
        self.credible_level = level;
        self
    }

    /// Set the classification thresholds (decline, increase).
    pub fn thresholds(mut self, decline: f64, increase: f64) -> Self {
        assert!(decline < 0.0, "decline_threshold must be negative");
        assert!(increase > 0.0, "increase_threshold must be positive");
        self.decline_threshold = decline;
        self.increase_threshold = increase;
        self
    }

    /// Set the minimum supporting species count.
    pub fn min_group_size(mut self, size: u64) -> Self {
        self.min_group_size = size;
        self
    }

    /// Register a natural display order for a factor.
    pub fn natural_order(
        mut self,
        factor: impl Into<String>,
        levels: Vec<String>,
    ) -> Self {
        self.natural_orders.insert(factor.into(), levels);
        self
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), String> {
        if self.credible_level <= 0.0 || self.credible_level >= 1.0 {
            return Err("credible_level must be in (0, 1)".to_string());
        }
        if self.decline_threshold >= 0.0 {
            return Err("decline_threshold must be negative".to_string());
        }
        if self.increase_threshold <= 0.0 {
            return Err("increase_threshold must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.credible_level, 0.95);
        assert_eq!(config.decline_threshold, -0.20);
        assert_eq!(config.increase_threshold, 0.25);
        assert_eq!(config.min_group_size, 14);
        assert!(config.natural_orders.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::new()
            .credible_level(0.90)
            .thresholds(-0.25, 0.33)
            .min_group_size(10)
            .natural_order(
                "NitrogenAffinity",
                vec!["Poor".into(), "Moderate".into(), "Rich".into()],
            );

        assert_eq!(config.credible_level, 0.90);
        assert_eq!(config.decline_threshold, -0.25);
        assert_eq!(config.increase_threshold, 0.33);
        assert_eq!(config.min_group_size, 10);
        assert_eq!(config.natural_orders["NitrogenAffinity"].len(), 3);
    }

    #[test]
    fn test_validation_rejects_bad_thresholds() {
        let mut config = Config::default();
        config.decline_threshold = 0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.increase_threshold = -0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.credible_level = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic]
    fn test_invalid_credible_level_panics() {
        Config::new().credible_level(1.5);
    }

    #[test]
    #[should_panic]
    fn test_positive_decline_threshold_panics() {
        Config::new().thresholds(0.2, 0.25);
    }
}
