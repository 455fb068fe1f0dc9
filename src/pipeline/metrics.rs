use crate::config::EdgeMetricsConfig;

/// Visual weight of edges. Pure; the configured constants are the only state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeMetrics {
    config: EdgeMetricsConfig,
}

impl EdgeMetrics {
    pub fn new(config: EdgeMetricsConfig) -> Self { Self { config } }

    pub fn config(&self) -> &EdgeMetricsConfig { &self.config }

    /// `log10(value + 1) * scale`, clamped to `[min_width, max_width]`.
    /// Zero, negative and NaN values get the minimum. An inverted range
    /// resolves to `max_width`.
    pub fn width(
        &self,
        value: f64,
    ) -> f64 {
        if value.is_nan() || value <= 0.0 {
            return self.config.min_width.min(self.config.max_width);
        }

        ((value + 1.0).log10() * self.config.width_scale)
            .max(self.config.min_width)
            .min(self.config.max_width)
    }

    /// Spreads `total` parallel edges evenly around zero. The span grows by two
    /// per edge up to `max_offset`.
    pub fn offset(
        &self,
        index: usize,
        total: usize,
    ) -> f64 {
        if total <= 1 {
            return 0.0;
        }

        let span = (total as f64 * 2.0).min(self.config.max_offset);
        (index as f64 / (total - 1) as f64 - 0.5) * span
    }
}
