//! Descriptive statistics over ratio populations.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divides by `n - 1`), `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Summary of the outlier-excluded ratio distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioStatistics {
    pub sample_size: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// `mean + sigma * std_dev`.
    pub max_ratio: f64,
}

impl RatioStatistics {
    /// Statistics of `ratios` within `[min, max]`; `None` below two usable values.
    pub fn from_ratios(ratios: &[f64], min: f64, max: f64, sigma: f64) -> Option<Self> {
        let usable: Vec<f64> = ratios
            .iter()
            .copied()
            .filter(|ratio| ratio.is_finite() && *ratio >= min && *ratio <= max)
            .collect();
        let mean = mean(&usable)?;
        let std_dev = sample_std_dev(&usable)?;
        Some(Self {
            sample_size: usable.len(),
            mean,
            std_dev,
            max_ratio: mean + sigma * std_dev,
        })
    }
}
