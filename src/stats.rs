//! Summary of how far the approximation lands from the exact optimum.

use crate::experiment::ExperimentRecord;
use std::fmt;

/// Error statistics over a batch of experiment records.
///
/// Absolute error is `approx_cost - exact_cost` (never negative). Relative error
/// divides it by the exact cost and is only defined for trials with a non-zero
/// exact cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSummary {
    pub samples: usize,
    /// Trials where the approximation found the optimum
    pub exact_matches: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub p95: f64,
    pub p99: f64,
    pub p999: f64,
    /// Number of trials with a defined relative error
    pub relative_samples: usize,
    pub mean_relative: Option<f64>,
    pub max_relative: Option<f64>,
}

impl ErrorSummary {
    /// None for an empty batch
    pub fn from_records(records: &[ExperimentRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut errors: Vec<usize> = records
            .iter()
            .map(|r| r.approx_cost.saturating_sub(r.exact_cost))
            .collect();
        errors.sort_unstable();

        let samples = errors.len();
        let mean = errors.iter().sum::<usize>() as f64 / samples as f64;
        let std_dev = if samples > 1 {
            let squares: f64 = errors.iter().map(|&e| (e as f64 - mean).powi(2)).sum();
            (squares / (samples - 1) as f64).sqrt()
        } else {
            0.0
        };

        let relative: Vec<f64> = records
            .iter()
            .filter(|r| r.exact_cost != 0)
            .map(|r| r.approx_cost.saturating_sub(r.exact_cost) as f64 / r.exact_cost as f64)
            .collect();
        let mean_relative =
            (!relative.is_empty()).then(|| relative.iter().sum::<f64>() / relative.len() as f64);
        let max_relative = relative.iter().copied().reduce(f64::max);

        Some(ErrorSummary {
            samples,
            exact_matches: errors.iter().take_while(|&&e| e == 0).count(),
            mean,
            median: percentile(&errors, 50.0),
            std_dev,
            min: errors[0],
            max: errors[samples - 1],
            p95: percentile(&errors, 95.0),
            p99: percentile(&errors, 99.0),
            p999: percentile(&errors, 99.9),
            relative_samples: relative.len(),
            mean_relative,
            max_relative,
        })
    }
}

/// Percentile of ascending `sorted`, interpolating linearly between the two
/// closest ranks
pub fn percentile(sorted: &[usize], pct: f64) -> f64 {
    match sorted.len() {
        0 => return 0.0,
        1 => return sorted[0] as f64,
        _ => {}
    }

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    sorted[lower] as f64 + (sorted[upper] as f64 - sorted[lower] as f64) * fraction
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples:                    {}", self.samples)?;
        writeln!(
            f,
            "Approximation exact:        {} ({:.2}%)",
            self.exact_matches,
            self.exact_matches as f64 / self.samples as f64 * 100.0
        )?;
        writeln!(f, "Mean absolute error:        {:.6}", self.mean)?;
        writeln!(f, "Median absolute error:      {:.6}", self.median)?;
        writeln!(f, "Std deviation:              {:.6}", self.std_dev)?;
        writeln!(f, "Minimum observed error:     {}", self.min)?;
        writeln!(f, "Maximum observed error:     {}", self.max)?;
        writeln!(f, "95th percentile:            {:.6}", self.p95)?;
        writeln!(f, "99th percentile:            {:.6}", self.p99)?;
        writeln!(f, "99.9th percentile:          {:.6}", self.p999)?;
        write!(
            f,
            "Relative error samples:     {} / {}",
            self.relative_samples, self.samples
        )?;
        if let (Some(mean), Some(max)) = (self.mean_relative, self.max_relative) {
            writeln!(f)?;
            writeln!(
                f,
                "Mean relative error:        {:.6} ({:.2}%)",
                mean,
                mean * 100.0
            )?;
            write!(
                f,
                "Maximum relative error:     {:.6} ({:.2}%)",
                max,
                max * 100.0
            )?;
        }
        Ok(())
    }
}
