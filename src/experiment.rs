//! Batch comparison of the exact and approximate solvers.
//!
//! Trials are split into contiguous, near-equal index ranges, one per worker.
//! Each worker owns the result slots of its range and runs its trials one after
//! another, so the only shared table is written without locks.

use crate::approx::solve_approx_permuted;
use crate::exact::solve_exact;
use crate::generate::random_instance;
use crate::{Error, Matrix, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::ThreadPoolBuilder;
use std::ops::{Range, RangeInclusive};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Seed distance between consecutive trials
const SEED_STEP: u64 = 1000;

/// How often (in trials) a worker reports progress
const PROGRESS_EVERY: usize = 100;

/// Paired solver costs for one random instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentRecord {
    pub n1: usize,
    pub n2: usize,
    pub exact_cost: usize,
    pub approx_cost: usize,
}

/// Parameters of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Number of random instances to solve
    pub num_trials: usize,
    /// Pattern sizes, drawn uniformly
    pub n1_range: RangeInclusive<usize>,
    /// Target sizes; each trial draws from max(n1 + 1, start)..=end
    pub n2_range: RangeInclusive<usize>,
    /// Edge weights are drawn uniformly from 0..=max_edge_weight
    pub max_edge_weight: usize,
    /// Size of the worker pool
    pub num_workers: usize,
    /// Leading pattern vertices permuted by the approximate solver
    pub perm_coeff: usize,
    /// Base seed; wall-clock seconds when absent
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            num_trials: 10000,
            n1_range: 3..=8,
            n2_range: 4..=10,
            max_edge_weight: 20,
            num_workers: 5,
            perm_coeff: 1,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Reject configurations that cannot produce a valid trial
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            return Err(Error::config("at least one worker is required"));
        }
        if self.n1_range.is_empty() {
            return Err(Error::config(format!(
                "empty pattern size range {:?}",
                self.n1_range
            )));
        }
        if self.n2_range.is_empty() {
            return Err(Error::config(format!(
                "empty target size range {:?}",
                self.n2_range
            )));
        }
        if *self.n1_range.end() >= *self.n2_range.end() {
            return Err(Error::config(format!(
                "largest pattern size {} leaves no larger target size in {:?}",
                self.n1_range.end(),
                self.n2_range
            )));
        }
        Ok(())
    }

    /// The configured seed, or the current wall-clock time in seconds
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }
}

/// Randomly generated instance for one trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub index: usize,
    pub pattern: Matrix,
    pub target: Matrix,
}

impl Trial {
    /// Draw sizes and weights for trial `index` from its own seeded generator
    pub fn generate(index: usize, seed: u64, config: &ExperimentConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let n1 = rng.gen_range(config.n1_range.clone());
        let n2_low = (n1 + 1).max(*config.n2_range.start());
        let n2 = rng.gen_range(n2_low..=*config.n2_range.end());
        let instance = random_instance(n1, n2, config.max_edge_weight, true, &mut rng);

        Trial {
            index,
            pattern: instance.pattern,
            target: instance.target,
        }
    }

    /// Solve with both solvers
    pub fn run(&self, perm_coeff: usize) -> Result<ExperimentRecord> {
        let started = Instant::now();
        let exact = solve_exact(&self.pattern, &self.target)?;
        let exact_elapsed = started.elapsed();

        let started = Instant::now();
        let approx = solve_approx_permuted(&self.pattern, &self.target, perm_coeff)?;
        let approx_elapsed = started.elapsed();

        debug!(
            trial = self.index,
            n1 = self.pattern.size(),
            n2 = self.target.size(),
            exact = exact.cost,
            approx = approx.cost,
            ?exact_elapsed,
            ?approx_elapsed,
            "trial finished"
        );

        Ok(ExperimentRecord {
            n1: self.pattern.size(),
            n2: self.target.size(),
            exact_cost: exact.cost,
            approx_cost: approx.cost,
        })
    }
}

/// Seed of trial `index`
pub fn trial_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add((index as u64).wrapping_mul(SEED_STEP))
}

/// Split 0..num_trials into `num_workers` contiguous ranges; the first
/// `num_trials % num_workers` ranges get one extra trial
pub fn partition(num_trials: usize, num_workers: usize) -> Vec<Range<usize>> {
    if num_workers == 0 {
        return Vec::new();
    }

    let per_worker = num_trials / num_workers;
    let remaining = num_trials % num_workers;

    let mut ranges = Vec::with_capacity(num_workers);
    let mut start = 0;
    for worker in 0..num_workers {
        let end = start + per_worker + usize::from(worker < remaining);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Run one worker's range sequentially, filling its slots
fn run_partition(
    worker: usize,
    range: Range<usize>,
    slots: &mut [Option<ExperimentRecord>],
    config: &ExperimentConfig,
    base_seed: u64,
) -> Result<()> {
    debug_assert_eq!(range.len(), slots.len());
    info!(
        worker,
        first = range.start,
        last = range.end.saturating_sub(1),
        trials = range.len(),
        "worker starting"
    );

    for (done, (index, slot)) in range.zip(slots.iter_mut()).enumerate() {
        let trial = Trial::generate(index, trial_seed(base_seed, index), config);
        *slot = Some(trial.run(config.perm_coeff)?);

        if (done + 1) % PROGRESS_EVERY == 0 {
            info!(worker, completed = done + 1, "worker progress");
        }
    }
    Ok(())
}

/// Generate and solve `config.num_trials` random instances on a fixed pool of
/// `config.num_workers` threads, returning one record per trial in trial order.
///
/// Blocks until every worker has finished. The first worker error fails the
/// whole batch.
pub fn run_batch(config: &ExperimentConfig) -> Result<Vec<ExperimentRecord>> {
    config.validate()?;
    let base_seed = config.base_seed();
    let partitions = partition(config.num_trials, config.num_workers);
    info!(
        trials = config.num_trials,
        workers = config.num_workers,
        base_seed,
        "running experiment batch"
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.num_workers)
        .thread_name(|i| format!("experiment-worker-{}", i))
        .build()?;

    let mut slots: Vec<Option<ExperimentRecord>> = vec![None; config.num_trials];
    let mut failures: Vec<Option<Error>> = partitions.iter().map(|_| None).collect();

    pool.scope(|scope| {
        let mut unassigned = slots.as_mut_slice();
        for ((worker, range), failure) in partitions.into_iter().enumerate().zip(&mut failures) {
            let (owned, rest) = std::mem::take(&mut unassigned).split_at_mut(range.len());
            unassigned = rest;
            scope.spawn(move |_| {
                if let Err(err) = run_partition(worker, range, owned, config, base_seed) {
                    *failure = Some(err);
                }
            });
        }
    });

    if let Some(err) = failures.into_iter().flatten().next() {
        return Err(err);
    }

    info!("all experiments completed");
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(Error::MissingRecord(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(num_trials: usize, num_workers: usize) -> ExperimentConfig {
        ExperimentConfig {
            num_trials,
            n1_range: 2..=3,
            n2_range: 3..=5,
            max_edge_weight: 9,
            num_workers,
            perm_coeff: 1,
            seed: Some(42),
        }
    }

    #[test]
    fn test_partition_sizes() {
        let ranges = partition(10, 3);
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);

        let ranges = partition(2, 4);
        assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);

        assert!(partition(5, 0).is_empty());
    }

    #[test]
    fn test_partition_covers_every_trial_once() {
        for trials in 0..30 {
            for workers in 1..7 {
                let ranges = partition(trials, workers);
                assert_eq!(ranges.len(), workers);
                assert_eq!(ranges.first().map(|r| r.start), Some(0));
                assert_eq!(ranges.last().map(|r| r.end), Some(trials));
                assert!(ranges.windows(2).all(|w| w[0].end == w[1].start));
                let lens: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
                let max = lens.iter().max().copied().unwrap_or(0);
                let min = lens.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn test_trial_respects_size_ranges() {
        let config = small_config(1, 1);
        for index in 0..50 {
            let trial = Trial::generate(index, trial_seed(7, index), &config);
            let (n1, n2) = (trial.pattern.size(), trial.target.size());
            assert!((2..=3).contains(&n1));
            assert!(n2 > n1 && n2 <= 5);
            assert!((0..n2).all(|i| trial.target.get(i, i) == 0));
        }
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let mut config = small_config(4, 0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.num_workers = 2;
        config.n1_range = 5..=5;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.n1_range = RangeInclusive::new(3, 2);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_batch_is_reproducible_with_seed() {
        let config = small_config(12, 3);
        let first = run_batch(&config).unwrap();
        let second = run_batch(&ExperimentConfig {
            num_workers: 2,
            ..config.clone()
        })
        .unwrap();
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_more_workers_than_trials() {
        let records = run_batch(&small_config(2, 4)).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.approx_cost >= r.exact_cost));
    }
}
