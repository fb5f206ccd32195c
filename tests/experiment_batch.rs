use std::fs;
use std::sync::OnceLock;

use minimal_subgraph_embedding::{
    experiment::{run_batch, ExperimentConfig},
    output::save_records_csv,
    stats::ErrorSummary,
};

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn hundred_trials_fixed_sizes() {
    init_test_logger();
    let config = ExperimentConfig {
        num_trials: 100,
        n1_range: 3..=3,
        n2_range: 6..=6,
        max_edge_weight: 20,
        num_workers: 5,
        perm_coeff: 1,
        seed: Some(2024),
    };

    let records = run_batch(&config).unwrap();
    assert_eq!(records.len(), 100);
    for record in &records {
        assert_eq!((record.n1, record.n2), (3, 6));
        assert!(record.approx_cost >= record.exact_cost);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    save_records_csv(&path, &records).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "n1,n2,exact_change,approx_change");
    let first = &records[0];
    assert_eq!(
        lines[1],
        format!("3,6,{},{}", first.exact_cost, first.approx_cost)
    );

    let summary = ErrorSummary::from_records(&records).unwrap();
    assert_eq!(summary.samples, 100);
    assert!(summary.min <= summary.max);
    assert!(summary.median <= summary.max as f64);
}

#[test]
fn uneven_partition_fills_every_slot() {
    init_test_logger();
    let config = ExperimentConfig {
        num_trials: 23,
        n1_range: 2..=4,
        n2_range: 3..=6,
        max_edge_weight: 5,
        num_workers: 4,
        perm_coeff: 2,
        seed: Some(17),
    };

    let records = run_batch(&config).unwrap();
    assert_eq!(records.len(), 23);
    for record in &records {
        assert!((2..=4).contains(&record.n1));
        assert!(record.n2 > record.n1 && record.n2 <= 6);
        assert!(record.approx_cost >= record.exact_cost);
    }
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let config = ExperimentConfig {
        num_trials: 10,
        n1_range: 6..=6,
        n2_range: 4..=6,
        seed: Some(1),
        ..ExperimentConfig::default()
    };
    assert!(run_batch(&config).is_err());
}
