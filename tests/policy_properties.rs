//! Property tests over random reference strings.

use proptest::prelude::*;

use pagesim::workload::generate;
use pagesim::{ExperimentConfig, ExperimentHarness, PolicyKind, ReferenceString, Simulator};

fn reference_strategy() -> impl Strategy<Value = ReferenceString> {
    prop::collection::vec(0u32..12, 1..200).prop_map(ReferenceString::from)
}

proptest! {
    #[test]
    fn prop_lru_variants_agree(reference in reference_strategy(), frames in 1usize..10) {
        let simulator = Simulator::new(&reference);
        let counter = simulator.run_policy(frames, PolicyKind::LruCounter).unwrap();

        for policy in [PolicyKind::LruStack, PolicyKind::LruTimer] {
            let other = simulator.run_policy(frames, policy).unwrap();
            prop_assert_eq!(other.stats, counter.stats);
            prop_assert_eq!(&other.evicted, &counter.evicted);
        }
    }

    #[test]
    fn prop_optimal_never_worse_than_lru(reference in reference_strategy(), frames in 1usize..10) {
        let simulator = Simulator::new(&reference);
        let opt = simulator.run_policy(frames, PolicyKind::Optimal).unwrap();

        for policy in PolicyKind::LRU {
            let lru = simulator.run_policy(frames, policy).unwrap();
            prop_assert!(opt.faults() <= lru.faults());
        }
    }

    #[test]
    fn prop_optimal_monotonic_in_frames(reference in reference_strategy()) {
        let frames: Vec<usize> = (1..=12).collect();
        let table = ExperimentHarness::sweep(&frames, &reference, &[PolicyKind::Optimal]).unwrap();

        prop_assert!(table.anomalies(PolicyKind::Optimal).is_empty());
    }

    #[test]
    fn prop_fault_count_bounds(reference in reference_strategy(), frames in 1usize..10) {
        let distinct = reference.distinct_pages().len() as u64;

        for policy in PolicyKind::ALL {
            let result = Simulator::new(&reference).run_policy(frames, policy).unwrap();
            prop_assert!(result.faults() <= reference.len() as u64);
            prop_assert!(result.faults() >= distinct);
            prop_assert_eq!(result.stats.accesses(), reference.len() as u64);
            prop_assert_eq!(result.stats.evictions, result.evicted.len() as u64);
        }
    }

    #[test]
    fn prop_generation_deterministic(seed in any::<u64>(), length in 1usize..300, range in 1u32..30) {
        let a = generate(length, range, seed).unwrap();
        let b = generate(length, range, seed).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|p| p.0 < range));
    }
}

#[test]
fn test_timing_study_fault_counts_reproducible() {
    let config = ExperimentConfig::timing_study().with_seed(2024);
    let first = ExperimentHarness::run(&config).unwrap();
    let second = ExperimentHarness::run(&config).unwrap();

    assert_eq!(first.reference.fingerprint(), second.reference.fingerprint());
    let faults = |report: &pagesim::ExperimentReport| -> Vec<u64> {
        report.results.rows().iter().map(|row| row.faults).collect()
    };
    assert_eq!(faults(&first), faults(&second));
    assert_eq!(first.results.len(), 10 * 4);
}
