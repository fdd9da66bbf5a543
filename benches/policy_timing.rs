use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::common::config::{DEFAULT_SEED, TIMING_STUDY_LENGTH, TIMING_STUDY_PAGE_RANGE};
use pagesim::workload::generate;
use pagesim::{PolicyKind, Simulator};

fn bench_policies(c: &mut Criterion) {
    let reference = generate(TIMING_STUDY_LENGTH, TIMING_STUDY_PAGE_RANGE, DEFAULT_SEED).unwrap();
    let simulator = Simulator::new(&reference);

    for frames in [3, 7, 10] {
        let mut group = c.benchmark_group(format!("frames_{frames}"));
        for policy in PolicyKind::ALL {
            group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
                b.iter(|| {
                    simulator
                        .run_policy(black_box(frames), black_box(policy))
                        .unwrap()
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
