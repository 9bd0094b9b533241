use super::params::*;
use classic_algo::algo::sort::*;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_input(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.random()).collect()
}

pub fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);

    for len in SORT_LENGTHS {
        let input = random_input(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("Merge", len), &input, |b, i| {
            b.iter_with_large_drop(|| merge_sort(black_box(i)))
        });
        group.bench_with_input(BenchmarkId::new("Parallel merge", len), &input, |b, i| {
            b.iter_with_large_drop(|| par_merge_sort(black_box(i)))
        });
        group.bench_with_input(BenchmarkId::new("Quick (middle)", len), &input, |b, i| {
            b.iter_with_large_drop(|| quick_sort_with(black_box(i), PivotRule::Middle))
        });
        group.bench_with_input(
            BenchmarkId::new("Quick (median of three)", len),
            &input,
            |b, i| {
                b.iter_with_large_drop(|| quick_sort_with(black_box(i), PivotRule::MedianOfThree))
            },
        );
    }

    for len in QUADRATIC_SORT_LENGTHS {
        let input = random_input(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("Bubble", len), &input, |b, i| {
            b.iter_batched_ref(|| i.clone(), |v| bubble_sort(v), BatchSize::SmallInput)
        });
        group.bench_with_input(BenchmarkId::new("Selection", len), &input, |b, i| {
            b.iter_batched_ref(|| i.clone(), |v| selection_sort(v), BatchSize::SmallInput)
        });
        group.bench_with_input(BenchmarkId::new("Insertion", len), &input, |b, i| {
            b.iter_batched_ref(|| i.clone(), |v| insertion_sort(v), BatchSize::SmallInput)
        });
    }

    group.finish();
}
