use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use underbar::{filter, map, reduce};

fn filter_map_reduce(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(500_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("filter_map_reduce");

    group.bench_function("iter", |bencher| {
        bencher.iter(|| black_box(iter_pipeline(&nums)));
    });

    group.bench_function("underbar", |bencher| {
        bencher.iter(|| black_box(ub_pipeline(&nums)));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(300);
    targets = filter_map_reduce
}
criterion_main!(benches);

fn iter_pipeline(nums: &[i32]) -> i64 {
    let positives: Vec<_> = nums.iter().filter(|&&num| num > 0).collect();
    let squares: Vec<_> = positives
        .into_iter()
        .map(|&num| i64::from(num) * i64::from(num))
        .collect();

    squares.into_iter().fold(0, |a, b| a + b)
}

fn ub_pipeline(nums: &[i32]) -> i64 {
    let positives = filter(nums, |&&num| num > 0);
    let squares = map(positives, |&num| i64::from(num) * i64::from(num));

    reduce(squares, |square| square, |a, b| a + b, 0)
}
