//! Criterion benchmarks for the u-pareto selection and archiving core.
//!
//! Uses random points on the simplex-like front `sum(x_i) = 1` plus
//! dominated noise, so every benchmark sees a mix of fronts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::{ArchiveConfig, BoundedArchive, DensityEstimator, Hypervolume, Ranking};

// ===========================================================================
// Point generators
// ===========================================================================

/// `n` points in `m` objectives; roughly half lie on the front.
fn random_population(n: usize, m: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let raw: Vec<f64> = (0..m).map(|_| rng.random_range(0.01..1.0)).collect();
            let sum: f64 = raw.iter().sum();
            let lift = if i % 2 == 0 { 0.0 } else { rng.random_range(0.0..0.5) };
            raw.iter().map(|x| x / sum + lift).collect()
        })
        .collect()
}

/// `n` mutually non-dominated points in `m` objectives.
fn random_front(n: usize, m: usize, seed: u64) -> Vec<Vec<f64>> {
    random_population(2 * n, m, seed)
        .into_iter()
        .step_by(2)
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    group.sample_size(20);

    for n in [100usize, 400, 1000] {
        let population = random_population(n, 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, pop| {
            b.iter(|| {
                let ranking = u_pareto::ranking::non_dominated_sort(black_box(pop));
                black_box(ranking)
            })
        });
    }
    group.finish();
}

fn bench_hypervolume(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume");
    group.sample_size(10);

    for (m, n) in [(2usize, 200usize), (3, 100), (4, 50)] {
        let front = random_front(n, m, 7);
        let indicator = Hypervolume::new(vec![2.0; m]).expect("valid reference point");
        group.bench_with_input(
            BenchmarkId::new(format!("m{}", m), n),
            &(front, indicator),
            |b, (f, hv)| {
                b.iter(|| {
                    let volume = hv.compute(black_box(f));
                    black_box(volume)
                })
            },
        );
    }
    group.finish();
}

fn bench_archive_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_insert");
    group.sample_size(10);

    let population = random_population(500, 2, 3);
    for (name, density) in [
        ("crowding", DensityEstimator::CrowdingDistance),
        ("knn", DensityEstimator::nearest_neighbor()),
        ("hypervolume", DensityEstimator::hypervolume_contribution()),
    ] {
        let config = ArchiveConfig::new(50).with_density(density);
        group.bench_with_input(
            BenchmarkId::new(name, population.len()),
            &(config, &population),
            |b, (cfg, pop)| {
                b.iter(|| {
                    let mut archive = BoundedArchive::new(cfg.clone()).expect("valid config");
                    for p in pop.iter() {
                        let _ = archive.insert(p.clone());
                    }
                    black_box(archive.len())
                })
            },
        );
    }
    group.finish();
}

fn bench_ranking_constrained(c: &mut Criterion) {
    let population = random_population(400, 2, 11);
    c.bench_function("ranking_constrained_400", |b| {
        b.iter(|| {
            let ranking = Ranking::compute(black_box(&population), &Default::default());
            black_box(ranking)
        })
    });
}

criterion_group!(
    benches,
    bench_ranking,
    bench_ranking_constrained,
    bench_hypervolume,
    bench_archive_insert
);
criterion_main!(benches);
