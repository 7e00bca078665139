use RustedEnvSci::arrays::{
    ArgExtremaOptions, ArgSortOptions, DivisionOptions, MaskedArray, argmax, argsort, division,
};
use criterion::{Criterion, criterion_group, criterion_main};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_data(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n).map(|_| rng.random::<f64>()).collect()
}

fn bench_argsort(c: &mut Criterion) {
    let v = random_data(100_000);
    let arr = Array1::from(v.clone());
    let mask: Vec<bool> = (0..v.len()).map(|i| i % 10 == 0).collect();
    let ma = MaskedArray::from_vec(v.clone(), mask).unwrap();
    c.bench_function("argsort vec", |b| {
        b.iter(|| argsort(black_box(&v), &ArgSortOptions::new()))
    });
    c.bench_function("argsort ndarray", |b| {
        b.iter(|| argsort(black_box(&arr), &ArgSortOptions::new()))
    });
    c.bench_function("argsort masked", |b| {
        b.iter(|| argsort(black_box(&ma), &ArgSortOptions::new()))
    });
    c.bench_function("argmax masked", |b| {
        b.iter(|| argmax(black_box(&ma), &ArgExtremaOptions::new()))
    });
}

fn bench_division(c: &mut Criterion) {
    let a = Array1::from(random_data(100_000));
    let b = a.mapv(|x| x - 0.5);
    let opts = DivisionOptions::new().prec(1e-3);
    c.bench_function("division", |bench| {
        bench.iter(|| division(black_box(&a), black_box(&b), &opts))
    });
}

criterion_group!(benches, bench_argsort, bench_division);
criterion_main!(benches);
