use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sparmat::TripletMatrix;

const DIM: usize = 256;
const NNZ: usize = 4_096;

fn random_matrix(seed: u64) -> TripletMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = TripletMatrix::with_dims(DIM, DIM, 0.0);
    for _ in 0..NNZ {
        let row = rng.gen_range(0..DIM);
        let col = rng.gen_range(0..DIM);
        m.insert(row, col, rng.gen_range(-100.0..100.0));
    }
    m
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let triplets: Vec<(usize, usize, f64)> = (0..NNZ)
        .map(|_| {
            (
                rng.gen_range(0..DIM),
                rng.gen_range(0..DIM),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect();

    c.bench_function("insert_4096_random", |b| {
        b.iter(|| {
            let mut m = TripletMatrix::with_dims(DIM, DIM, 0.0);
            for &(row, col, value) in &triplets {
                m.insert(row, col, value);
            }
            black_box(m.nnz())
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let m = random_matrix(11);
    let mut rng = StdRng::seed_from_u64(13);
    let probes: Vec<(usize, usize)> = (0..1_024)
        .map(|_| (rng.gen_range(0..DIM), rng.gen_range(0..DIM)))
        .collect();

    c.bench_function("get_1024_random", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(row, col) in &probes {
                acc += m.get(row, col).copied().unwrap_or(0.0);
            }
            black_box(acc)
        })
    });
}

fn bench_multiply(c: &mut Criterion) {
    let a = random_matrix(17);
    let b_mat = random_matrix(19);

    c.bench_function("multiply_4096x4096_nnz", |b| {
        b.iter(|| {
            let product = a.multiply(&b_mat).unwrap();
            black_box(product.nnz())
        })
    });
}

criterion_group!(benches, bench_insert, bench_get, bench_multiply);
criterion_main!(benches);
