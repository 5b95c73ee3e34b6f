use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picnic::{KeyPair, Parameters};

const MSG: &[u8] = b"benchmark message";

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("picnic_keygen");
    for params in Parameters::supported() {
        group.bench_function(BenchmarkId::from_parameter(params), |bencher| {
            bencher.iter(|| black_box(KeyPair::generate(params).expect("keygen")))
        });
    }
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("picnic_sign");
    group.sample_size(10);
    for params in Parameters::supported() {
        let keypair = KeyPair::generate(params).expect("keygen");
        group.bench_function(BenchmarkId::from_parameter(params), |bencher| {
            bencher.iter(|| black_box(keypair.sign(black_box(MSG)).expect("sign")))
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("picnic_verify");
    group.sample_size(10);
    for params in Parameters::supported() {
        let keypair = KeyPair::generate(params).expect("keygen");
        let sig = keypair.sign(MSG).expect("sign");
        group.bench_function(BenchmarkId::from_parameter(params), |bencher| {
            bencher.iter(|| {
                let ok = keypair
                    .public_key()
                    .verify(black_box(MSG), black_box(&sig))
                    .expect("verify");
                black_box(ok);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
