use criterion::{black_box, criterion_group, criterion_main, Criterion};

extern crate anemoi_params;
use anemoi_params::generator::factor;
use anemoi_params::presets::{BN254_SCALAR, GOLDILOCKS};
use anemoi_params::{assemble, GeneratorSearch, ParamsConfig, PrimalityTest, RoundConstants};
use anemoi_params::{FactorizationSearch, MillerRabin};
use num_bigint::BigUint;
use rand_core::OsRng;

fn criterion_benchmark(c: &mut Criterion) {
    let goldilocks = ParamsConfig::from_preset(&GOLDILOCKS, 11, 1).unwrap();
    let bn254 = ParamsConfig::from_preset(&BN254_SCALAR, 5, 1).unwrap();

    c.bench_function("anemoi-params/goldilocks/alpha 11 - assemble", |bench| {
        bench.iter(|| assemble(black_box(&goldilocks)))
    });

    c.bench_function("anemoi-params/bn_254/alpha 5 - assemble", |bench| {
        bench.iter(|| assemble(black_box(&bn254)))
    });

    c.bench_function("anemoi-params/bn_254 - miller-rabin", |bench| {
        let test = MillerRabin::default();
        bench.iter(|| test.is_prime(black_box(&bn254.modulus)))
    });

    c.bench_function("anemoi-params/bn_254 - generator search", |bench| {
        let search = bn254.generator_search();
        bench.iter(|| search.find_generator(black_box(&bn254.modulus)))
    });

    c.bench_function("anemoi-params/goldilocks - factor q - 1", |bench| {
        let order = &goldilocks.modulus - 1u32;
        bench.iter(|| factor(black_box(&order), &[], 1 << 20))
    });

    c.bench_function("anemoi-params/bn_254/8 columns - round constants", |bench| {
        let params = assemble(&bn254).unwrap();
        bench.iter(|| {
            RoundConstants::generate(
                black_box(params.inv_alpha()),
                params.g(),
                params.inv_g(),
                params.q(),
                10,
                8,
            )
        })
    });

    c.bench_function("anemoi-params/bn_254/8 columns - sample state", |bench| {
        let params = assemble(&bn254).unwrap();
        let mut rng = OsRng;
        bench.iter(|| anemoi_params::State::sample(8, black_box(params.q()), &mut rng))
    });

    c.bench_function("anemoi-params/toy field - unhinted search", |bench| {
        let q = BigUint::from(1_000_003u32);
        let search = FactorizationSearch::new();
        bench.iter(|| search.find_generator(black_box(&q)))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark);
criterion_main!(benches);
