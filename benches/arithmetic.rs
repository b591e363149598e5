use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lib::register::BitRegister;

fn arithmetic<const W: usize>(c: &mut Criterion) {
    let a = BitRegister::<W>::from(0x9E37_79B9_7F4A_7C15u64);
    let b = BitRegister::<W>::from(0xC2B2_AE3D_27D4_EB4Fu64).inverted();

    c.benchmark_group("benches")
        .bench_function(format!("add/{W}"), |bencher| {
            bencher.iter_batched_ref(
                || a.clone(),
                |x| *x += black_box(&b),
                BatchSize::SmallInput,
            );
        })
        .bench_function(format!("sub/{W}"), |bencher| {
            bencher.iter_batched_ref(
                || a.clone(),
                |x| *x -= black_box(&b),
                BatchSize::SmallInput,
            );
        })
        .bench_function(format!("inc/{W}"), |bencher| {
            bencher.iter_batched_ref(
                || b.clone(),
                |x| {
                    x.increment();
                },
                BatchSize::SmallInput,
            );
        })
        .bench_function(format!("not/{W}"), |bencher| {
            bencher.iter_batched_ref(
                || a.clone(),
                |x| {
                    x.invert();
                },
                BatchSize::SmallInput,
            );
        });
}

criterion_group!(
    benches,
    arithmetic::<64>,
    arithmetic::<256>,
    arithmetic::<4096>
);

criterion_main!(benches);
