use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fiblab_core::sequence::{fibonacci, FibIterator, IndexQuery, MemoFibonacci};

fn criterion_benchmark(c: &mut Criterion) {
    let index = black_box(1000usize);

    c.bench_function(format!("fib_iterator {index}").as_str(), |b| {
        b.iter(|| FibIterator::new().nth(index).unwrap())
    });

    c.bench_function(format!("fib_generator {index}").as_str(), |b| {
        b.iter(|| fibonacci().nth(index).unwrap())
    });

    c.bench_function(format!("fib_memoized_cold {index}").as_str(), |b| {
        b.iter(|| MemoFibonacci::new().get(index as i64).unwrap())
    });

    c.bench_function(format!("fib_memoized_warm {index}").as_str(), |b| {
        let mut memo = MemoFibonacci::new();
        memo.get(index as i64).unwrap();
        b.iter(|| memo.get(index as i64).unwrap())
    });

    c.bench_function(format!("fib_one_shot {index}").as_str(), |b| {
        b.iter(|| IndexQuery::start().resume(index as i64).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
