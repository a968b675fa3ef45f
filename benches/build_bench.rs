//! Class building benchmarks.
//!
//! Measures `build` cost as the number of mixins and required capability
//! sources grows.

use classforge::{ClassDescriptor, ClassType, Value, define_class, init_tracing};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

fn mixin(index: usize, methods: usize) -> Arc<ClassType> {
    let mut descriptor = ClassDescriptor::new().name(format!("Mixin{index}"));
    for m in 0..methods {
        descriptor = descriptor.method(format!("m{index}_{m}"), m % 3, |_, _| Ok(Value::Undefined));
    }
    define_class(descriptor).unwrap()
}

fn bench_empty_build(c: &mut Criterion) {
    // Opt-in via CLASSFORGE_LOG. A second install is ignored.
    init_tracing().ok();
    c.bench_function("build_empty", |b| {
        b.iter(|| black_box(define_class(ClassDescriptor::new()).unwrap()))
    });
}

fn bench_mixins_and_capabilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_with_sources");
    let base = mixin(999, 16);

    for &count in &[1usize, 4, 16] {
        let sources: Vec<Arc<ClassType>> = (0..count).map(|i| mixin(i, 8)).collect();

        group.bench_with_input(BenchmarkId::new("mixins", count), &sources, |b, sources| {
            b.iter(|| {
                let descriptor = ClassDescriptor::new()
                    .name("Bench")
                    .extend(&base)
                    .borrows(sources)
                    .provides(sources)
                    .method("own", 0, |_, _| Ok(Value::Undefined));
                black_box(define_class(descriptor).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(build_benches, bench_empty_build, bench_mixins_and_capabilities);
criterion_main!(build_benches);
