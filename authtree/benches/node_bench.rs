//! Benchmarks for profile property injection.

use authtree::diagnostics::NoOpDiagnostics;
use authtree::node::{GetProfilePropertyNode, Node, ProfilePropertyConfig};
use authtree::testing::{TestAttempt, TestProfile};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn process_benchmark(c: &mut Criterion) {
    let mut profile = TestProfile::new("/", "alice");
    let mut config = ProfilePropertyConfig::new();
    for i in 0..16 {
        let value = format!("value-{i}");
        profile = profile.with_attribute(&format!("attr{i}"), &[value.as_str()]);
        config = config.with_property(format!("attr{i}"), format!("key{i}"));
    }
    // one mapping that never resolves
    config = config.with_property("missing", "absent");

    let store = Arc::new(TestProfile::store(&[profile]));
    let node = GetProfilePropertyNode::new(Arc::new(config), store)
        .with_diagnostics(Arc::new(NoOpDiagnostics));
    let ctx = TestAttempt::for_user("alice", "/").build();

    c.bench_function("process_17_mappings", |b| {
        b.iter(|| black_box(node.process(black_box(&ctx))))
    });
}

criterion_group!(benches, process_benchmark);
criterion_main!(benches);
