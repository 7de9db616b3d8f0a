//! Ranking throughput over a realistic workspace-sized candidate set.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use hop::fuzzy;

/// ~1000 path-like directories, each under 100 chars.
fn candidates() -> Vec<String> {
    let groups = ["services", "libs", "tools", "infra", "apps", "docs"];
    let leaves = ["src", "tests", "scripts", "config", "migrations", "assets"];
    let mut out = Vec::with_capacity(1000);
    for i in 0..1000 {
        let group = groups[i % groups.len()];
        let leaf = leaves[(i / groups.len()) % leaves.len()];
        out.push(format!("{}/project-{}/{}/module_{}/", group, i, leaf, i % 17));
    }
    out
}

fn bench_filter(c: &mut Criterion) {
    let lines = candidates();

    c.bench_function("filter_1000_short_query", |b| {
        b.iter(|| fuzzy::filter(black_box("infra"), black_box(&lines)))
    });
    c.bench_function("filter_1000_long_query", |b| {
        b.iter(|| fuzzy::filter(black_box("svcproj42srcmod"), black_box(&lines)))
    });
    c.bench_function("score_single", |b| {
        b.iter(|| {
            fuzzy::score(
                black_box("amor"),
                black_box("app/models/order/controllers/admin"),
            )
        })
    });
    c.bench_function("positions_single", |b| {
        b.iter(|| {
            fuzzy::positions(
                black_box("amor"),
                black_box("app/models/order/controllers/admin"),
            )
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
