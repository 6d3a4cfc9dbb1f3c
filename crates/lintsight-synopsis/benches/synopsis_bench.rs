// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lintsight_parse::decompose;
use lintsight_synopsis::{GroupOptions, KeySelector, Synopsis, SynopsisConfig, group_diagnostics};

/// Build a pylint-style log with `n` diagnostic lines spread over 40 rules
fn synthetic_log(n: usize) -> String {
    let mut log = String::new();
    for i in 0..n {
        if i % 50 == 0 {
            log.push_str(&format!("************* Module pkg.mod{}\n", i / 50));
        }
        log.push_str(&format!(
            "pkg/mod{}.py:{}:0: E{:04}: Unable to import 'lib{}.sub' (import-error)\n",
            i / 50,
            i + 1,
            i % 40,
            i % 7
        ));
    }
    log
}

fn grouping_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_diagnostics");

    for size in [1_000, 10_000] {
        let log = synthetic_log(size);
        let result = decompose(&log);
        for selector in [KeySelector::RuleCode, KeySelector::MessageTemplate] {
            let options = GroupOptions {
                selector,
                ..GroupOptions::default()
            };
            group.bench_with_input(
                BenchmarkId::new(selector.as_str(), size),
                &result.diagnostics,
                |b, diagnostics| b.iter(|| group_diagnostics(diagnostics, &options)),
            );
        }
    }

    group.finish();
}

fn synopsis_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("synopsis");
    let config = SynopsisConfig::default();

    for size in [100, 1_000, 10_000] {
        let log = synthetic_log(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| Synopsis::analyze(log, &config).render())
        });
    }

    group.finish();
}

criterion_group!(benches, grouping_benchmarks, synopsis_benchmarks);
criterion_main!(benches);
