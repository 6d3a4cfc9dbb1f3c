// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lintsight::{Config, OutputFormat, run_with};

/// Build a pylint run of `n` diagnostics with module banners and a rating footer
fn synthetic_log(n: usize) -> String {
    let mut log = String::from("Run pylint ./pkg --disable=all --enable=C0114,E0401\n");
    for i in 0..n {
        if i % 20 == 0 {
            log.push_str(&format!("************* Module pkg.mod{}\n", i / 20));
            log.push_str(&format!(
                "pkg/mod{}.py:1:0: C0114: Missing module docstring (missing-module-docstring)\n",
                i / 20
            ));
        }
        log.push_str(&format!(
            "pkg/mod{}.py:{}:0: E0401: Unable to import 'dep{}.sub' (import-error)\n",
            i / 20,
            i + 2,
            i % 11
        ));
    }
    log.push_str("\n-----------------------------------\nYour code has been rated at 4.20/10\n");
    log
}

fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_with");

    for (name, format) in [("text", OutputFormat::Text), ("json", OutputFormat::Json)] {
        let config = Config {
            format,
            ..Default::default()
        };
        for size in [100, 5_000] {
            let log = synthetic_log(size);
            group.bench_with_input(BenchmarkId::new(name, size), &log, |b, log| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(log.len());
                    run_with(&config, log.as_bytes(), &mut out).map(|_| out.len())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
