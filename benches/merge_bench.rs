// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kurl::{HeaderList, HttpClient, HttpClientConfig, Options, TransferOption};

fn header_merge_benchmark(c: &mut Criterion) {
    let defaults: Vec<String> = (0..16).map(|i| format!("X-Default-{}: {}", i, i)).collect();
    let call: Vec<String> = (8..24).map(|i| format!("X-Default-{}: {}", i, i)).collect();

    c.bench_function("merge_headers", |b| {
        b.iter(|| {
            black_box(HeaderList::merge(
                defaults.iter().chain(call.iter()).map(String::as_str),
            ))
        })
    });
}

fn option_merge_benchmark(c: &mut Criterion) {
    let defaults = Options::from([
        TransferOption::Timeout(Duration::from_secs(5)),
        TransferOption::Referer("https://example.com/".into()),
        TransferOption::VerifyPeer(true),
        TransferOption::Cookie("a=1".into()),
    ]);
    let call = Options::from([
        TransferOption::Timeout(Duration::from_secs(1)),
        TransferOption::Proxy("http://127.0.0.1:3128".into()),
    ]);

    c.bench_function("merge_options", |b| {
        b.iter(|| black_box(defaults.merged(&call)))
    });

    let client = HttpClient::with_config(
        HttpClientConfig::new()
            .header("Accept", "application/json")
            .header("X-Id", "1")
            .options(defaults.clone()),
    );

    c.bench_function("prepare_request", |b| {
        b.iter(|| {
            black_box(
                client
                    .prepare("https://example.com/api", call.clone(), ["X-Id: 1", "X-Debug: on"])
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, header_merge_benchmark, option_merge_benchmark);
criterion_main!(benches);
