// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use remora::{BodyProcessor, RestRequest};

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("build_request", |b| {
        b.iter(|| {
            let request = RestRequest::builder("/v1/items")
                .post()
                .json()
                .header("x-api-key", "bench")
                .parameter("page", 3)
                .parameter("per_page", 50)
                .build();
            black_box(request.endpoint().len())
        })
    });
}

fn multipart_encode_benchmark(c: &mut Criterion) {
    let payload = vec![0xA5u8; 64 * 1024];

    c.bench_function("multipart_encode_64k", |b| {
        b.iter(|| {
            let processor =
                BodyProcessor::multipart_bytes(payload.clone(), "blob.bin", None, None);
            let mut sink = Vec::with_capacity(payload.len() + 256);
            processor.write_content(&mut sink).unwrap();
            black_box(sink.len())
        })
    });
}

criterion_group!(benches, builder_benchmark, multipart_encode_benchmark);
criterion_main!(benches);
