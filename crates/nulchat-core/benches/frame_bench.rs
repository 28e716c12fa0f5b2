//! Criterion benchmarks for the nulchat frame codec and send path.
//!
//! Run with:
//! ```bash
//! cargo bench --package nulchat-core --bench frame_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nulchat_core::transport::mock::ChunkedTransport;
use nulchat_core::{classify_line, decode_frame, encode_frame, send_frame, Frame, Tag};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn make_message(len: usize) -> Frame {
    Frame::new(Tag::Message, vec![b'x'; len])
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for len in [0usize, 16, 256, 1022] {
        let frame = make_message(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &frame, |b, f| {
            b.iter(|| encode_frame(black_box(f)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for len in [0usize, 16, 256, 1022] {
        let bytes = encode_frame(&make_message(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &bytes, |b, bytes| {
            b.iter(|| decode_frame(black_box(bytes)))
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_name", |b| {
        b.iter(|| classify_line(black_box(b"/name Alice")))
    });
    c.bench_function("classify_message", |b| {
        b.iter(|| classify_line(black_box(b"hello there, how is everyone")))
    });
}

fn bench_send_frame(c: &mut Criterion) {
    let frame = make_message(256);
    c.bench_function("send_frame_chunked_64", |b| {
        b.iter(|| {
            let mut transport = ChunkedTransport::new(64);
            send_frame(&mut transport, black_box(&frame))
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_classify, bench_send_frame);
criterion_main!(benches);
