//! Token decoding performance benchmarks
//!
//! Benchmarks decoding with different payload sizes, the individual
//! decoding stages, and status derivation.

use chrono::Utc;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use jwtpeek::*;

/// Helper to generate test tokens of different sizes
mod helpers {
    use jwtpeek::utils::base64url;

    pub fn generate_token_with_payload_size(payload_size: usize) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;

        // Create payload with specified size
        let mut payload =
            r#"{"sub":"user123","iss":"https://example.com","iat":1516239022,"exp":9999999999"#
                .to_string();
        let extra_size = payload_size.saturating_sub(payload.len());
        if extra_size > 0 {
            payload.push_str(",\"data\":\"");
            payload.push_str(&"x".repeat(extra_size.saturating_sub(10)));
            payload.push_str("\"}");
        } else {
            payload.push('}');
        }

        format!(
            "{}.{}.{}",
            base64url::encode_segment(header),
            base64url::encode_segment(&payload),
            base64url::encode_bytes(&[0x5a; 32])
        )
    }
}

fn bench_decoding_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("decode_by_size");

    for size in sizes {
        let token = generate_token_with_payload_size(size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| {
                let _ = decode(black_box(&token));
            });
        });
    }

    group.finish();
}

fn bench_decoding_stages(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let token = generate_token_with_payload_size(256);
    let (header_b64, payload_b64, _) = split_token(&token).unwrap();

    let mut group = c.benchmark_group("decode_stages");

    group.bench_function("full_decode", |b| {
        b.iter(|| {
            let _ = decode(black_box(&token));
        });
    });

    group.bench_function("split_only", |b| {
        b.iter(|| {
            let _ = split_token(black_box(&token));
        });
    });

    group.bench_function("header_segment", |b| {
        b.iter(|| {
            let _ = decode_segment(black_box(header_b64));
        });
    });

    group.bench_function("payload_segment", |b| {
        b.iter(|| {
            let _ = decode_segment(black_box(payload_b64));
        });
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let decoded = decode(&generate_token_with_payload_size(256)).unwrap();
    let now = 1_700_000_000;

    let mut group = c.benchmark_group("status");

    group.bench_function("valid", |b| {
        b.iter(|| {
            let _ = status_in(black_box(decoded.payload()), black_box(now), &Utc);
        });
    });

    group.bench_function("no_expiration", |b| {
        let empty = serde_json::Map::new();
        b.iter(|| {
            let _ = status_in(black_box(&empty), black_box(now), &Utc);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decoding_by_size,
    bench_decoding_stages,
    bench_status
);
criterion_main!(benches);
