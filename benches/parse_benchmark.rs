//! Benchmarks for profile parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks parse synthetic chunk streams shaped like real exports.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkedin_pdf_to_json::{Chunk, ParseOptions};

/// Creates a synthetic profile with the given number of positions.
fn create_test_profile(job_count: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut y = 0.0;
    let mut push = |chunk: Chunk, step: f64| {
        y += step;
        chunks.push(chunk.at(y));
    };

    push(Chunk::bold("Jane Doe"), 0.0);
    push(Chunk::new("Principal Engineer at Acme"), 1.0);
    push(Chunk::new("jane@example.com"), 1.0);

    push(Chunk::bold("Summary"), 10.0);
    for _ in 0..5 {
        push(Chunk::new("Builds reliable systems and the teams "), 1.0);
        push(Chunk::new("that run them."), 1.0);
    }

    push(Chunk::bold("Experience"), 10.0);
    for i in 0..job_count {
        push(Chunk::bold(format!("Engineer {}  at   Company {}", i, i)), 2.0);
        push(Chunk::new("January 2015  -  Present  "), 1.0);
        push(Chunk::new("(5 years 2 months)"), 1.0);
        push(Chunk::new("• Designed the ingestion pipeline"), 1.0);
        push(Chunk::new(" for billions of events"), 1.0);
        push(Chunk::new("• Mentored new hires"), 1.0);
        if i % 10 == 9 {
            push(Chunk::new("Page"), 50.0);
            push(Chunk::new(format!("{}", i / 10 + 1)), 1.0);
        }
    }

    push(Chunk::bold("Skills & Expertise"), 10.0);
    for i in 0..20 {
        push(Chunk::new(format!("Skill {}", i)), 1.0);
    }

    push(Chunk::new("Contact Jane Doe on LinkedIn"), 10.0);
    chunks
}

/// Benchmark chunk-stream format detection.
fn bench_format_detection(c: &mut Criterion) {
    let data = serde_json::to_vec(&create_test_profile(1)).unwrap();
    let pdf_data = b"%PDF-1.4\n%binary";

    c.bench_function("detect_chunk_array", |b| {
        b.iter(|| linkedin_pdf_to_json::detect_format_from_bytes(black_box(&data)).unwrap());
    });

    c.bench_function("detect_raw_pdf", |b| {
        b.iter(|| linkedin_pdf_to_json::detect_format_from_bytes(black_box(pdf_data)).is_err());
    });
}

/// Benchmark parsing at various sizes.
fn bench_profile_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_parsing");

    for job_count in [1, 10, 100].iter() {
        let chunks = create_test_profile(*job_count);
        let data = serde_json::to_vec(&chunks).unwrap();

        group.bench_function(format!("{}_jobs_chunks", job_count), |b| {
            b.iter(|| linkedin_pdf_to_json::parse_chunks(black_box(chunks.clone())).unwrap());
        });

        group.bench_function(format!("{}_jobs_bytes", job_count), |b| {
            let options = ParseOptions::new().with_locale(linkedin_pdf_to_json::Locale::english().unwrap());
            b.iter(|| {
                linkedin_pdf_to_json::parse_bytes_with_options(black_box(&data), options.clone())
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark locale loading, which compiles every pattern.
fn bench_locale_loading(c: &mut Criterion) {
    c.bench_function("locale_bundled_pt", |b| {
        b.iter(|| linkedin_pdf_to_json::Locale::bundled(black_box("pt")).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_profile_parsing,
    bench_locale_loading,
);
criterion_main!(benches);
