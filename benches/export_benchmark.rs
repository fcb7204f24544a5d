//! Benchmarks for deltadoc segmentation and export.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic deltas of mixed styled text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deltadoc::render::{self, RenderOptions};
use deltadoc::{DeltaParser, ParseOptions};

/// Creates a synthetic delta with the given number of paragraphs.
fn create_test_delta(paragraph_count: usize) -> String {
    let mut ops = Vec::with_capacity(paragraph_count * 3);

    for i in 0..paragraph_count {
        ops.push(serde_json::json!({"insert": format!("Paragraph {} opens with plain text, ", i + 1)}));
        ops.push(serde_json::json!({
            "insert": "then a styled span",
            "attributes": {"bold": true, "color": "#1f4e79", "size": "18px"}
        }));
        let align = ["left", "center", "right", "justify"][i % 4];
        ops.push(serde_json::json!({"insert": "\n", "attributes": {"align": align}}));
    }

    serde_json::json!({ "ops": ops }).to_string()
}

/// Benchmark delta shape detection.
fn bench_format_detection(c: &mut Criterion) {
    let delta = create_test_delta(1);
    let not_delta = b"Not a delta at all, just random text content";

    c.bench_function("detect_delta", |b| {
        b.iter(|| deltadoc::detect_format_from_bytes(black_box(delta.as_bytes())).unwrap());
    });

    c.bench_function("detect_non_delta", |b| {
        b.iter(|| deltadoc::detect_format_from_bytes(black_box(not_delta)).is_err());
    });
}

/// Benchmark reading and segmenting at various sizes.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for paragraph_count in [10, 100, 1000].iter() {
        let delta = create_test_delta(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| {
                let parser =
                    DeltaParser::from_str_with_options(black_box(&delta), ParseOptions::new())
                        .unwrap();
                parser.parse().unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark docx encoding of an assembled document.
fn bench_docx_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_encoding");
    let options = RenderOptions::default();

    for paragraph_count in [10, 100, 1000].iter() {
        let doc = deltadoc::parse_str(&create_test_delta(*paragraph_count)).unwrap();

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| render::to_docx(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = deltadoc::DeltaDoc::new()
                .lenient()
                .with_font("Georgia")
                .with_embed_placeholders();
        });
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_segmentation,
    bench_docx_encoding,
    bench_builder_creation,
);
criterion_main!(benches);
