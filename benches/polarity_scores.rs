use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use email_sentiment::emails::{CHALLENGE, FRUSTRATED, MESSAGES, SCOPE};
use email_sentiment::report;
use email_sentiment::sentiment::SentimentAnalysisPipelineBuilder;

fn bench_single_text(c: &mut Criterion) {
    let pipeline = SentimentAnalysisPipelineBuilder::vader()
        .build()
        .expect("vader pipeline");
    let mut group = c.benchmark_group("polarity_scores");

    for (name, text) in [
        ("challenge", CHALLENGE),
        ("message", FRUSTRATED),
        ("scope", SCOPE),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| pipeline.run(black_box(*text)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let pipeline = SentimentAnalysisPipelineBuilder::vader()
        .build()
        .expect("vader pipeline");
    let texts = [FRUSTRATED, CHALLENGE, SCOPE];

    c.bench_function("batch_three_emails", |b| {
        b.iter(|| pipeline.run(black_box(&texts)))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let pipeline = SentimentAnalysisPipelineBuilder::vader()
        .build()
        .expect("vader pipeline");

    c.bench_function("write_report", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            report::write_report(&pipeline, &MESSAGES, &mut out).expect("report");
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_single_text, bench_batch, bench_full_report);
criterion_main!(benches);
