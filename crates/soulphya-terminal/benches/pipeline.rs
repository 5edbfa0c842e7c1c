//! Benchmarks for tokenizing and running command pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use soulphya_terminal::{Terminal, split_pipes, tokenize};
use soulphya_types::clock::ManualClock;
use soulphya_types::config::TerminalConfig;
use soulphya_types::output::{OutputBuffer, OutputSink};

const LINES: [&str; 3] = [
    "echo hello",
    "cat README.md | grep consciousness | wc",
    "find . | sort | head -n 2 | tail -n 1",
];

fn bench_tokenize(c: &mut Criterion) {
    let line = r#"alias deploy-all="npm build" 'quoted arg' \$HOME plain | grep x"#;
    c.bench_function("tokenize_stages", |b| {
        b.iter(|| {
            for stage in split_pipes(line) {
                let _ = tokenize(&stage);
            }
        });
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = TerminalConfig::default();

    for (i, line) in LINES.iter().enumerate() {
        let mut term = Terminal::new(&config, OutputBuffer::new(), ManualClock::new(0));
        group.bench_with_input(BenchmarkId::new("execute", i), line, |b, line| {
            b.iter(|| {
                term.sink_mut().clear();
                term.parse_and_execute(line)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_pipeline);
criterion_main!(benches);
