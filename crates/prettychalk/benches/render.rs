use criterion::{criterion_group, criterion_main, Criterion};
use prettychalk::style::{Level, StyleChain};
use std::hint::black_box;

pub fn run_benchmarks(c: &mut Criterion) {
    let chalk = StyleChain::new(Level::TrueColor);
    let chain = chalk.bold().underline().rgb(215, 40, 39).bg_blue();
    let nested = chalk.green().paint("nested");
    let lines = "a line of text\n".repeat(32);

    let mut group = c.benchmark_group("render");

    for level in [Level::TrueColor, Level::Ansi256, Level::Ansi16] {
        group.bench_function(format!("{:?}", level), |b| {
            chalk.set_level(level);
            b.iter(|| chain.paint(black_box("Hello, world!")))
        });
    }

    chalk.set_level(Level::TrueColor);
    group.bench_function("nested", |b| {
        b.iter(|| chain.render(black_box(["outer", nested.as_str(), "outer"])))
    });
    group.bench_function("lines", |b| b.iter(|| chain.paint(black_box(&lines))));
    group.bench_function("chain", |b| {
        b.iter(|| black_box(&chalk).red().bold().bg_hex("#DEADED"))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
