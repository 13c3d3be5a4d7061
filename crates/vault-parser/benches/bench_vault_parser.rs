use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use vault_parser::{normalize, parse_line};

fn generate_lines(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| match rng.gen_range(0..4) {
            0 => format!("site{i}.com:user{i}:pw{i}"),
            1 => format!("site{i}.com|user{i}|pw|{i}"),
            2 => format!("user{i} pw{i} https://site{i}.com/login"),
            _ => format!("user{i}:pw {i}:http://www.site{i}.net/a/b"),
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let lines = generate_lines(10_000);
    c.bench_function("normalize_10k_mixed", |b| {
        b.iter(|| {
            for l in &lines {
                black_box(normalize(l));
            }
        })
    });
}

fn bench_parse_line(c: &mut Criterion) {
    let lines = generate_lines(10_000);
    c.bench_function("parse_line_10k_mixed", |b| {
        b.iter(|| {
            for l in &lines {
                black_box(parse_line(l));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_parse_line);
criterion_main!(benches);
