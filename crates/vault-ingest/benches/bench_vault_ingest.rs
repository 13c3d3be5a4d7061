use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use vault_classifier::CategoryTable;
use vault_core::{PersistedRecord, SourceMeta};
use vault_ingest::Engine;
use vault_ledger::Ledger;

fn generate_dump(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let i = rng.gen_range(0..n / 2);
            match i % 3 {
                0 => format!("www.site{i}.com/login:user{i}:pw{i}"),
                1 => format!("user{i} pw|{i} https://site{i}.org/auth"),
                _ => format!("mail{i}.gmail.com|user{i}|pw {i}"),
            }
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let lines = generate_dump(20_000);
    let table = CategoryTable::from_pairs(&[("mail", &["gmail.com"]), ("social", &["facebook.com"])]);
    let meta = SourceMeta::new("bench", "2024-01-01 00:00:00");

    c.bench_function("engine_process_20k_with_dupes", |b| {
        b.iter(|| {
            let engine: Engine<Vec<PersistedRecord>> = Engine::new(table.clone(), Ledger::new(), Vec::new());
            for line in &lines {
                black_box(engine.process_line(line, &meta).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
