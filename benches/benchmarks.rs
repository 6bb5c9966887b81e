//! Benchmarks for the reading engine core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mushaf_core::{AyahRef, PageLoader, PageMap, Reader, SessionEntry, SessionLog, VerseIndex};

fn bench_build_page_map(c: &mut Criterion) {
    c.bench_function("build_page_map", |b| {
        let index = VerseIndex::new();
        b.iter(|| {
            black_box(PageMap::new(&index));
        });
    });
}

fn bench_page_for_ayah(c: &mut Criterion) {
    c.bench_function("page_for_ayah", |b| {
        let index = VerseIndex::new();
        let map = PageMap::new(&index);
        b.iter(|| {
            black_box(map.page_for_ayah(&index, AyahRef::new(36, 28)));
        });
    });
}

fn bench_global_index_round_trip(c: &mut Criterion) {
    c.bench_function("global_index_round_trip", |b| {
        let index = VerseIndex::new();
        b.iter(|| {
            let g = index.to_global(black_box(AyahRef::new(18, 75))).unwrap();
            black_box(index.from_global(g));
        });
    });
}

fn bench_assemble_page(c: &mut Criterion) {
    c.bench_function("assemble_page", |b| {
        let index = VerseIndex::new();
        let map = PageMap::new(&index);
        let page = *map.page(1);

        let mut loader = PageLoader::new();
        let request = loader.request(&page);
        let json = r#"{"1": {"name": "Al-Fatihah", "text": {
            "1": "a", "2": "b", "3": "c", "4": "d", "5": "e", "6": "f", "7": "g"}}}"#;
        loader.supply(request.generation, 1, json);
        let _ = loader.take_ready();

        b.iter(|| {
            black_box(loader.assemble(&page));
        });
    });
}

fn bench_session_log_churn(c: &mut Criterion) {
    c.bench_function("session_log_churn", |b| {
        b.iter(|| {
            let mut log = SessionLog::new();
            for i in 0..60u16 {
                log.append(SessionEntry {
                    date: "2024-03-01".to_string(),
                    start: AyahRef::new(2, i + 1),
                    end: AyahRef::new(2, i + 10),
                });
            }
            black_box(log.len());
        });
    });
}

fn bench_reader_page_turns(c: &mut Criterion) {
    c.bench_function("reader_page_turns", |b| {
        let mut reader = Reader::new();
        b.iter(|| {
            reader.goto_page(1);
            for _ in 0..20 {
                black_box(reader.next_page());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_page_map,
    bench_page_for_ayah,
    bench_global_index_round_trip,
    bench_assemble_page,
    bench_session_log_churn,
    bench_reader_page_turns,
);

criterion_main!(benches);
