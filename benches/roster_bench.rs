//! Benchmarks for rosterdb collection, sort and codec operations

use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rosterdb::codec::{read_records, write_records};
use rosterdb::{Collection, Date, Record, SortKey};

fn build_collection(n: i32) -> Collection {
    let mut collection = Collection::new();
    for i in 0..n {
        // Scramble ids/salaries so sorts have real work to do
        let id = (i * 7919) % n;
        collection
            .append(Record::new(
                id,
                "dept",
                format!("name{:05}", (i * 31) % n),
                (i * 104_729) % 100_000,
                Date::new(2000 + i % 20, 1 + i % 12, 1 + i % 28),
                Date::new(2030, 12, 31),
            ))
            .unwrap();
    }
    collection
}

fn collection_benchmarks(c: &mut Criterion) {
    c.bench_function("append_1000", |b| {
        b.iter(|| black_box(build_collection(1000)))
    });

    let base = build_collection(1000);
    c.bench_function("remove_by_id_1000", |b| {
        b.iter_batched(
            || base.clone(),
            |mut collection| {
                for id in 0..1000 {
                    collection.remove_by_id(id);
                }
                collection
            },
            BatchSize::SmallInput,
        )
    });
}

fn sort_benchmarks(c: &mut Criterion) {
    let base = build_collection(500);

    for key in [SortKey::Id, SortKey::Name, SortKey::Salary] {
        c.bench_function(&format!("selection_sort_by_{}_500", key), |b| {
            b.iter_batched(
                || base.clone(),
                |mut collection| {
                    collection.sort(key);
                    collection
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn codec_benchmarks(c: &mut Criterion) {
    let collection = build_collection(1000);
    let mut encoded = Vec::new();
    write_records(&mut encoded, &collection).unwrap();

    c.bench_function("write_records_1000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(encoded.len());
            write_records(&mut out, black_box(&collection)).unwrap();
            out
        })
    });

    c.bench_function("read_records_1000", |b| {
        b.iter(|| read_records(Cursor::new(black_box(&encoded))).unwrap())
    });
}

criterion_group!(benches, collection_benchmarks, sort_benchmarks, codec_benchmarks);
criterion_main!(benches);
