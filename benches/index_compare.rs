use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use regbench::dataset;
use regbench::{ChainedHashMap, MultiIndex, OrderedIndex, RecordIndex, RecordTree};

const RECORD_COUNT: usize = 1000;
const BUCKET_COUNT: usize = 100;

fn records() -> Vec<regbench::Record> {
    let mut rng = StdRng::seed_from_u64(17);
    dataset::generate(&mut rng, RECORD_COUNT)
}

fn populated<I: RecordIndex>(mut index: I, records: &[regbench::Record]) -> I {
    for record in records {
        index.insert(record.clone());
    }
    index
}

fn bench_insert<I: RecordIndex>(c: &mut Criterion, make: fn() -> I) {
    let records = records();
    c.bench_function(&format!("{} insert {}", I::NAME, RECORD_COUNT), move |b| {
        b.iter(|| {
            let index = populated(make(), &records);
            black_box(&index);
        })
    });
}

fn bench_lookup<I: RecordIndex>(c: &mut Criterion, make: fn() -> I) {
    let records = records();
    let keys = dataset::query_keys(&records);
    let index = populated(make(), &records);
    c.bench_function(&format!("{} lookup {}", I::NAME, RECORD_COUNT), move |b| {
        b.iter(|| {
            let mut hits = 0;
            for key in &keys {
                if index.search(black_box(key)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_tree(c: &mut Criterion) {
    bench_insert(c, RecordTree::new);
    bench_lookup(c, RecordTree::new);
}

fn bench_chained(c: &mut Criterion) {
    fn make() -> ChainedHashMap {
        ChainedHashMap::new(BUCKET_COUNT).unwrap()
    }
    bench_insert(c, make);
    bench_lookup(c, make);
}

fn bench_ordered(c: &mut Criterion) {
    bench_insert(c, OrderedIndex::new);
    bench_lookup(c, OrderedIndex::new);
}

fn bench_multi(c: &mut Criterion) {
    bench_insert(c, MultiIndex::new);
    bench_lookup(c, MultiIndex::new);
}

criterion_group!(benches, bench_tree, bench_chained, bench_ordered, bench_multi);
criterion_main!(benches);
