use criterion::*;
use rand::prelude::*;
use skipindex::{Builder, SkipList};

fn random_key(rng: &mut StdRng) -> u64 {
  rng.random()
}

fn round(l: &mut SkipList<u64, u64>, case: &(u64, bool), exp: u64) {
  if case.1 {
    if let Some(ent) = l.get(&case.0) {
      assert_eq!(*ent.value(), exp);
    }
  } else {
    l.set(case.0, exp);
  }
}

fn bench_read_write_frac(b: &mut Bencher<'_>, frac: &usize) {
  let frac = *frac;
  let mut list: SkipList<u64, u64> = Builder::new().with_seed(Some(0)).build().unwrap();
  let mut rng = StdRng::seed_from_u64(1);
  for _ in 0..10_000 {
    list.set(random_key(&mut rng), 123);
  }

  b.iter_batched_ref(
    || (random_key(&mut rng), frac > rng.random_range(0..11)),
    |case| round(&mut list, case, 123),
    BatchSize::SmallInput,
  );
}

fn bench_read_write(c: &mut Criterion) {
  let mut group = c.benchmark_group("skiplist_read_write");
  for i in 0..=10 {
    group.bench_with_input(BenchmarkId::from_parameter(i), &i, bench_read_write_frac);
  }
  group.finish();
}

fn bench_add_duplicates(c: &mut Criterion) {
  let mut list: SkipList<u64, u64> = Builder::new().with_seed(Some(0)).build().unwrap();
  let mut rng = StdRng::seed_from_u64(2);
  c.bench_function("skiplist_add_duplicates", |b| {
    b.iter_batched(
      || rng.random_range(0..1024u64),
      |key| {
        list.add(key, key);
      },
      BatchSize::SmallInput,
    )
  });
}

fn bench_range(c: &mut Criterion) {
  let list: SkipList<u64, u64> = (0..100_000).map(|i| (i, i)).collect();
  let mut rng = StdRng::seed_from_u64(3);
  c.bench_function("skiplist_range_100", |b| {
    b.iter_batched(
      || rng.random_range(0..100_000u64),
      |from| list.range(&from, &(from + 99)).count(),
      BatchSize::SmallInput,
    )
  });
}

fn bench_add_remove(c: &mut Criterion) {
  let mut list: SkipList<u64, u64> = (0..10_000).map(|i| (i, i)).collect();
  let mut rng = StdRng::seed_from_u64(4);
  c.bench_function("skiplist_add_remove", |b| {
    b.iter_batched(
      || rng.random_range(0..10_000u64),
      |key| {
        let ptr = list.add(key, key).ptr();
        list.remove(ptr);
      },
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(
  benches,
  bench_read_write,
  bench_add_duplicates,
  bench_range,
  bench_add_remove,
);
criterion_main!(benches);
