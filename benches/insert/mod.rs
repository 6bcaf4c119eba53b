use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interval_avl::{Interval, IntervalTree};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_distinct(&mut g, n_values);
        bench_duplicated(&mut g, n_values);
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// intervals into an empty tree.
fn bench_distinct<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "distinct",
        n_values,
    };

    g.throughput(Throughput::Elements(n_values as _)); // Intervals inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (IntervalTree::<u16>::new(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next_interval()).unwrap();
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}

/// Measure the time needed to insert `n_values` intervals into a tree that
/// already holds an equal copy of each, chaining every insert onto an existing
/// node instead of rebalancing.
fn bench_duplicated<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let values = (0..n_values)
        .map(|_| rand.next_interval())
        .collect::<Vec<Interval<u16>>>();

    let mut t = IntervalTree::new();
    for v in &values {
        t.insert(v.clone()).unwrap();
    }

    let bench_name = BenchName {
        bench: "duplicated",
        n_values,
    };

    g.throughput(Throughput::Elements(n_values as _)); // Intervals inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (t.clone(), values.clone()),
            |(mut t, values)| {
                for v in values {
                    let created = t.insert(v).unwrap();
                    assert!(!created);
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}
