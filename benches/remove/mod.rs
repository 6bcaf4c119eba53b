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
    let mut g = c.benchmark_group("remove");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// For a tree containing `n_values`, measure removing every interval until the
/// tree is empty ("drain"), and replacing each interval with a new one so the
/// tree size stays constant ("churn").
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
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
        bench: "drain",
        n_values,
    };

    g.throughput(Throughput::Elements(n_values as _)); // Removals per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                for v in &values {
                    assert!(t.remove(v));
                }
                assert!(t.is_empty());
                t
            },
            BatchSize::PerIteration,
        );
    });

    let bench_name = BenchName {
        bench: "churn",
        n_values,
    };

    // Each iteration removes the oldest interval and inserts a fresh one drawn
    // from the LFSR state following the initial inserts.
    g.throughput(Throughput::Elements(n_values as _)); // Replacements per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (t.clone(), rand.clone()),
            |(mut t, mut rand)| {
                for v in &values {
                    assert!(t.remove(v));
                    t.insert(rand.next_interval()).unwrap();
                }
                assert_eq!(t.len(), n_values);
                t
            },
            BatchSize::PerIteration,
        );
    });
}
