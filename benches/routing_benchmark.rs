use cgr::{
    best_route, k_routes_by_consumption, k_routes_by_deviation, Contact, ContactSet,
    NeighborIndex, Query,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

/// A long chain of single-hop contacts, node `i` to node `i+1`, each with a
/// slightly later window — representative of a multi-satellite relay path.
fn chain_contact_set(hops: i64) -> ContactSet {
    let mut contacts = Vec::with_capacity(hops as usize);
    for i in 0..hops {
        contacts.push(Contact {
            id: i,
            from: i,
            to: i + 1,
            t_start: i as f64 * 10.0,
            t_end: i as f64 * 10.0 + 500.0,
            owlt: 0.5,
            rate_bps: 1e7,
            setup_s: 0.1,
            residual_bytes: 1e9,
        });
    }
    ContactSet::new(contacts)
}

pub fn benchmark(c: &mut Criterion) {
    let hops = 200;
    let query = Query { src: 0, dst: hops, t0: 0.0, bundle_bytes: 5e7, expiry: 0.0 };

    let mut group = c.benchmark_group("Routing");

    group.bench_function("best_route_chain_200", |b| {
        b.iter_batched(
            || (chain_contact_set(hops), query),
            |(contacts, q)| {
                let index = NeighborIndex::build(&contacts);
                black_box(best_route(black_box(&contacts), black_box(&index), black_box(&q)))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("k_routes_by_consumption_chain_200", |b| {
        b.iter_batched(
            || (chain_contact_set(hops), query),
            |(contacts, q)| {
                let index = NeighborIndex::build(&contacts);
                black_box(k_routes_by_consumption(
                    black_box(&contacts),
                    black_box(&index),
                    black_box(&q),
                    5,
                ))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("k_routes_by_deviation_chain_200", |b| {
        b.iter_batched(
            || (chain_contact_set(hops), query),
            |(contacts, q)| {
                let index = NeighborIndex::build(&contacts);
                black_box(k_routes_by_deviation(
                    black_box(&contacts),
                    black_box(&index),
                    black_box(&q),
                    5,
                ))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = benchmark
}
criterion_main!(benches);
