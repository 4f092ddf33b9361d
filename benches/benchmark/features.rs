use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};

#[cfg(feature = "serde")]
use crate::common::realistic_orders;
#[cfg(feature = "serde")]
use result_rail::{types::canonical_key, ResultArray};
#[cfg(feature = "serde")]
use std::hint::black_box;

#[cfg(feature = "serde")]
pub fn bench_canonical_grouping(c: &mut Criterion) {
    let orders = realistic_orders();

    c.bench_function("serde/canonical_key", |b| {
        let order = orders.iter().flatten().next().cloned();
        b.iter(|| black_box(canonical_key(black_box(&order))))
    });

    c.bench_function("serde/group_canonical", |b| {
        b.iter(|| {
            let array = ResultArray::from(black_box(orders.clone()));
            black_box(array.group_canonical(|order| (order.region, order.amount_cents % 7)))
        })
    });

    c.bench_function("serde/group_ord_baseline", |b| {
        b.iter(|| {
            let array = ResultArray::from(black_box(orders.clone()));
            black_box(array.group(|order| (order.region, order.amount_cents % 7)))
        })
    });
}

#[cfg(feature = "serde")]
pub fn bench_result_array_serialization(c: &mut Criterion) {
    let orders = realistic_orders();
    let array: ResultArray<_, String> = ResultArray::from(orders.clone()).map_err(|e| format!("{e:?}"));

    c.bench_function("serde/result_array_to_json", |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&array))))
    });
}

#[cfg(feature = "serde")]
criterion_group! {
    name = serde_benches;
    config = configure_criterion();
    targets =
        bench_canonical_grouping,
        bench_result_array_serialization,
}

#[cfg(not(feature = "serde"))]
criterion_group! {
    name = serde_benches;
    config = configure_criterion();
    targets = dummy
}

#[cfg(not(feature = "serde"))]
fn dummy(_c: &mut Criterion) {}
