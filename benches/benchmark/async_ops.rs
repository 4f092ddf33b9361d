use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};

#[cfg(feature = "async")]
use crate::common::{realistic_orders, DomainError, Order};
#[cfg(feature = "async")]
use criterion::{BenchmarkId, Throughput};
#[cfg(feature = "async")]
use result_rail::prelude_async::*;
#[cfg(feature = "async")]
use std::hint::black_box;
#[cfg(feature = "async")]
use tokio::runtime::Runtime;

#[cfg(feature = "async")]
async fn charge(order: Order) -> Result<u64, DomainError> {
    if order.amount_cents % 13 == 0 {
        Err(DomainError::Declined(order.order_id))
    } else {
        Ok(order.amount_cents)
    }
}

#[cfg(feature = "async")]
pub fn bench_async_result_chain(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/result_chain");

    group.bench_function("success_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = async_ok::<Order, DomainError>(Order::new(1))
                    .and_then_async(charge)
                    .map(|cents| cents / 100)
                    .await;
                black_box(result)
            })
        })
    });

    group.bench_function("error_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = async_err::<Order, DomainError>(DomainError::Timeout(1))
                    .and_then_async(charge)
                    .map(|cents| cents / 100)
                    .await;
                black_box(result)
            })
        })
    });

    group.finish();
}

#[cfg(feature = "async")]
pub fn bench_collect_all(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/collect_all");

    for size in [10usize, 100, 1000] {
        let orders: Vec<_> = realistic_orders().iter().take(size).cloned().collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| {
                rt.block_on(async {
                    let array = ResultArray::from(orders.clone()).and_then_async(charge).await;
                    black_box(array)
                })
            })
        });
    }

    group.finish();
}

#[cfg(feature = "async")]
criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets =
        bench_async_result_chain,
        bench_collect_all,
}

#[cfg(not(feature = "async"))]
criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets = dummy
}

#[cfg(not(feature = "async"))]
fn dummy(_c: &mut Criterion) {}
