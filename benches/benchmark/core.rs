use crate::common::{configure_criterion, realistic_orders, DomainError, Order};
use criterion::{criterion_group, Criterion};
use result_rail::{ResultArray, ResultExt};
use std::hint::black_box;

pub fn bench_result_ext(c: &mut Criterion) {
    c.bench_function("core/flip", |b| {
        b.iter(|| {
            let result: Result<u64, DomainError> = Ok(black_box(42));
            black_box(result.flip())
        })
    });

    c.bench_function("core/result_array_bridge", |b| {
        b.iter(|| {
            let result: Result<Order, DomainError> = Ok(Order::new(black_box(7)));
            black_box(result.result_array(|e| [e], |order| [order.clone(), order]))
        })
    });
}

pub fn bench_element_wise(c: &mut Criterion) {
    let orders = realistic_orders();

    c.bench_function("core/map_and_then", |b| {
        b.iter(|| {
            let array = ResultArray::from(black_box(orders.clone()));
            black_box(
                array
                    .map(|order| order.amount_cents)
                    .and_then(|cents| {
                        if cents > 9_500 {
                            Err(DomainError::Declined(cents))
                        } else {
                            Ok(cents * 2)
                        }
                    })
                    .partition(),
            )
        })
    });

    c.bench_function("core/collect_from_iterator", |b| {
        b.iter(|| black_box(orders.iter().cloned().collect::<ResultArray<_, _>>()))
    });
}

pub fn bench_fan_out(c: &mut Criterion) {
    let orders = realistic_orders();

    c.bench_function("core/flat_map", |b| {
        b.iter(|| {
            let array = ResultArray::from(black_box(orders.clone()));
            black_box(array.flat_map(|order| [order.order_id, order.amount_cents]))
        })
    });

    c.bench_function("core/flat_and_then", |b| {
        b.iter(|| {
            let array = ResultArray::from(black_box(orders.clone()));
            black_box(array.flat_and_then(|order| {
                ResultArray::from(vec![Ok(order.order_id), Err(DomainError::Timeout(order.order_id))])
            }))
        })
    });
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_result_ext,
        bench_element_wise,
        bench_fan_out,
}
