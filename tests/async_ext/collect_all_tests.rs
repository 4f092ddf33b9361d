//! Tests for the collect-all join behind `AsyncResultArray::from_async_array`.

use result_rail::prelude_async::*;
use std::future::Ready;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::sleep;

async fn settle_after(delay_ms: u64, outcome: Result<u32, String>) -> Result<u32, String> {
    sleep(Duration::from_millis(delay_ms)).await;
    outcome
}

#[tokio::test]
async fn second_failure_is_recorded_regardless_of_completion_order() {
    for delays in [[5u64, 20, 40], [40, 20, 5], [20, 40, 5]] {
        let outcomes = [Ok(1), Err("second failed".to_string()), Ok(3)];
        let array = AsyncResultArray::from_async_array(
            delays.into_iter().zip(outcomes).map(|(delay, outcome)| settle_after(delay, outcome)),
        )
        .await;

        assert_eq!(array.len(), 3);
        assert_eq!(array.clone().errs(), vec!["second failed".to_string()]);
        assert_eq!(array.into_vec(), vec![Ok(1), Err("second failed".to_string()), Ok(3)]);
    }
}

#[tokio::test]
async fn early_failure_does_not_cancel_the_rest() {
    let finished = &AtomicU32::new(0);

    let array = AsyncResultArray::from_async_array((0..4u32).map(|i| async move {
        if i == 0 {
            return Err(format!("input {i} failed"));
        }
        sleep(Duration::from_millis(u64::from(i) * 5)).await;
        finished.fetch_add(1, Ordering::SeqCst);
        Ok(i)
    }))
    .await;

    assert_eq!(finished.load(Ordering::SeqCst), 3);
    assert_eq!(array.into_vec(), vec![Err("input 0 failed".to_string()), Ok(1), Ok(2), Ok(3)]);
}

#[tokio::test]
async fn all_failures_still_yield_one_entry_each() {
    let array = AsyncResultArray::from_async_array(
        ["a", "b"].map(|e| settle_after(1, Err(e.to_string()))),
    )
    .await;

    assert_eq!(array.errs(), vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn empty_input_yields_empty_array() {
    let array = AsyncResultArray::from_async_array(Vec::<Ready<Result<u8, ()>>>::new()).await;

    assert!(array.is_empty());
}

#[tokio::test]
async fn async_results_can_be_joined() {
    let inputs = vec![
        async_ok::<u32, String>(2).map(|n| n * 2).boxed(),
        async_err::<u32, String>("missing".to_string()).boxed(),
        settle_after(2, Ok(8)).into_async_result().boxed(),
    ];

    let array = AsyncResultArray::from_async_array(inputs).map(|n| n + 1).await;

    assert_eq!(array.into_vec(), vec![Ok(5), Err("missing".to_string()), Ok(9)]);
}

#[tokio::test]
async fn inputs_are_polled_concurrently() {
    let started = &AtomicU32::new(0);

    // Each input waits until every input has started, which only succeeds when
    // the join polls them side by side.
    let array = AsyncResultArray::from_async_array((0..3u32).map(|i| async move {
        started.fetch_add(1, Ordering::SeqCst);
        for _ in 0..100 {
            if started.load(Ordering::SeqCst) == 3 {
                return Ok::<u32, &str>(i);
            }
            sleep(Duration::from_millis(1)).await;
        }
        Err("inputs ran one after another")
    }))
    .await;

    assert_eq!(array.unwrap(), vec![0, 1, 2]);
}
