//! Tests for AsyncResult and the ResultAsyncExt bridge.

use result_rail::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};

async fn halve(n: u32) -> Result<u32, String> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(format!("{n} is odd"))
    }
}

#[tokio::test]
async fn map_on_err_never_invokes_op() {
    let calls = AtomicU32::new(0);

    let result = Err::<u32, &str>("x")
        .into_async()
        .map(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            v
        })
        .await;

    assert_eq!(result, Err("x"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn resolved_constructors_expose_the_variant() {
    assert!(async_ok::<u8, ()>(1).is_ok().await);
    assert!(async_err::<(), u8>(1).is_err().await);
    assert_eq!(async_ok::<u8, ()>(1).ok().await, Some(1));
    assert_eq!(async_ok::<u8, ()>(1).err().await, None);
    assert_eq!(AsyncResult::resolved(Err::<(), _>("e")).err().await, Some("e"));
    assert_eq!(AsyncResult::from(Ok::<_, ()>(3)).await, Ok(3));
}

#[tokio::test]
async fn sync_combinators_mirror_result() {
    let ok = || async_ok::<u32, &str>(4);
    let err = || async_err::<u32, &str>("e");

    assert_eq!(ok().map(|n| n + 1).await, Ok(5));
    assert_eq!(err().map_err(str::len).await, Err(1));
    assert_eq!(ok().and(Ok::<char, &str>('c')).await, Ok('c'));
    assert_eq!(err().and(Ok::<char, &str>('c')).await, Err("e"));
    assert_eq!(err().or(Ok::<u32, ()>(9)).await, Ok(9));
    assert_eq!(err().or_else(|e| Err::<u32, usize>(e.len())).await, Err(1));
    assert_eq!(ok().flip().await, Err(4));
    assert_eq!(ok().map_or(0, |n| n * 2).await, 8);
    assert_eq!(err().map_or_else(|e| e.len() as u32, |n| n).await, 1);
    assert_eq!(err().unwrap_or(7).await, 7);
    assert_eq!(err().unwrap_or_else(|_| 8).await, 8);
    assert_eq!(ok().unwrap().await, 4);
    assert_eq!(err().unwrap_err().await, "e");
}

#[tokio::test]
async fn and_then_async_chains_without_early_resolution() {
    let result = async_ok::<u32, String>(8)
        .and_then_async(halve)
        .and_then_async(|n| async_ok::<u32, String>(n + 1))
        .and_then_async(halve)
        .await;

    assert_eq!(result, Err("5 is odd".to_string()));
}

#[tokio::test]
async fn async_bind_satisfies_monad_laws() {
    let cases: [Result<u32, String>; 3] = [Ok(8), Ok(6), Err("start".to_string())];

    for start in cases {
        let right_identity = start.clone().and_then_async(async_ok::<u32, String>).await;
        assert_eq!(right_identity, start);

        let chained = start.clone().and_then_async(halve).and_then_async(halve).await;
        let nested = start
            .clone()
            .and_then_async(|x| halve(x).into_async_result().and_then_async(halve))
            .await;
        assert_eq!(chained, nested);
    }

    assert_eq!(Ok::<u32, String>(6).and_then_async(halve).await, halve(6).await);
}

#[tokio::test]
async fn wrong_side_futures_are_never_polled() {
    let polled = &AtomicU32::new(0);
    let probe = move || async move {
        polled.fetch_add(1, Ordering::SeqCst);
        Ok::<u8, &str>(0)
    };

    assert_eq!(Err::<u8, &str>("e").and_async(probe()).await, Err("e"));
    assert_eq!(Ok::<u8, &str>(1).or_async(probe()).await, Ok(1));
    assert_eq!(async_err::<u8, &str>("e").and_async(probe()).await, Err("e"));
    assert_eq!(async_ok::<u8, &str>(1).or_async(probe()).await, Ok(1));
    assert_eq!(polled.load(Ordering::SeqCst), 0);

    assert_eq!(Ok::<u8, &str>(1).and_async(probe()).await, Ok(0));
    assert_eq!(polled.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn wrong_side_async_closures_are_never_invoked() {
    let calls = &AtomicU32::new(0);

    let mapped = Err::<u32, &str>("e")
        .map_async(move |n| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        })
        .await;
    let recovered = Ok::<u32, &str>(1)
        .or_else_async(move |_| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<u32, ()>(0)
        })
        .await;

    assert_eq!(mapped, Err("e"));
    assert_eq!(recovered, Ok(1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn err_side_async_combinators() {
    let mapped = Err::<u8, u16>(404)
        .map_err_async(|code| async move { format!("status {code}") })
        .await;
    assert_eq!(mapped, Err("status 404".to_string()));

    let recovered = async_err::<u32, &str>("cache miss")
        .or_else_async(|_| halve(12))
        .await;
    assert_eq!(recovered, Ok(6));

    let fallback = async_err::<u32, &str>("e").or_async(halve(3)).await;
    assert_eq!(fallback, Err("3 is odd".to_string()));
}

#[tokio::test]
async fn result_array_bridges_into_async_result_array() {
    let array = async_ok::<&str, &str>("a,b,c")
        .result_array(|e| vec![e], |csv| csv.split(',').collect::<Vec<_>>())
        .map(str::to_uppercase)
        .await;

    assert_eq!(array.oks(), vec!["A", "B", "C"]);

    let errors = async_err::<&str, &str>("x").result_array(|e| [e, e], |v| [v]).errs().await;
    assert_eq!(errors, vec!["x", "x"]);
}

#[tokio::test]
async fn boxed_chains_can_be_stored_together() {
    let chains: Vec<BoxAsyncResult<'static, u32, String>> = vec![
        async_ok::<u32, String>(1).map(|n| n * 10).boxed(),
        async_err::<u32, String>("nope".to_string()).boxed(),
        halve(6).into_async_result().boxed(),
    ];

    let mut settled = Vec::new();
    for chain in chains {
        settled.push(chain.await);
    }

    assert_eq!(settled, vec![Ok(10), Err("nope".to_string()), Ok(3)]);
}

#[tokio::test]
async fn async_result_runs_on_a_spawned_task() {
    let handle = tokio::spawn(halve(20).into_async_result().and_then_async(halve).map(|n| n + 1));

    assert_eq!(handle.await.unwrap(), Ok(6));
}

#[tokio::test]
#[should_panic(expected = "broken")]
async fn unwrap_on_err_panics_on_resolution() {
    let _ = async_err::<u8, &str>("broken").unwrap().await;
}

#[tokio::test]
#[should_panic(expected = "config present")]
async fn expect_err_on_ok_panics_with_message() {
    let _ = async_ok::<u8, &str>(1).expect_err("config present").await;
}
