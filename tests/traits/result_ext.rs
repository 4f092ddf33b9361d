use result_rail::traits::ResultExt;
use std::cell::Cell;

fn halve(n: u32) -> Result<u32, String> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(format!("{n} is odd"))
    }
}

fn decrement(n: u32) -> Result<u32, String> {
    n.checked_sub(1).ok_or_else(|| "underflow".to_string())
}

#[test]
fn ok_exposes_only_the_value() {
    for x in [0u32, 7, u32::MAX] {
        let result: Result<u32, String> = Ok(x);
        assert!(result.is_ok());
        assert_eq!(result.clone().ok(), Some(x));
        assert_eq!(result.err(), None);
    }
}

#[test]
fn map_on_err_never_calls_op() {
    let calls = Cell::new(0);
    let result: Result<u32, &str> = Err("x");

    let mapped = result.map(|v| {
        calls.set(calls.get() + 1);
        v + 1
    });

    assert_eq!(mapped, Err("x"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_satisfies_monad_laws() {
    let cases: [Result<u32, String>; 4] = [Ok(8), Ok(3), Ok(0), Err("start".to_string())];

    for r in cases {
        // right identity
        assert_eq!(r.clone().and_then(Ok), r);
        // associativity
        let chained = r.clone().and_then(halve).and_then(decrement);
        let nested = r.clone().and_then(|x| halve(x).and_then(decrement));
        assert_eq!(chained, nested);
    }

    // left identity
    for x in [8u32, 3] {
        assert_eq!(Ok::<u32, String>(x).and_then(halve), halve(x));
    }
}

#[test]
fn flip_swaps_variants_and_keeps_payload() {
    assert_eq!(Ok::<i32, &str>(5).flip(), Err(5));
    assert_eq!(Err::<i32, &str>("e").flip(), Ok("e"));
    assert_eq!(Ok::<i32, &str>(5).flip().flip(), Ok(5));
}

#[test]
fn result_array_runs_only_the_matching_function() {
    let err_calls = Cell::new(0);
    let ok: Result<&str, &str> = Ok("a,b");
    let array = ok.result_array(
        |e| {
            err_calls.set(err_calls.get() + 1);
            vec![e]
        },
        |csv| csv.split(',').collect::<Vec<_>>(),
    );

    assert_eq!(array.into_vec(), vec![Ok("a"), Ok("b")]);
    assert_eq!(err_calls.get(), 0);

    let failed: Result<u8, &str> = Err("bad input");
    let errors = failed.result_array(|e| e.split(' '), |v| [v]);
    assert_eq!(errors.into_vec(), vec![Err("bad"), Err("input")]);
}

#[test]
fn result_array_from_empty_payload_is_empty() {
    let ok: Result<Vec<u8>, ()> = Ok(Vec::new());
    let array = ok.result_array(|e| [e], |values| values);
    assert!(array.is_empty());
}

#[test]
fn display_returns_the_result_unchanged() {
    assert_eq!(Ok::<u8, &str>(1).display(), Ok(1));
    assert_eq!(Err::<u8, &str>("e").display(), Err("e"));
}

#[test]
#[should_panic(expected = "called `Result::unwrap()` on an `Err` value: \"boom\"")]
fn unwrap_on_err_panics_with_payload() {
    let result: Result<u8, &str> = Err("boom");
    let _ = result.unwrap();
}
