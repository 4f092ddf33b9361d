use result_rail::{NonEmptyVec, ResultArray};

fn shape<K, T, E>(array: ResultArray<(K, NonEmptyVec<T>), E>) -> Vec<Result<(K, Vec<T>), E>> {
    array.into_iter().map(|r| r.map(|(key, bucket)| (key, bucket.into_vec()))).collect()
}

#[test]
fn group_appends_errors_after_all_buckets() {
    let array = ResultArray::from(vec![Err("first"), Ok("apple"), Err("second"), Ok("bean"), Ok("avocado")]);

    let grouped = shape(array.group(|word| word.as_bytes()[0]));

    assert_eq!(
        grouped,
        vec![
            Ok((b'a', vec!["apple", "avocado"])),
            Ok((b'b', vec!["bean"])),
            Err("first"),
            Err("second"),
        ]
    );
}

#[test]
fn group_of_empty_array_is_empty() {
    let grouped = ResultArray::<u8, ()>::default().group(|n| *n);
    assert!(grouped.is_empty());
}

#[test]
fn group_of_only_errors_keeps_them() {
    let grouped = shape(ResultArray::<u8, _>::err(["x", "y"]).group(|n| *n));
    assert_eq!(grouped, vec![Err("x"), Err("y")]);
}

#[test]
fn group_calls_key_fn_once_per_ok() {
    let mut calls = 0;
    let array = ResultArray::from(vec![Ok(3), Err(()), Ok(4), Ok(5)]);

    let grouped = array.group(|n| {
        calls += 1;
        n % 2
    });

    assert_eq!(calls, 3);
    assert_eq!(grouped.len(), 3);
}

#[test]
fn group_by_encoding_keeps_the_first_key() {
    let array = ResultArray::<_, ()>::ok(["Rust", "go", "RUST", "Go", "zig"]);

    let grouped = shape(array.group_by_encoding(|lang| lang.to_string(), |key| key.to_lowercase()));

    assert_eq!(
        grouped,
        vec![
            Ok(("Rust".to_string(), vec!["Rust", "RUST"])),
            Ok(("go".to_string(), vec!["go", "Go"])),
            Ok(("zig".to_string(), vec!["zig"])),
        ]
    );
}

#[test]
fn batch_skips_errors_when_counting() {
    let array = ResultArray::from(vec![Ok(1), Err("x"), Ok(2), Ok(3), Err("y")]);

    let batched = shape(array.batch(2));

    assert_eq!(batched, vec![Ok((0, vec![1, 2])), Ok((1, vec![3])), Err("x"), Err("y")]);
}

#[test]
fn batch_larger_than_input_yields_one_bucket() {
    let batched = shape(ResultArray::<_, ()>::ok([1, 2, 3]).batch(10));
    assert_eq!(batched, vec![Ok((0, vec![1, 2, 3]))]);
}

#[test]
fn batch_buckets_never_exceed_size() {
    let batched = ResultArray::<_, ()>::ok(0..23).batch(5).oks();

    assert_eq!(batched.len(), 5);
    assert!(batched.iter().all(|(_, bucket)| bucket.len() <= 5));
    assert_eq!(batched.last().map(|(index, bucket)| (*index, bucket.len())), Some((4, 3)));
}

#[test]
#[should_panic(expected = "batch size must be non-zero")]
fn batch_of_zero_panics() {
    let _ = ResultArray::<_, ()>::ok([1]).batch(0);
}
